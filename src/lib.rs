//! Core engine for a personal weekly class-schedule manager: a recurring
//! weekly timetable plus day-specific temporary overrides, with overlap
//! checking and template-driven text export. Presentation lives elsewhere
//! and drives everything here through [`ScheduleController`] and the
//! individual stores; persistence goes through the [`KeyValueStore`] seam.

mod config;
mod error;
mod format;
mod models;
mod options;
mod schedule;
mod storage;
mod utils;
mod validation;

pub use config::{DEFAULT_BUILDINGS, DEFAULT_COURSES, DEFAULT_INSTRUCTORS, DEFAULT_ROOMS};
pub use error::ValidationError;
pub use format::{
    apply_format_template, color_for_course, long_date, render_preview, TemplateStore,
    FALLBACK_COLOR,
};
pub use models::{
    ClassEntry, CourseOption, CustomOptions, EntryDraft, FormatTemplate, ListKind,
    RemovedDefaults, Weekday, DEFAULT_CLASS_LINE, DEFAULT_DAY_HEADER,
};
pub use options::OptionsStore;
pub use schedule::{Confirmation, MismatchDecision, SavePlan, ScheduleController, ScheduleStore};
pub use storage::{keys, KeyValueStore, MemoryStore, SqliteStore};
pub use utils::time::{is_valid_time_range, parse_time_to_minutes};
pub use utils::week::{next_date_for_weekday, next_date_for_weekday_from};
pub use validation::{is_overlapping_with_other, validate_form_data, DateCheck};
