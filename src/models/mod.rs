mod entry;
mod options;
mod template;

pub use entry::{ClassEntry, EntryDraft, Weekday};
pub use options::{CourseOption, CustomOptions, ListKind, RemovedDefaults};
pub use template::{FormatTemplate, DEFAULT_CLASS_LINE, DEFAULT_DAY_HEADER};
