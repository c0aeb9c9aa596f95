use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use log::info;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::format::{self, TemplateStore};
use crate::models::{ClassEntry, EntryDraft, FormatTemplate, Weekday};
use crate::schedule::ScheduleStore;
use crate::storage::{keys, KeyValueStore};
use crate::utils::week::next_date_for_weekday_from;
use crate::validation::{is_overlapping_with_other, validate_form_data, DateCheck};

/// Advisory conditions a save plan carries. The caller asks the user and
/// either commits the plan or drops it; the core hardcodes neither outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The entered date falls on `actual`, not the weekday being edited.
    WeekdayMismatch { entered: NaiveDate, actual: Weekday },
    /// The candidate's time range collides with a comparable entry.
    Overlap,
}

/// How a reported weekday mismatch is resolved at commit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchDecision {
    /// Store the date exactly as entered, even though its weekday disagrees
    /// with the tab it is filed under.
    KeepDate,
    /// Rewrite the date to the next occurrence of the edited weekday.
    AlignToWeekday,
}

/// A validated, normalized save awaiting a commit (or abandonment).
#[derive(Debug, Clone)]
pub struct SavePlan {
    pub weekday: Weekday,
    pub entry: ClassEntry,
    pub confirmations: Vec<Confirmation>,
}

impl SavePlan {
    pub fn needs_confirmation(&self) -> bool {
        !self.confirmations.is_empty()
    }
}

#[derive(Debug, Clone)]
struct EditTarget {
    id: String,
    is_temp: bool,
}

/// Application state for the schedule editor: the active weekday, the entry
/// being edited (if any), and the save/export flows tying the stores and
/// engines together.
///
/// Saving is two-phase. [`propose_save`](Self::propose_save) validates and
/// normalizes a form draft and reports the advisory conditions (overlap,
/// weekday mismatch); nothing is stored. [`commit_save`](Self::commit_save)
/// applies the user's decisions and persists. Aborting after a confirmation
/// prompt is simply never committing the plan.
pub struct ScheduleController<S> {
    kv: S,
    schedules: ScheduleStore<S>,
    templates: TemplateStore<S>,
    current_day: Weekday,
    editing: Option<EditTarget>,
}

impl<S: KeyValueStore + Clone> ScheduleController<S> {
    /// Load all persisted state, restoring the last active weekday.
    pub fn new(kv: S) -> Self {
        let schedules = ScheduleStore::load(kv.clone());
        let templates = TemplateStore::load(kv.clone());
        let current_day = match kv.get(keys::ACTIVE_DAY) {
            Ok(Some(raw)) => Weekday::parse(&raw).unwrap_or(Weekday::Sunday),
            _ => Weekday::Sunday,
        };
        Self {
            kv,
            schedules,
            templates,
            current_day,
            editing: None,
        }
    }

    pub fn schedules(&self) -> &ScheduleStore<S> {
        &self.schedules
    }

    pub fn current_day(&self) -> Weekday {
        self.current_day
    }

    /// Switch tabs: abandons any edit in progress and persists the
    /// selection.
    pub fn set_current_day(&mut self, day: Weekday) -> Result<()> {
        self.current_day = day;
        self.editing = None;
        self.kv.set(keys::ACTIVE_DAY, day.as_str())
    }

    /// Begin editing: returns the entry's field values as a form draft, or
    /// None when the id is unknown on the active day.
    pub fn begin_edit(&mut self, id: &str) -> Option<EntryDraft> {
        let entry = self.schedules.find(self.current_day, id)?.clone();
        self.editing = Some(EditTarget {
            id: id.to_string(),
            is_temp: self.schedules.is_temp(self.current_day, id),
        });
        Some(EntryDraft::from_entry(&entry))
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|target| target.id.as_str())
    }

    /// Which collection the edit target came from; the form locks the date
    /// input while a temporary entry is being edited.
    pub fn editing_is_temp(&self) -> Option<bool> {
        self.editing.as_ref().map(|target| target.is_temp)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Phase one of a save; see the type-level docs.
    pub fn propose_save(&self, draft: &EntryDraft) -> Result<SavePlan, ValidationError> {
        self.propose_save_on(draft, Local::now().date_naive())
    }

    /// Clock-explicit variant of [`propose_save`](Self::propose_save).
    pub fn propose_save_on(
        &self,
        draft: &EntryDraft,
        today: NaiveDate,
    ) -> Result<SavePlan, ValidationError> {
        let weekday = self.current_day;

        let mut confirmations = Vec::new();
        match validate_form_data(draft, weekday)? {
            DateCheck::Ok => {}
            DateCheck::Mismatch { entered, actual } => {
                confirmations.push(Confirmation::WeekdayMismatch { entered, actual });
            }
        }

        let date = stored_date(draft, weekday, today)?;
        let id = match &self.editing {
            Some(target) => target.id.clone(),
            None => Uuid::new_v4().to_string(),
        };
        let entry = ClassEntry {
            id,
            course: draft.course.clone(),
            course_code: draft.course_code.clone(),
            instructor: draft.instructor.clone(),
            room: draft.room.clone(),
            building: draft.building.clone(),
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
            date,
            temp_only: draft.temp_only,
        };

        let merged = self.schedules.merged(weekday);
        // A temporary one-off may deliberately replace the weekly pattern it
        // falls on, so the weekly defaults are excluded from its check.
        if is_overlapping_with_other(
            &merged,
            &draft.start_time,
            &draft.end_time,
            self.editing_id(),
            date,
            weekday,
            draft.temp_only,
        ) {
            confirmations.push(Confirmation::Overlap);
        }

        Ok(SavePlan {
            weekday,
            entry,
            confirmations,
        })
    }

    /// Phase two: apply the user's decisions and persist. Call this only
    /// once any confirmations on the plan were answered with "proceed".
    pub fn commit_save(
        &mut self,
        plan: SavePlan,
        mismatch: MismatchDecision,
    ) -> Result<ClassEntry> {
        self.commit_save_on(plan, mismatch, Local::now().date_naive())
    }

    /// Clock-explicit variant of [`commit_save`](Self::commit_save).
    pub fn commit_save_on(
        &mut self,
        mut plan: SavePlan,
        mismatch: MismatchDecision,
        today: NaiveDate,
    ) -> Result<ClassEntry> {
        let mismatched = plan
            .confirmations
            .iter()
            .any(|c| matches!(c, Confirmation::WeekdayMismatch { .. }));
        if mismatched && mismatch == MismatchDecision::AlignToWeekday {
            plan.entry.date = Some(next_date_for_weekday_from(today, plan.weekday, true));
        }

        let entry = plan.entry.clone();
        let is_edit = self
            .editing
            .as_ref()
            .is_some_and(|target| target.id == entry.id);
        if is_edit {
            self.schedules.update_entry(plan.weekday, entry.clone())?;
            self.editing = None;
        } else {
            self.schedules.add_entry(plan.weekday, entry.clone())?;
        }
        info!("Saved entry {} on {}", entry.id, plan.weekday);
        Ok(entry)
    }

    /// Delete an entry from the active day's named collection. Abandons the
    /// edit when the deleted entry was being edited.
    pub fn delete_entry(&mut self, id: &str, is_temp: bool) -> Result<bool> {
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        self.schedules.remove_entry(self.current_day, id, is_temp)
    }

    /// Clear every temporary entry across the week.
    pub fn reset_temporary(&mut self) -> Result<()> {
        self.editing = None;
        self.schedules.reset_temporary()
    }

    pub fn template(&self) -> &FormatTemplate {
        self.templates.current()
    }

    pub fn save_template(&mut self, template: FormatTemplate) -> Result<()> {
        if template.day_header.trim().is_empty() || template.class_line.trim().is_empty() {
            return Err(anyhow!("format template fields must not be blank"));
        }
        self.templates.save(template)
    }

    pub fn reset_template(&mut self) -> Result<()> {
        self.templates.reset()
    }

    /// Export text for the active day using the stored template; None when
    /// the day has no classes.
    pub fn export_text(&self) -> Option<String> {
        self.export_text_on(Local::now().date_naive())
    }

    /// Clock-explicit variant of [`export_text`](Self::export_text).
    pub fn export_text_on(&self, today: NaiveDate) -> Option<String> {
        let entries = self.schedules.merged(self.current_day);
        if entries.is_empty() {
            return None;
        }
        Some(format::apply_format_template(
            &entries,
            self.current_day,
            self.templates.current(),
            today,
        ))
    }

    /// Template-editor preview over fixed sample data.
    pub fn preview_template(&self, template: &FormatTemplate) -> String {
        format::render_preview(template, Local::now().date_naive())
    }
}

// Stored date for the normalized entry. A temporary one-off needs a concrete
// date, defaulting to the next occurrence of the day being edited; recurring
// entries keep whatever was entered, which may be nothing.
fn stored_date(
    draft: &EntryDraft,
    weekday: Weekday,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, ValidationError> {
    if draft.date.is_empty() {
        if draft.temp_only {
            return Ok(Some(next_date_for_weekday_from(today, weekday, true)));
        }
        return Ok(None);
    }
    NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate(draft.date.clone()))
}
