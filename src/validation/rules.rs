use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::models::{EntryDraft, Weekday};
use crate::utils::time::is_valid_time_range;

/// Outcome of the date portion of draft validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCheck {
    /// No date entered, or the date lands on the weekday being edited.
    Ok,
    /// The date parses but falls on a different weekday. Soft: the caller
    /// decides whether to keep the date or align it to the edited weekday.
    Mismatch { entered: NaiveDate, actual: Weekday },
}

/// Structural validation of a form draft against the weekday being edited.
///
/// Hard failures (missing fields, bad time range, unparsable date) come back
/// as errors and block the save. A weekday mismatch is reported, never
/// rejected: the decision belongs to the user.
pub fn validate_form_data(
    draft: &EntryDraft,
    weekday: Weekday,
) -> Result<DateCheck, ValidationError> {
    let required: [(&'static str, &str); 7] = [
        ("course", &draft.course),
        ("course code", &draft.course_code),
        ("instructor", &draft.instructor),
        ("room", &draft.room),
        ("building", &draft.building),
        ("start time", &draft.start_time),
        ("end time", &draft.end_time),
    ];
    for (name, value) in required {
        if value.is_empty() {
            return Err(ValidationError::MissingField(name));
        }
    }

    if !is_valid_time_range(&draft.start_time, &draft.end_time) {
        return Err(ValidationError::InvalidTimeRange);
    }

    // Temporary one-offs carry their own date handling in the save flow;
    // only a recurring draft's manually chosen date is checked against the
    // tab it is filed under.
    if !draft.temp_only && !draft.date.is_empty() {
        let entered = NaiveDate::parse_from_str(&draft.date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(draft.date.clone()))?;
        let actual = Weekday::of(entered);
        if actual != weekday {
            return Ok(DateCheck::Mismatch { entered, actual });
        }
    }

    Ok(DateCheck::Ok)
}
