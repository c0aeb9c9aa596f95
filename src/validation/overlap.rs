use chrono::NaiveDate;

use crate::models::{ClassEntry, Weekday};
use crate::utils::time::parse_time_to_minutes;

/// Pairwise overlap check for a candidate time range against every entry in
/// `schedule` except `skip_id`.
///
/// Two entries are compared only when the date-reconciliation rule says they
/// can actually collide on `weekday` (the day being edited):
///
/// - neither has a date: both are weekly patterns for that weekday;
/// - both have dates: only an exact calendar-day match collides;
/// - exactly one has a date: they collide only when that date falls on
///   `weekday`.
///
/// Intervals are half-open, so ranges that merely touch at an endpoint do
/// not overlap. The result is advisory; the caller decides whether an
/// overlap blocks the save.
pub fn is_overlapping_with_other(
    schedule: &[ClassEntry],
    start_time: &str,
    end_time: &str,
    skip_id: Option<&str>,
    date: Option<NaiveDate>,
    weekday: Weekday,
    ignore_defaults: bool,
) -> bool {
    let (Some(start), Some(end)) = (
        parse_time_to_minutes(start_time),
        parse_time_to_minutes(end_time),
    ) else {
        return false;
    };

    for item in schedule {
        if skip_id.is_some_and(|id| item.id == id) {
            continue;
        }
        // A temporary one-off may deliberately override the weekly pattern,
        // so dateless entries are excluded when the caller says so.
        if ignore_defaults && item.date.is_none() {
            continue;
        }

        let comparable = match (date, item.date) {
            (None, None) => true,
            (Some(candidate), Some(existing)) => candidate == existing,
            (Some(candidate), None) => Weekday::of(candidate) == weekday,
            (None, Some(existing)) => Weekday::of(existing) == weekday,
        };
        if !comparable {
            continue;
        }

        let (Some(item_start), Some(item_end)) = (
            parse_time_to_minutes(&item.start_time),
            parse_time_to_minutes(&item.end_time),
        ) else {
            continue;
        };

        if start.max(item_start) < end.min(item_end) {
            return true;
        }
    }

    false
}
