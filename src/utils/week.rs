//! Weekday/date arithmetic over the local calendar.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::models::Weekday;

/// Date of the next occurrence of `weekday`, counting from `today`.
///
/// When `include_today` is false and `today` already falls on `weekday`, the
/// result moves a full week ahead.
pub fn next_date_for_weekday_from(
    today: NaiveDate,
    weekday: Weekday,
    include_today: bool,
) -> NaiveDate {
    let today_index = today.weekday().num_days_from_sunday();
    let mut days_until = (weekday.index() + 7 - today_index) % 7;
    if !include_today && days_until == 0 {
        days_until = 7;
    }
    today + Duration::days(i64::from(days_until))
}

/// Same as [`next_date_for_weekday_from`], counting from the system clock.
pub fn next_date_for_weekday(weekday: Weekday, include_today: bool) -> NaiveDate {
    next_date_for_weekday_from(Local::now().date_naive(), weekday, include_today)
}
