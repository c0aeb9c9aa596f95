use thiserror::Error;

/// Hard validation failures that block a save outright.
///
/// Weekday/date mismatches and overlaps are deliberately not represented
/// here: they are advisory conditions the user rules on, carried as
/// [`Confirmation`](crate::Confirmation) values on a save plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("start time must be before end time")]
    InvalidTimeRange,

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}
