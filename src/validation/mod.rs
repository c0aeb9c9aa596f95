mod overlap;
mod rules;

pub use overlap::is_overlapping_with_other;
pub use rules::{validate_form_data, DateCheck};
