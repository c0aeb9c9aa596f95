use serde::{Deserialize, Serialize};

/// Built-in header template. `{day}` and `{date}` are the only placeholders
/// the header understands.
pub const DEFAULT_DAY_HEADER: &str = "{day}, {date}\nTomorrow's class schedule:";

/// Built-in per-class line template.
pub const DEFAULT_CLASS_LINE: &str =
    "{courseCode}--({startTime}-{endTime})--{instructor}--({room}-{building})";

/// User-editable pair of text patterns controlling exported schedule text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatTemplate {
    #[serde(default)]
    pub day_header: String,
    #[serde(default)]
    pub class_line: String,
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self {
            day_header: DEFAULT_DAY_HEADER.to_string(),
            class_line: DEFAULT_CLASS_LINE.to_string(),
        }
    }
}

impl FormatTemplate {
    /// Header pattern, falling back field-wise to the built-in default when
    /// the stored string is empty.
    pub fn effective_day_header(&self) -> &str {
        if self.day_header.is_empty() {
            DEFAULT_DAY_HEADER
        } else {
            &self.day_header
        }
    }

    /// Class-line pattern with the same field-wise fallback.
    pub fn effective_class_line(&self) -> &str {
        if self.class_line.is_empty() {
            DEFAULT_CLASS_LINE
        } else {
            &self.class_line
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_fall_back_individually() {
        let template = FormatTemplate {
            day_header: String::new(),
            class_line: "{courseCode}".to_string(),
        };
        assert_eq!(template.effective_day_header(), DEFAULT_DAY_HEADER);
        assert_eq!(template.effective_class_line(), "{courseCode}");
    }
}
