//! Text export: template-driven rendering of a weekday's schedule.

mod color;
mod store;

pub use color::{color_for_course, FALLBACK_COLOR};
pub use store::TemplateStore;

use chrono::NaiveDate;

use crate::models::{ClassEntry, FormatTemplate, Weekday};
use crate::utils::week::next_date_for_weekday_from;

/// Render a weekday's schedule as export text.
///
/// Entries are stably sorted by start time ("HH:MM" strings sort correctly
/// as text). The header's `{date}` is the next occurrence of `weekday`
/// counting from `today`; each entry renders one class line. Every
/// occurrence of a placeholder is substituted, and unknown placeholders are
/// left verbatim.
pub fn apply_format_template(
    entries: &[ClassEntry],
    weekday: Weekday,
    template: &FormatTemplate,
    today: NaiveDate,
) -> String {
    let mut sorted: Vec<&ClassEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.start_time.cmp(&b.start_time));

    let date_text = long_date(next_date_for_weekday_from(today, weekday, true));
    let header = substitute(template.effective_day_header(), |token| match token {
        "day" => Some(weekday.as_str().to_string()),
        "date" => Some(date_text.clone()),
        _ => None,
    });

    let lines: Vec<String> = sorted
        .iter()
        .map(|entry| class_line(template, entry))
        .collect();

    let mut out = header;
    out.push('\n');
    out.push_str(&lines.join("\n"));
    out
}

/// Sample render for the template editor: two fixed classes on a Sunday.
pub fn render_preview(template: &FormatTemplate, today: NaiveDate) -> String {
    apply_format_template(&sample_entries(), Weekday::Sunday, template, today)
}

/// "Sunday, March 1, 2026", the long form used by the header's `{date}`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn class_line(template: &FormatTemplate, entry: &ClassEntry) -> String {
    substitute(template.effective_class_line(), |token| {
        let value = match token {
            "courseCode" => &entry.course_code,
            "courseName" => &entry.course,
            "instructor" => &entry.instructor,
            "room" => &entry.room,
            "building" => &entry.building,
            "startTime" => &entry.start_time,
            "endTime" => &entry.end_time,
            _ => return None,
        };
        Some(value.clone())
    })
}

/// Single pass over the template: each `{token}` the resolver recognizes is
/// replaced, anything else stays verbatim. Substituted values are never
/// re-scanned, so a value containing braces cannot trigger a second round of
/// substitution.
fn substitute(template: &str, resolve: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let token = &after[..close];
                if !token.contains('{') {
                    if let Some(value) = resolve(token) {
                        out.push_str(&value);
                        rest = &after[close + 1..];
                        continue;
                    }
                }
                // Unknown token, or a nested open brace: keep this brace
                // and rescan from the next character.
                out.push('{');
                rest = after;
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn sample_entries() -> Vec<ClassEntry> {
    vec![
        ClassEntry {
            id: "preview-1".into(),
            course: "Introduction to Computer Science".into(),
            course_code: "CS101".into(),
            instructor: "Dr. Smith".into(),
            room: "101".into(),
            building: "Science Hall".into(),
            start_time: "09:00".into(),
            end_time: "10:30".into(),
            date: None,
            temp_only: false,
        },
        ClassEntry {
            id: "preview-2".into(),
            course: "Calculus II".into(),
            course_code: "MATH201".into(),
            instructor: "Prof. Johnson".into(),
            room: "205".into(),
            building: "Mathematics Building".into(),
            start_time: "11:00".into(),
            end_time: "12:30".into(),
            date: None,
            temp_only: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, start: &str) -> ClassEntry {
        ClassEntry {
            id: format!("id-{code}"),
            course: format!("Course {code}"),
            course_code: code.to_string(),
            instructor: "Dr. Smith".into(),
            room: "101".into(),
            building: "Science Hall".into(),
            start_time: start.to_string(),
            end_time: "23:59".into(),
            date: None,
            temp_only: false,
        }
    }

    fn today() -> NaiveDate {
        // A Wednesday; the next Sunday is 2026-03-08.
        NaiveDate::from_ymd_opt(2026, 3, 4).unwrap()
    }

    #[test]
    fn renders_header_and_time_sorted_lines() {
        let template = FormatTemplate {
            day_header: "{day}".into(),
            class_line: "{courseCode}".into(),
        };
        // Inserted out of time order on purpose.
        let entries = vec![entry("MATH201", "11:00"), entry("CS101", "09:00")];
        let text = apply_format_template(&entries, Weekday::Sunday, &template, today());
        assert_eq!(text, "Sunday\nCS101\nMATH201");
    }

    #[test]
    fn substitutes_every_occurrence() {
        let template = FormatTemplate {
            day_header: "{day} {day}".into(),
            class_line: "{courseCode}/{courseCode}".into(),
        };
        let entries = vec![entry("CS101", "09:00")];
        let text = apply_format_template(&entries, Weekday::Monday, &template, today());
        assert_eq!(text, "Monday Monday\nCS101/CS101");
    }

    #[test]
    fn unknown_placeholders_stay_verbatim() {
        let template = FormatTemplate {
            day_header: "{day} {shrug}".into(),
            class_line: "{courseCode} {unclosed".into(),
        };
        let entries = vec![entry("CS101", "09:00")];
        let text = apply_format_template(&entries, Weekday::Monday, &template, today());
        assert_eq!(text, "Monday {shrug}\nCS101 {unclosed");
    }

    #[test]
    fn header_date_is_the_next_occurrence() {
        let template = FormatTemplate {
            day_header: "{date}".into(),
            class_line: "{courseCode}".into(),
        };
        let entries = vec![entry("CS101", "09:00")];
        let text = apply_format_template(&entries, Weekday::Sunday, &template, today());
        assert_eq!(text, "Sunday, March 8, 2026\nCS101");
    }

    #[test]
    fn default_template_line_shape() {
        let entries = vec![entry("CS101", "09:00")];
        let text = apply_format_template(
            &entries,
            Weekday::Sunday,
            &FormatTemplate::default(),
            today(),
        );
        let line = text.lines().last().unwrap();
        assert_eq!(line, "CS101--(09:00-23:59)--Dr. Smith--(101-Science Hall)");
    }

    #[test]
    fn preview_uses_the_sample_classes() {
        let template = FormatTemplate {
            day_header: "{day}".into(),
            class_line: "{courseCode}".into(),
        };
        assert_eq!(
            render_preview(&template, today()),
            "Sunday\nCS101\nMATH201"
        );
    }
}
