use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Canonical weekday names, Sunday-first to match the tab order and the
/// days-from-Sunday indexing used by the date arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Weekday::ALL.into_iter().find(|day| day.as_str() == value)
    }

    /// Position in the Sunday-first week, 0..=6.
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        Weekday::ALL[date.weekday().num_days_from_sunday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scheduled class occurrence.
///
/// `date: None` means the entry recurs every occurrence of its weekday;
/// a concrete date marks a one-off. `temp_only` selects which of the two
/// persisted collections the entry lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEntry {
    pub id: String,
    pub course: String,
    pub course_code: String,
    pub instructor: String,
    pub room: String,
    pub building: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(
        default,
        deserialize_with = "de_opt_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub temp_only: bool,
}

impl ClassEntry {
    pub fn is_recurring(&self) -> bool {
        self.date.is_none()
    }
}

// Older records store a dateless entry as `"date": ""` rather than omitting
// the field; both read back as None.
fn de_opt_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Raw form payload as the presentation layer collects it. The `date` field
/// stays a plain string here; validation turns it into a typed date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub course: String,
    pub course_code: String,
    pub instructor: String,
    pub room: String,
    pub building: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub temp_only: bool,
}

impl EntryDraft {
    /// Field values of an existing entry, for populating the edit form.
    pub fn from_entry(entry: &ClassEntry) -> Self {
        Self {
            course: entry.course.clone(),
            course_code: entry.course_code.clone(),
            instructor: entry.instructor.clone(),
            room: entry.room.clone(),
            building: entry.building.clone(),
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
            date: entry
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            temp_only: entry.temp_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_of_date() {
        // 2026-03-01 is a Sunday.
        let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(Weekday::of(date), Weekday::Sunday);
        assert_eq!(Weekday::of(date.succ_opt().unwrap()), Weekday::Monday);
    }

    #[test]
    fn weekday_parses_canonical_names_only() {
        assert_eq!(Weekday::parse("Wednesday"), Some(Weekday::Wednesday));
        assert_eq!(Weekday::parse("wednesday"), None);
    }

    #[test]
    fn entry_roundtrips_through_json() {
        let entry = ClassEntry {
            id: "e1".into(),
            course: "Tensor Analysis".into(),
            course_code: "AMAT2104".into(),
            instructor: "Prof. Abu Bakr PK sir".into(),
            room: "103".into(),
            building: "4th Science".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1),
            temp_only: true,
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"courseCode\":\"AMAT2104\""));
        assert!(json.contains("\"tempOnly\":true"));
        let back: ClassEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn empty_string_date_reads_as_recurring() {
        let json = r#"{
            "id": "1700000000000",
            "course": "Tensor Analysis",
            "courseCode": "AMAT2104",
            "instructor": "Prof. Abu Bakr PK sir",
            "room": "103",
            "building": "4th Science",
            "startTime": "09:00",
            "endTime": "10:00",
            "date": "",
            "tempOnly": false
        }"#;
        let entry: ClassEntry = serde_json::from_str(json).unwrap();
        assert!(entry.is_recurring());
        assert!(!entry.temp_only);
    }

    #[test]
    fn draft_from_entry_keeps_the_date_string() {
        let entry = ClassEntry {
            id: "e1".into(),
            course: "c".into(),
            course_code: "cc".into(),
            instructor: "i".into(),
            room: "r".into(),
            building: "b".into(),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            date: NaiveDate::from_ymd_opt(2026, 3, 1),
            temp_only: false,
        };
        let draft = EntryDraft::from_entry(&entry);
        assert_eq!(draft.date, "2026-03-01");

        let dateless = ClassEntry { date: None, ..entry };
        assert_eq!(EntryDraft::from_entry(&dateless).date, "");
    }
}
