use serde::{Deserialize, Serialize};

/// Which free-text option list an operation targets. Courses are handled
/// separately because they carry a name/code pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Instructors,
    Rooms,
    Buildings,
}

/// A selectable course: display name plus the short code used as its key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOption {
    pub name: String,
    pub code: String,
}

/// Built-in option values the user has removed from the dropdowns. Courses
/// are tracked by code, the other lists by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemovedDefaults {
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub instructors: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub buildings: Vec<String>,
}

impl RemovedDefaults {
    pub fn list(&self, kind: ListKind) -> &Vec<String> {
        match kind {
            ListKind::Instructors => &self.instructors,
            ListKind::Rooms => &self.rooms,
            ListKind::Buildings => &self.buildings,
        }
    }

    pub(crate) fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Instructors => &mut self.instructors,
            ListKind::Rooms => &mut self.rooms,
            ListKind::Buildings => &mut self.buildings,
        }
    }
}

/// The persisted `customOptions` record. Every field defaults so records
/// written by older versions (before removed-defaults existed) still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomOptions {
    #[serde(default)]
    pub courses: Vec<CourseOption>,
    #[serde(default)]
    pub instructors: Vec<String>,
    #[serde(default)]
    pub rooms: Vec<String>,
    #[serde(default)]
    pub buildings: Vec<String>,
    #[serde(default)]
    pub removed_defaults: RemovedDefaults,
}

impl CustomOptions {
    pub fn list(&self, kind: ListKind) -> &Vec<String> {
        match kind {
            ListKind::Instructors => &self.instructors,
            ListKind::Rooms => &self.rooms,
            ListKind::Buildings => &self.buildings,
        }
    }

    pub(crate) fn list_mut(&mut self, kind: ListKind) -> &mut Vec<String> {
        match kind {
            ListKind::Instructors => &mut self.instructors,
            ListKind::Rooms => &mut self.rooms,
            ListKind::Buildings => &mut self.buildings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_without_removed_defaults_still_loads() {
        let json = r#"{
            "courses": [{"name": "Calculus II", "code": "MATH201"}],
            "instructors": ["Prof. Johnson"],
            "rooms": [],
            "buildings": []
        }"#;
        let options: CustomOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.courses.len(), 1);
        assert!(options.removed_defaults.courses.is_empty());
    }

    #[test]
    fn removed_defaults_tolerates_missing_sublists() {
        let json = r#"{"removedDefaults": {"rooms": ["417"]}}"#;
        let options: CustomOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.removed_defaults.rooms, vec!["417".to_string()]);
        assert!(options.removed_defaults.instructors.is_empty());
    }
}
