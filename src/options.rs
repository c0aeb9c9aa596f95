//! Custom option lists backing the class-form dropdowns.
//!
//! The effective choices for each list are the built-ins from [`config`]
//! minus anything the user removed, followed by the user's own additions.
//! Removing a built-in only hides it (recorded in `removedDefaults`), so it
//! can be restored later; removing a custom value deletes it.

use anyhow::Result;

use crate::config;
use crate::models::{CourseOption, CustomOptions, ListKind};
use crate::storage::{keys, load_json_or_default, store_json, KeyValueStore};

pub struct OptionsStore<S> {
    kv: S,
    options: CustomOptions,
}

impl<S: KeyValueStore> OptionsStore<S> {
    pub fn load(kv: S) -> Self {
        let options = load_json_or_default(&kv, keys::CUSTOM_OPTIONS);
        Self { kv, options }
    }

    pub fn options(&self) -> &CustomOptions {
        &self.options
    }

    /// Effective course list: visible built-ins, then customs, deduplicated
    /// by code. The first occurrence keeps its position, the last one wins
    /// the value, so a custom course can shadow a built-in code.
    pub fn course_choices(&self) -> Vec<CourseOption> {
        let removed = &self.options.removed_defaults.courses;
        let defaults = config::DEFAULT_COURSES
            .iter()
            .map(|(name, code)| CourseOption {
                name: (*name).to_string(),
                code: (*code).to_string(),
            })
            .filter(|course| !removed.contains(&course.code));

        let mut choices: Vec<CourseOption> = Vec::new();
        for course in defaults.chain(self.options.courses.iter().cloned()) {
            match choices.iter_mut().find(|c| c.code == course.code) {
                Some(existing) => *existing = course,
                None => choices.push(course),
            }
        }
        choices
    }

    /// Effective values for one of the plain lists, deduplicated, built-ins
    /// first.
    pub fn item_choices(&self, kind: ListKind) -> Vec<String> {
        let removed = self.options.removed_defaults.list(kind);
        let defaults = config::default_items(kind)
            .iter()
            .map(|item| (*item).to_string())
            .filter(|item| !removed.contains(item));

        let mut choices: Vec<String> = Vec::new();
        for item in defaults.chain(self.options.list(kind).iter().cloned()) {
            if !choices.contains(&item) {
                choices.push(item);
            }
        }
        choices
    }

    /// Add a custom course. Returns false (and stores nothing) for blank
    /// input or a code that is already a custom entry. Re-adding a hidden
    /// built-in code un-hides it.
    pub fn add_course(&mut self, name: &str, code: &str) -> Result<bool> {
        let name = name.trim();
        let code = code.trim();
        if name.is_empty() || code.is_empty() {
            return Ok(false);
        }
        if self.options.courses.iter().any(|c| c.code == code) {
            return Ok(false);
        }
        self.options.courses.push(CourseOption {
            name: name.to_string(),
            code: code.to_string(),
        });
        self.options.removed_defaults.courses.retain(|c| c != code);
        self.persist()?;
        Ok(true)
    }

    /// Remove a course from the effective list: customs are deleted,
    /// built-ins are hidden.
    pub fn remove_course(&mut self, code: &str) -> Result<()> {
        if let Some(pos) = self.options.courses.iter().position(|c| c.code == code) {
            self.options.courses.remove(pos);
        } else if !self
            .options
            .removed_defaults
            .courses
            .iter()
            .any(|c| c == code)
        {
            self.options
                .removed_defaults
                .courses
                .push(code.to_string());
        }
        self.persist()
    }

    pub fn restore_default_course(&mut self, code: &str) -> Result<()> {
        self.options.removed_defaults.courses.retain(|c| c != code);
        self.persist()
    }

    /// Rename a custom course in place, keyed by its old code. Returns false
    /// when the input is blank or no custom course carries `old_code`.
    pub fn update_course(&mut self, old_code: &str, name: &str, code: &str) -> Result<bool> {
        let name = name.trim();
        let code = code.trim();
        if name.is_empty() || code.is_empty() {
            return Ok(false);
        }
        let Some(course) = self
            .options
            .courses
            .iter_mut()
            .find(|c| c.code == old_code)
        else {
            return Ok(false);
        };
        course.name = name.to_string();
        course.code = code.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Add a custom value to one of the plain lists; same duplicate and
    /// un-hide rules as [`add_course`](Self::add_course).
    pub fn add_item(&mut self, kind: ListKind, value: &str) -> Result<bool> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        if self.options.list(kind).iter().any(|item| item == value) {
            return Ok(false);
        }
        self.options.list_mut(kind).push(value.to_string());
        self.options
            .removed_defaults
            .list_mut(kind)
            .retain(|item| item != value);
        self.persist()?;
        Ok(true)
    }

    pub fn remove_item(&mut self, kind: ListKind, value: &str) -> Result<()> {
        let list = self.options.list_mut(kind);
        if let Some(pos) = list.iter().position(|item| item == value) {
            list.remove(pos);
        } else {
            let removed = self.options.removed_defaults.list_mut(kind);
            if !removed.iter().any(|item| item == value) {
                removed.push(value.to_string());
            }
        }
        self.persist()
    }

    pub fn restore_default_item(&mut self, kind: ListKind, value: &str) -> Result<()> {
        self.options
            .removed_defaults
            .list_mut(kind)
            .retain(|item| item != value);
        self.persist()
    }

    /// Rename a custom value in place. Returns false when the input is blank
    /// or `old` is not a custom value.
    pub fn update_item(&mut self, kind: ListKind, old: &str, new: &str) -> Result<bool> {
        let new = new.trim();
        if new.is_empty() {
            return Ok(false);
        }
        let list = self.options.list_mut(kind);
        let Some(slot) = list.iter_mut().find(|item| *item == old) else {
            return Ok(false);
        };
        *slot = new.to_string();
        self.persist()?;
        Ok(true)
    }

    /// Whether a course code comes from the user rather than the built-ins.
    pub fn is_custom_course(&self, code: &str) -> bool {
        self.options.courses.iter().any(|c| c.code == code)
    }

    pub fn is_custom_item(&self, kind: ListKind, value: &str) -> bool {
        self.options.list(kind).iter().any(|item| item == value)
    }

    fn persist(&self) -> Result<()> {
        store_json(&self.kv, keys::CUSTOM_OPTIONS, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn store() -> OptionsStore<MemoryStore> {
        OptionsStore::load(MemoryStore::new())
    }

    #[test]
    fn choices_start_with_the_built_ins() {
        let store = store();
        let codes: Vec<String> = store
            .course_choices()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["AMAT2101", "AMAT2104"]);
        assert_eq!(
            store.item_choices(ListKind::Rooms),
            vec!["417".to_string(), "103".to_string()]
        );
    }

    #[test]
    fn added_courses_follow_the_built_ins() {
        let mut store = store();
        assert!(store.add_course("Calculus II", "MATH201").unwrap());
        // Duplicate code is a no-op.
        assert!(!store.add_course("Calculus II again", "MATH201").unwrap());
        let codes: Vec<String> = store
            .course_choices()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["AMAT2101", "AMAT2104", "MATH201"]);
    }

    #[test]
    fn removing_a_built_in_hides_it_until_restored() {
        let mut store = store();
        store.remove_course("AMAT2101").unwrap();
        assert!(!store
            .course_choices()
            .iter()
            .any(|c| c.code == "AMAT2101"));
        assert!(!store.is_custom_course("AMAT2101"));

        store.restore_default_course("AMAT2101").unwrap();
        assert!(store
            .course_choices()
            .iter()
            .any(|c| c.code == "AMAT2101"));
    }

    #[test]
    fn re_adding_a_hidden_built_in_unhides_it() {
        let mut store = store();
        store.remove_item(ListKind::Rooms, "417").unwrap();
        assert!(!store
            .item_choices(ListKind::Rooms)
            .contains(&"417".to_string()));
        assert!(store.add_item(ListKind::Rooms, "417").unwrap());
        let rooms = store.item_choices(ListKind::Rooms);
        // Visible again, and not duplicated.
        assert_eq!(rooms.iter().filter(|r| *r == "417").count(), 1);
    }

    #[test]
    fn removing_a_custom_value_deletes_it() {
        let mut store = store();
        store.add_item(ListKind::Buildings, "Annex").unwrap();
        store.remove_item(ListKind::Buildings, "Annex").unwrap();
        assert!(!store
            .item_choices(ListKind::Buildings)
            .contains(&"Annex".to_string()));
        // Deleted outright, not marked as a removed default.
        assert!(!store
            .options()
            .removed_defaults
            .buildings
            .contains(&"Annex".to_string()));
    }

    #[test]
    fn update_only_touches_custom_values() {
        let mut store = store();
        store.add_course("Calculus II", "MATH201").unwrap();
        assert!(store
            .update_course("MATH201", "Calculus III", "MATH301")
            .unwrap());
        assert!(store.is_custom_course("MATH301"));
        // Built-ins cannot be renamed.
        assert!(!store
            .update_course("AMAT2101", "Renamed", "X100")
            .unwrap());
    }

    #[test]
    fn mutations_survive_a_reload() {
        let kv = MemoryStore::new();
        let mut store = OptionsStore::load(kv.clone());
        store.add_item(ListKind::Instructors, "Dr. Smith").unwrap();
        store.remove_course("AMAT2104").unwrap();

        let reloaded = OptionsStore::load(kv);
        assert!(reloaded
            .item_choices(ListKind::Instructors)
            .contains(&"Dr. Smith".to_string()));
        assert!(!reloaded
            .course_choices()
            .iter()
            .any(|c| c.code == "AMAT2104"));
    }
}
