use anyhow::Result;

use crate::models::FormatTemplate;
use crate::storage::{keys, load_json_or_default, store_json, KeyValueStore};

/// Persisted custom format template.
///
/// Absent or corrupt data falls back to the built-in default; a broken
/// template record is never an error the user has to deal with.
pub struct TemplateStore<S> {
    kv: S,
    current: FormatTemplate,
}

impl<S: KeyValueStore> TemplateStore<S> {
    pub fn load(kv: S) -> Self {
        let current = load_json_or_default(&kv, keys::FORMAT_TEMPLATE);
        Self { kv, current }
    }

    pub fn current(&self) -> &FormatTemplate {
        &self.current
    }

    pub fn save(&mut self, template: FormatTemplate) -> Result<()> {
        self.current = template;
        store_json(&self.kv, keys::FORMAT_TEMPLATE, &self.current)
    }

    /// Back to the built-in default; the stored record is dropped entirely.
    pub fn reset(&mut self) -> Result<()> {
        self.current = FormatTemplate::default();
        self.kv.remove(keys::FORMAT_TEMPLATE)
    }
}
