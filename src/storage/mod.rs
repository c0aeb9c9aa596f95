//! Key-value persistence seam.
//!
//! The core treats persistence as a synchronous external collaborator:
//! `get`/`set`/`remove` over string records, each holding one JSON document.
//! Calls are atomic and non-suspending from the core's point of view.

use anyhow::Result;
use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Keys of the persisted records.
pub mod keys {
    pub const DEFAULT_SCHEDULES: &str = "defaultSchedules";
    pub const TEMP_SCHEDULES: &str = "tempSchedules";
    pub const CUSTOM_OPTIONS: &str = "customOptions";
    pub const FORMAT_TEMPLATE: &str = "customFormatTemplate";
    pub const ACTIVE_DAY: &str = "activeDay";
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// Load and decode a JSON record, falling back to `T::default()` when the
/// record is absent, unreadable, or corrupt. Corrupt data is logged and
/// abandoned: a schedule with unreadable state starts over empty rather
/// than refusing to start.
pub(crate) fn load_json_or_default<T, S>(kv: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            warn!("failed to read record '{key}': {err}");
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(err) => {
            warn!("record '{key}' is corrupt, starting from defaults: {err}");
            T::default()
        }
    }
}

pub(crate) fn store_json<T, S>(kv: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    kv.set(key, &raw)
}
