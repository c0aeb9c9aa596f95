use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use log::{info, warn};

use crate::models::{ClassEntry, Weekday};
use crate::storage::{keys, store_json, KeyValueStore};

type WeekMap = BTreeMap<Weekday, Vec<ClassEntry>>;

/// The two persisted schedule collections and their CRUD.
///
/// `defaults` holds the recurring weekly entries, `temps` the date-bound
/// one-offs. An id is unique across both collections for a weekday, and an
/// entry lives in exactly one collection at a time; changing its temporary
/// status relocates it, never duplicates it.
pub struct ScheduleStore<S> {
    kv: S,
    defaults: WeekMap,
    temps: WeekMap,
}

impl<S: KeyValueStore> ScheduleStore<S> {
    /// Load both collections. A missing defaults record seeds an empty week
    /// and persists it; a corrupt record starts over empty (logged).
    pub fn load(kv: S) -> Self {
        let (defaults, defaults_missing) = load_week(&kv, keys::DEFAULT_SCHEDULES);
        let (temps, _) = load_week(&kv, keys::TEMP_SCHEDULES);
        let store = Self {
            kv,
            defaults,
            temps,
        };
        if defaults_missing {
            if let Err(err) = store.persist_defaults() {
                warn!("failed to seed the recurring schedule record: {err}");
            }
        }
        store
    }

    pub fn defaults(&self, day: Weekday) -> &[ClassEntry] {
        day_slice(&self.defaults, day)
    }

    pub fn temps(&self, day: Weekday) -> &[ClassEntry] {
        day_slice(&self.temps, day)
    }

    /// Recurring entries followed by temporary ones, each collection in
    /// insertion order. Display order (time-sorted) is the renderer's
    /// concern, not the merge's.
    pub fn merged(&self, day: Weekday) -> Vec<ClassEntry> {
        let mut all = day_slice(&self.defaults, day).to_vec();
        all.extend(day_slice(&self.temps, day).iter().cloned());
        all
    }

    /// Merged entries, stably sorted by start time for display and export.
    pub fn sorted(&self, day: Weekday) -> Vec<ClassEntry> {
        let mut all = self.merged(day);
        all.sort_by(|a, b| a.start_time.cmp(&b.start_time));
        all
    }

    /// Whether `id` lives in the temporary collection for `day`.
    pub fn is_temp(&self, day: Weekday, id: &str) -> bool {
        day_slice(&self.temps, day).iter().any(|entry| entry.id == id)
    }

    pub fn find(&self, day: Weekday, id: &str) -> Option<&ClassEntry> {
        day_slice(&self.defaults, day)
            .iter()
            .chain(day_slice(&self.temps, day).iter())
            .find(|entry| entry.id == id)
    }

    /// Append an entry to the collection its `temp_only` flag selects and
    /// persist that collection. The id must be new for this weekday.
    pub fn add_entry(&mut self, day: Weekday, entry: ClassEntry) -> Result<()> {
        assert!(
            self.find(day, &entry.id).is_none(),
            "duplicate entry id {} on {day}",
            entry.id
        );
        info!(
            "Adding {} entry {} on {day}",
            if entry.temp_only { "temporary" } else { "recurring" },
            entry.id
        );
        if entry.temp_only {
            self.temps.entry(day).or_default().push(entry);
            self.persist_temps()
        } else {
            self.defaults.entry(day).or_default().push(entry);
            self.persist_defaults()
        }
    }

    /// Replace the entry carrying `updated.id`, relocating it between
    /// collections when its temporary status changed. Every collection that
    /// was touched is persisted.
    pub fn update_entry(&mut self, day: Weekday, updated: ClassEntry) -> Result<()> {
        if self.find(day, &updated.id).is_none() {
            return Err(anyhow!("no entry with id {} on {day}", updated.id));
        }
        let was_temp = self.is_temp(day, &updated.id);
        let moving = was_temp != updated.temp_only;
        let id = updated.id.clone();

        if moving {
            let source = if was_temp {
                self.temps.entry(day).or_default()
            } else {
                self.defaults.entry(day).or_default()
            };
            if let Some(pos) = source.iter().position(|entry| entry.id == id) {
                source.remove(pos);
            }
            let destination = if updated.temp_only {
                self.temps.entry(day).or_default()
            } else {
                self.defaults.entry(day).or_default()
            };
            info!(
                "Relocating entry {id} on {day} to the {} collection",
                if updated.temp_only { "temporary" } else { "recurring" }
            );
            destination.push(updated);
            self.persist_temps()?;
            self.persist_defaults()
        } else {
            let list = if was_temp {
                self.temps.entry(day).or_default()
            } else {
                self.defaults.entry(day).or_default()
            };
            if let Some(slot) = list.iter_mut().find(|entry| entry.id == id) {
                *slot = updated;
            }
            if was_temp {
                self.persist_temps()
            } else {
                self.persist_defaults()
            }
        }
    }

    /// Remove `id` from the named collection; returns whether it was found.
    pub fn remove_entry(&mut self, day: Weekday, id: &str, is_temp: bool) -> Result<bool> {
        let list = if is_temp {
            self.temps.entry(day).or_default()
        } else {
            self.defaults.entry(day).or_default()
        };
        let Some(pos) = list.iter().position(|entry| entry.id == id) else {
            return Ok(false);
        };
        list.remove(pos);
        info!("Removed entry {id} from {day}");
        if is_temp {
            self.persist_temps()?;
        } else {
            self.persist_defaults()?;
        }
        Ok(true)
    }

    /// Drop every temporary entry across the week; recurring entries stay.
    pub fn reset_temporary(&mut self) -> Result<()> {
        for list in self.temps.values_mut() {
            list.clear();
        }
        info!("Cleared temporary schedules for the whole week");
        self.persist_temps()
    }

    fn persist_defaults(&self) -> Result<()> {
        store_json(&self.kv, keys::DEFAULT_SCHEDULES, &self.defaults)
    }

    fn persist_temps(&self) -> Result<()> {
        store_json(&self.kv, keys::TEMP_SCHEDULES, &self.temps)
    }
}

fn day_slice(map: &WeekMap, day: Weekday) -> &[ClassEntry] {
    map.get(&day).map(Vec::as_slice).unwrap_or(&[])
}

// Returns the parsed week plus whether the record was absent. Stored records
// may predate some weekday keys; all seven end up present either way.
fn load_week<S: KeyValueStore>(kv: &S, key: &str) -> (WeekMap, bool) {
    let (mut week, missing): (WeekMap, bool) = match kv.get(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(week) => (week, false),
            Err(err) => {
                warn!("record '{key}' is corrupt, starting from an empty week: {err}");
                (WeekMap::new(), false)
            }
        },
        Ok(None) => (WeekMap::new(), true),
        Err(err) => {
            warn!("failed to read record '{key}': {err}");
            (WeekMap::new(), false)
        }
    };
    for day in Weekday::ALL {
        week.entry(day).or_default();
    }
    (week, missing)
}
