use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;

/// SQLite-backed record store: one table, one row per record. Clones share
/// the underlying connection; all calls are synchronous.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Rc<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: impl AsRef<Path>) -> Result<Self> {
        let db_path = db_path.as_ref();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let conn = Connection::open(db_path).context("failed to open SQLite database")?;
        if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
            error!("Failed to enable WAL mode: {err}");
        }
        init_schema(&conn)?;

        info!("Record store initialized at {}", db_path.display());
        Ok(Self {
            conn: Rc::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().context("failed to open in-memory SQLite database")?;
        init_schema(&conn)?;
        Ok(Self {
            conn: Rc::new(conn),
        })
    }
}

fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS records (
             key   TEXT PRIMARY KEY,
             value TEXT NOT NULL
         )",
        [],
    )
    .context("failed to create records table")?;
    Ok(())
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM records WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("failed to read record '{key}'"))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO records (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .with_context(|| format!("failed to write record '{key}'"))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM records WHERE key = ?1", params![key])
            .with_context(|| format!("failed to delete record '{key}'"))?;
        Ok(())
    }
}
