use std::path::Path;

use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;

/// Fixed storage keys; each holds one JSON array that is rewritten wholesale
/// on every mutation of the collection it backs.
pub const INGREDIENTS_KEY: &str = "ingredients";
pub const DISHES_KEY: &str = "dishes";
pub const SERVICE_RECORDS_KEY: &str = "serviceRecords";

/// Key-value persistence backed by a single SQLite table. Collections are
/// stored as JSON arrays under fixed string keys, loaded once at startup and
/// overwritten on every mutation.
pub struct KvStorage {
    pub(crate) conn: Connection,
}

impl KvStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        Ok(KvStorage { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        Ok(KvStorage { conn })
    }

    pub fn initialize(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    /// Load a collection. A missing key yields an empty collection; a
    /// malformed or structurally incompatible value is logged and likewise
    /// treated as empty so startup never fails on bad data.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let raw: String = match self.conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            [key],
            |row| row.get(0),
        ) {
            Ok(raw) => raw,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Vec::new(),
            Err(e) => {
                log::warn!("failed to read '{key}' from storage: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("discarding malformed '{key}' data: {e}");
                Vec::new()
            }
        }
    }

    /// Replace the stored value for `key` with the serialized collection.
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let value = serde_json::to_string(items)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }
}
