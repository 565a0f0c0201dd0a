//! SQLite-backed preference store.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Result, StoreResultExt};

use super::PreferenceStore;

const SELECT_VALUE_SQL: &str = "SELECT value FROM preferences WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO preferences (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";

/// Preference store persisted in a single SQLite table.
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the store at the given path and initializes the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).store_context("Failed to open preference store")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initializes the schema using the embedded SQL file.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .store_context("Failed to initialize preference schema")
    }
}

impl PreferenceStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .store_context("Failed to read preference")
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value])
            .store_context("Failed to write preference")?;
        Ok(())
    }

    fn set_many(&mut self, entries: &[(String, String)]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .store_context("Failed to begin transaction")?;

        for (key, value) in entries {
            tx.execute(UPSERT_VALUE_SQL, params![key, value])
                .store_context("Failed to write preference")?;
        }

        tx.commit().store_context("Failed to commit transaction")
    }
}
