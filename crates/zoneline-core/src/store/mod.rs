//! Preference persistence.
//!
//! The rest of the crate never talks to a concrete backend: everything goes
//! through the [`PreferenceStore`] trait, a synchronous string key/value
//! surface. [`SqliteStore`] is the real backend; [`MemoryStore`] backs tests
//! and ephemeral runs.
//!
//! Missing keys are not errors. The typed helpers take the default to fall
//! back to, so callers state each field's default at the point of use.

use crate::error::Result;

pub mod keys;
pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Abstract synchronous key/value persistence for preference fields.
pub trait PreferenceStore: Send {
    /// Reads the raw value for a key, `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes the raw value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Writes several keys as one logical transaction.
    ///
    /// The default implementation loops over [`set`](Self::set); backends
    /// with real transactions should override it so multi-field updates
    /// (reorder, rename) land atomically.
    fn set_many(&mut self, entries: &[(String, String)]) -> Result<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }

    /// Reads a string value, falling back to `default` when unset.
    fn get_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self.get(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Reads a boolean value, falling back to `default` when unset or
    /// unparseable.
    fn get_bool(&self, key: &str, default: bool) -> Result<bool> {
        Ok(self
            .get(key)?
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(default))
    }

    /// Writes a boolean value.
    fn set_bool(&mut self, key: &str, value: bool) -> Result<()> {
        self.set(key, if value { "true" } else { "false" })
    }
}
