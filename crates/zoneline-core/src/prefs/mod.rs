//! High-level preference API.
//!
//! [`Preferences`] is the single owner of the preference store and the entry
//! point for everything the presentation layer does: reading the world
//! clock, mutating the selected-zone list, configuring the menu-bar
//! indicator, and the self-healing pass on load.
//!
//! All state is derived: every accessor re-reads the store, computes the
//! requested view, and returns plain data. Mutations decode the persisted
//! slots into an ordered list, transform it, and write the result back as
//! one batched update. The store sits behind a mutex so concurrent callers
//! on multithreaded hosts cannot interleave the multi-field writes.
//!
//! # Usage
//!
//! ```rust
//! use zoneline_core::{params::AddZone, store::MemoryStore, PreferencesBuilder};
//!
//! # fn example() -> zoneline_core::Result<()> {
//! let prefs = PreferencesBuilder::new()
//!     .with_store(MemoryStore::new())
//!     .build()?;
//!
//! prefs.add_zone(&AddZone { identifier: "Asia/Tokyo".to_string() })?;
//! assert_eq!(prefs.zones()?.len(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Mutex;

use crate::{error::Result, store::PreferenceStore};

pub mod builder;
pub mod format_handlers;
pub mod heal;
pub mod menubar_handlers;
pub mod zone_handlers;

#[cfg(test)]
mod tests;

pub use builder::PreferencesBuilder;
pub use heal::HealReport;

/// Owner of the preference store and home of all preference operations.
pub struct Preferences {
    store: Mutex<Box<dyn PreferenceStore>>,
}

impl Preferences {
    pub(crate) fn new(store: Box<dyn PreferenceStore>) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    /// Runs an operation with exclusive access to the store.
    pub(crate) fn with_store<R>(
        &self,
        op: impl FnOnce(&mut dyn PreferenceStore) -> Result<R>,
    ) -> Result<R> {
        let mut guard = self.store.lock().unwrap_or_else(|e| e.into_inner());
        op(guard.as_mut())
    }
}
