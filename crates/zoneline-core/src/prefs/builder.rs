//! Builder for creating and configuring Preferences instances.

use std::path::{Path, PathBuf};

use super::Preferences;
use crate::{
    error::{Result, ZonelineError},
    store::{PreferenceStore, SqliteStore},
};

/// Builder for creating and configuring Preferences instances.
///
/// Without configuration the builder opens a SQLite store at the XDG default
/// path. Tests and ephemeral runs inject a store instead.
#[derive(Default)]
pub struct PreferencesBuilder {
    store_path: Option<PathBuf>,
    store: Option<Box<dyn PreferenceStore>>,
}

impl PreferencesBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom store file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/zoneline/zoneline.db` or
    /// `~/.local/share/zoneline/zoneline.db`
    pub fn with_store_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.store_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Injects a preference store directly, bypassing SQLite entirely.
    pub fn with_store<S: PreferenceStore + 'static>(mut self, store: S) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Builds the configured preferences instance.
    ///
    /// # Errors
    ///
    /// Returns `ZonelineError::FileSystem` if the store directory cannot be
    /// created, `ZonelineError::Store` if opening the SQLite store fails.
    pub fn build(self) -> Result<Preferences> {
        if let Some(store) = self.store {
            return Ok(Preferences::new(store));
        }

        let store_path = if let Some(path) = self.store_path {
            path
        } else {
            Self::default_store_path()?
        };

        if let Some(parent) = store_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ZonelineError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let store = SqliteStore::new(&store_path)?;
        Ok(Preferences::new(Box::new(store)))
    }

    /// Returns the default store path following XDG Base Directory
    /// specification.
    fn default_store_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("zoneline")
            .place_data_file("zoneline.db")
            .map_err(|e| ZonelineError::XdgDirectory(e.to_string()))
    }
}
