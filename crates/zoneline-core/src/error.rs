//! Error types for the preference engine.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all preference-engine operations.
///
/// Only persistence and environment failures surface as errors. Domain-level
/// oddities (an unknown time-zone identifier, a stale format pattern, an
/// out-of-bounds index) are handled with silent fallbacks and never reach
/// this type.
#[derive(Error, Debug)]
pub enum ZonelineError {
    /// Preference store read/write errors
    #[error("Preference store error: {message}")]
    Store {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Extension trait for store-related Results.
pub trait StoreResultExt<T> {
    /// Map SQLite errors into a store error with a message.
    fn store_context(self, message: &str) -> Result<T>;
}

impl<T> StoreResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn store_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ZonelineError::Store {
            message: message.to_string(),
            source: e,
        })
    }
}

/// Result type alias for preference-engine operations
pub type Result<T> = std::result::Result<T, ZonelineError>;
