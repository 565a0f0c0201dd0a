use tempfile::TempDir;
use zoneline_core::{Preferences, PreferencesBuilder};

/// Helper function to create preferences backed by a temporary SQLite store
pub fn create_test_prefs() -> (TempDir, Preferences) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store_path = temp_dir.path().join("test.db");
    let prefs = PreferencesBuilder::new()
        .with_store_path(Some(&store_path))
        .build()
        .expect("Failed to create preferences");
    (temp_dir, prefs)
}
