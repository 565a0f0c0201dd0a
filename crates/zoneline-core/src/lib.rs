//! Core library for the Zoneline world-clock utility.
//!
//! This crate holds the whole preference model: the bounded, ordered,
//! deduplicated list of selected time zones, the format preset catalogs and
//! pattern renderer, the menu-bar indicator logic, and the self-healing
//! validation applied on load. Persistence is an injected key/value store;
//! the presentation layer (the `zl` binary) only calls the accessors here
//! and renders the returned markdown.
//!
//! # Quick Start
//!
//! ```rust
//! use zoneline_core::{params::AddZone, store::MemoryStore, PreferencesBuilder};
//!
//! # fn example() -> zoneline_core::Result<()> {
//! // Back the preferences with an in-memory store
//! let prefs = PreferencesBuilder::new()
//!     .with_store(MemoryStore::new())
//!     .build()?;
//!
//! // Select a zone and read the derived view
//! prefs.add_zone(&AddZone { identifier: "Asia/Tokyo".to_string() })?;
//! let clock = prefs.world_clock(jiff::Timestamp::now())?;
//! assert_eq!(clock.rows.len(), 1);
//! assert_eq!(clock.rows[0].name, "Tokyo");
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod display;
pub mod error;
pub mod format;
pub mod locations;
pub mod menubar;
pub mod params;
pub mod prefs;
pub mod store;

// Re-export commonly used types
pub use catalog::ZoneOption;
pub use display::{OperationStatus, WorldClock};
pub use error::{Result, ZonelineError};
pub use format::{FormatPreset, MENU_BAR_FORMATS, POPOVER_FORMATS};
pub use locations::{LocationList, TimeZoneSelection, MAX_LOCATIONS};
pub use menubar::{EmojiSelection, MenuBarConfig, EMOJI_PRESETS};
pub use prefs::{HealReport, Preferences, PreferencesBuilder};
pub use store::{MemoryStore, PreferenceStore, SqliteStore};
