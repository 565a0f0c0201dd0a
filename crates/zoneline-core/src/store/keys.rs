//! Persisted field names and their defaults.
//!
//! The key set is the legacy flat model: five location slots (identifier +
//! custom name each) plus the scalar display settings. Slot keys are
//! 1-indexed.

/// Number of location slots in the persisted model.
pub const LOCATION_SLOTS: usize = 5;

pub const DATE_FORMAT: &str = "dateFormat";
pub const SHOW_TIME_IN_MENU_BAR: &str = "showTimeInMenuBar";
pub const MENU_BAR_SHORT_NAME: &str = "menuBarShortName";
pub const MENU_BAR_TIME_ZONE_ID: &str = "menuBarTimeZoneId";
pub const MENU_BAR_FORMAT: &str = "menuBarFormat";
pub const MENU_BAR_EMOJI: &str = "menuBarEmoji";

pub const DEFAULT_DATE_FORMAT: &str = "MMM dd EEE hh:mm a";
pub const DEFAULT_MENU_BAR_FORMAT: &str = "HH:mm";
pub const DEFAULT_MENU_BAR_EMOJI: &str = "🌖";

/// Sentinel zone id meaning "use the system's current time zone".
pub const LOCAL_ZONE: &str = "local";

/// Maximum length of the menu-bar short label, in characters.
pub const SHORT_NAME_MAX_CHARS: usize = 5;

/// Key of the identifier field for a slot (1-indexed).
pub fn location_key(slot: usize) -> String {
    format!("location{slot}")
}

/// Key of the custom-name field for a slot (1-indexed).
pub fn location_name_key(slot: usize) -> String {
    format!("location{slot}Name")
}
