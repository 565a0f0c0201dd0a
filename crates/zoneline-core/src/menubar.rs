//! Menu-bar indicator configuration and label computation.
//!
//! The indicator has two modes. Icon mode shows the configured emoji (or the
//! default glyph). Text mode formats "now" in the configured target zone and
//! prepends the trimmed short label when one is set. The target zone is
//! either the `local` sentinel or an identifier from the selected list;
//! anything unresolvable falls back to the system zone.

use jiff::{tz::TimeZone, Timestamp};
use serde::Serialize;

use crate::{
    catalog,
    error::Result,
    format,
    store::{keys, PreferenceStore},
};

/// Emoji glyphs offered by the icon picker. Anything else is "bring your
/// own".
pub const EMOJI_PRESETS: [&str; 8] = ["🚀", "🌐", "🏢", "🏠", "🗽", "♨️", "🌓", "🌖"];

/// Persisted menu-bar settings, loaded with the documented defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuBarConfig {
    /// Text mode when true, icon mode when false
    pub show_time_in_menu_bar: bool,
    /// Glyph shown in icon mode
    pub icon_emoji: String,
    /// Optional prefix for text mode, at most five characters
    pub short_label: String,
    /// `local` or an identifier from the selected list
    pub target_zone_id: String,
    /// Pattern from the menu-bar preset catalog
    pub format: String,
}

impl MenuBarConfig {
    /// Reads the menu-bar fields from the store, applying defaults for
    /// anything unset.
    pub fn load(store: &dyn PreferenceStore) -> Result<Self> {
        Ok(Self {
            show_time_in_menu_bar: store.get_bool(keys::SHOW_TIME_IN_MENU_BAR, false)?,
            icon_emoji: store.get_or(keys::MENU_BAR_EMOJI, keys::DEFAULT_MENU_BAR_EMOJI)?,
            short_label: store.get_or(keys::MENU_BAR_SHORT_NAME, "")?,
            target_zone_id: store.get_or(keys::MENU_BAR_TIME_ZONE_ID, keys::LOCAL_ZONE)?,
            format: store.get_or(keys::MENU_BAR_FORMAT, keys::DEFAULT_MENU_BAR_FORMAT)?,
        })
    }

    /// Computes the compact indicator label for the given instant.
    pub fn label(&self, now: Timestamp) -> String {
        if !self.show_time_in_menu_bar {
            return if self.icon_emoji.is_empty() {
                keys::DEFAULT_MENU_BAR_EMOJI.to_string()
            } else {
                self.icon_emoji.clone()
            };
        }

        let time = format::format(now, &self.target_zone(), &self.format);
        let prefix = self.short_label.trim();
        if prefix.is_empty() {
            time
        } else {
            format!("{prefix} {time}")
        }
    }

    /// Resolves the configured target to a time zone, falling back to the
    /// system zone for the `local` sentinel and for unknown identifiers.
    pub fn target_zone(&self) -> TimeZone {
        if self.target_zone_id == keys::LOCAL_ZONE || self.target_zone_id.is_empty() {
            TimeZone::system()
        } else {
            catalog::resolve(&self.target_zone_id)
        }
    }
}

/// How the persisted emoji relates to the preset catalog. A value outside
/// the catalog reads as a custom glyph without being rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum EmojiSelection {
    Preset(String),
    Custom(String),
}

/// Classifies an emoji value against [`EMOJI_PRESETS`].
pub fn classify_emoji(emoji: &str) -> EmojiSelection {
    if EMOJI_PRESETS.contains(&emoji) {
        EmojiSelection::Preset(emoji.to_string())
    } else {
        EmojiSelection::Custom(emoji.to_string())
    }
}
