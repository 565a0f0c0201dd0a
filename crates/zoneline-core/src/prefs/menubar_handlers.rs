//! Menu-bar indicator operations.

use jiff::Timestamp;

use super::Preferences;
use crate::{
    catalog::ZoneOption,
    display::OperationStatus,
    error::Result,
    format::{self, MENU_BAR_FORMATS},
    locations::LocationList,
    menubar::{self, EmojiSelection, MenuBarConfig},
    params::{SetEmoji, SetMenuBarFormat, SetMenuBarZone, SetShortLabel, SetShowTime},
    store::keys,
};

impl Preferences {
    /// Reads the menu-bar configuration with defaults applied.
    pub fn menu_bar_config(&self) -> Result<MenuBarConfig> {
        self.with_store(|store| MenuBarConfig::load(store))
    }

    /// Computes the compact menu-bar label for an instant.
    pub fn menu_bar_label(&self, now: Timestamp) -> Result<String> {
        Ok(self.menu_bar_config()?.label(now))
    }

    /// The zone choices valid for the menu bar: the `local` sentinel
    /// followed by the selected zones under their display names.
    pub fn menu_bar_zone_options(&self) -> Result<Vec<ZoneOption>> {
        self.with_store(|store| {
            let list = LocationList::decode(store)?;
            let mut options = vec![ZoneOption {
                id: keys::LOCAL_ZONE.to_string(),
                label: "Local Time".to_string(),
            }];
            options.extend(list.entries().iter().map(|entry| ZoneOption {
                id: entry.identifier.clone(),
                label: entry.display_name(),
            }));
            Ok(options)
        })
    }

    /// How the persisted emoji relates to the preset catalog.
    pub fn emoji_selection(&self) -> Result<EmojiSelection> {
        self.with_store(|store| {
            let emoji = store.get_or(keys::MENU_BAR_EMOJI, keys::DEFAULT_MENU_BAR_EMOJI)?;
            Ok(menubar::classify_emoji(&emoji))
        })
    }

    /// Switches between icon mode and text mode.
    pub fn set_show_time(&self, params: &SetShowTime) -> Result<OperationStatus> {
        self.with_store(|store| {
            store.set_bool(keys::SHOW_TIME_IN_MENU_BAR, params.show)?;
            Ok(OperationStatus::applied(if params.show {
                "Menu bar shows the time"
            } else {
                "Menu bar shows the icon"
            }))
        })
    }

    /// Sets the icon-mode glyph. Any string is accepted; an empty value
    /// falls back to the default glyph at render time.
    pub fn set_emoji(&self, params: &SetEmoji) -> Result<OperationStatus> {
        self.with_store(|store| {
            store.set(keys::MENU_BAR_EMOJI, &params.emoji)?;
            Ok(OperationStatus::applied(format!(
                "Menu bar icon set to {}",
                if params.emoji.is_empty() {
                    keys::DEFAULT_MENU_BAR_EMOJI
                } else {
                    params.emoji.as_str()
                }
            )))
        })
    }

    /// Sets the text-mode prefix, clamped to five characters.
    pub fn set_short_label(&self, params: &SetShortLabel) -> Result<OperationStatus> {
        let label: String = params
            .label
            .chars()
            .take(keys::SHORT_NAME_MAX_CHARS)
            .collect();
        self.with_store(|store| {
            store.set(keys::MENU_BAR_SHORT_NAME, &label)?;
            let message = if label.is_empty() {
                "Cleared the menu bar short label".to_string()
            } else if label.chars().count() < params.label.chars().count() {
                format!("Menu bar short label set to \"{label}\" (truncated)")
            } else {
                format!("Menu bar short label set to \"{label}\"")
            };
            Ok(OperationStatus::applied(message))
        })
    }

    /// Chooses which zone the menu bar shows. Only `local` and currently
    /// selected identifiers are valid.
    pub fn set_menu_bar_zone(&self, params: &SetMenuBarZone) -> Result<OperationStatus> {
        self.with_store(|store| {
            if params.zone_id != keys::LOCAL_ZONE {
                let list = LocationList::decode(store)?;
                if !list.contains(&params.zone_id) {
                    return Ok(OperationStatus::rejected(format!(
                        "{} is not among the selected zones",
                        params.zone_id
                    )));
                }
            }
            store.set(keys::MENU_BAR_TIME_ZONE_ID, &params.zone_id)?;
            Ok(OperationStatus::applied(format!(
                "Menu bar zone set to {}",
                params.zone_id
            )))
        })
    }

    /// Selects a menu-bar format pattern. Patterns outside the preset
    /// catalog are rejected without error.
    pub fn set_menu_bar_format(&self, params: &SetMenuBarFormat) -> Result<OperationStatus> {
        if !format::catalog_contains(&MENU_BAR_FORMATS, &params.pattern) {
            return Ok(OperationStatus::rejected(format!(
                "`{}` is not in the menu bar format catalog",
                params.pattern
            )));
        }
        self.with_store(|store| {
            store.set(keys::MENU_BAR_FORMAT, &params.pattern)?;
            Ok(OperationStatus::applied(format!(
                "Menu bar format set to `{}`",
                params.pattern
            )))
        })
    }
}
