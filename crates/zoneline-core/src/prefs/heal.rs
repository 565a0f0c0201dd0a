//! Self-healing of stale persisted values on load.
//!
//! Mirrors what the preferences surface does when it appears: a persisted
//! format pattern that is no longer in its catalog resets to the catalog's
//! first entry, and a menu-bar target zone that is neither `local` nor a
//! selected identifier resets to `local`. Note that this couples read and
//! write semantics: healing mutates the store as a side effect of loading.
//! The persisted emoji is deliberately left alone; an off-catalog value just
//! reads as a custom glyph.

use std::fmt;

use log::info;

use super::Preferences;
use crate::{
    error::Result,
    format::{catalog_contains, MENU_BAR_FORMATS, POPOVER_FORMATS},
    locations::LocationList,
    store::keys,
};

/// What a healing pass reset. Stale values are reported with the value they
/// held before the reset.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HealReport {
    /// Stale world-clock pattern that was reset to the catalog head
    pub date_format_reset: Option<String>,
    /// Stale menu-bar pattern that was reset to the catalog head
    pub menu_bar_format_reset: Option<String>,
    /// Invalid menu-bar target zone that was reset to `local`
    pub menu_bar_zone_reset: Option<String>,
}

impl HealReport {
    /// Whether the pass found nothing to fix.
    pub fn is_clean(&self) -> bool {
        self.date_format_reset.is_none()
            && self.menu_bar_format_reset.is_none()
            && self.menu_bar_zone_reset.is_none()
    }
}

impl fmt::Display for HealReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return writeln!(f, "Preferences are consistent.");
        }
        if let Some(old) = &self.date_format_reset {
            writeln!(f, "Reset stale date format `{old}`")?;
        }
        if let Some(old) = &self.menu_bar_format_reset {
            writeln!(f, "Reset stale menu bar format `{old}`")?;
        }
        if let Some(old) = &self.menu_bar_zone_reset {
            writeln!(f, "Reset menu bar zone `{old}` to local")?;
        }
        Ok(())
    }
}

impl Preferences {
    /// Validates the persisted fields and resets anything stale, returning
    /// what was changed. Safe to call repeatedly; a second pass over a
    /// healed store reports nothing.
    pub fn heal(&self) -> Result<HealReport> {
        self.with_store(|store| {
            let mut report = HealReport::default();

            let pattern = store.get_or(keys::DATE_FORMAT, keys::DEFAULT_DATE_FORMAT)?;
            if !catalog_contains(&POPOVER_FORMATS, &pattern) {
                store.set(keys::DATE_FORMAT, POPOVER_FORMATS[0].pattern)?;
                info!("Healed stale date format '{pattern}'");
                report.date_format_reset = Some(pattern);
            }

            let pattern = store.get_or(keys::MENU_BAR_FORMAT, keys::DEFAULT_MENU_BAR_FORMAT)?;
            if !catalog_contains(&MENU_BAR_FORMATS, &pattern) {
                store.set(keys::MENU_BAR_FORMAT, MENU_BAR_FORMATS[0].pattern)?;
                info!("Healed stale menu bar format '{pattern}'");
                report.menu_bar_format_reset = Some(pattern);
            }

            let zone_id = store.get_or(keys::MENU_BAR_TIME_ZONE_ID, keys::LOCAL_ZONE)?;
            if zone_id != keys::LOCAL_ZONE {
                let list = LocationList::decode(store)?;
                if !list.contains(&zone_id) {
                    store.set(keys::MENU_BAR_TIME_ZONE_ID, keys::LOCAL_ZONE)?;
                    info!("Healed menu bar zone '{zone_id}'");
                    report.menu_bar_zone_reset = Some(zone_id);
                }
            }

            Ok(report)
        })
    }
}
