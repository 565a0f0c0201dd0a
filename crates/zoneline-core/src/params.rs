//! Parameter structures for preference operations.
//!
//! These are the interface-agnostic halves of the parameter wrapper pattern:
//! the CLI defines clap-derived argument structs and converts them into
//! these types, so core signatures never depend on a UI framework.

use serde::{Deserialize, Serialize};

/// Parameters for appending a zone to the selected list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddZone {
    /// Canonical time-zone identifier to add
    pub identifier: String,
}

/// Parameters for removing a zone by list position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoveZone {
    /// 0-indexed position in the selected list
    pub index: usize,
}

/// Parameters for reordering the selected list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoveZone {
    /// 0-indexed position to move from
    pub from: usize,
    /// 0-indexed position to move to (clamped into bounds)
    pub to: usize,
}

/// Parameters for renaming a selected zone.
///
/// An empty name clears the custom name, reverting the display name to the
/// one derived from the identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenameZone {
    /// Identifier of the selected zone to rename
    pub identifier: String,
    /// New custom display name; empty to clear
    pub name: String,
}

/// Parameters for selecting the world-clock format pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetDateFormat {
    /// Pattern from the popover preset catalog
    pub pattern: String,
}

/// Parameters for selecting the menu-bar format pattern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetMenuBarFormat {
    /// Pattern from the menu-bar preset catalog
    pub pattern: String,
}

/// Parameters for switching between icon and text mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetShowTime {
    /// Text mode when true, icon mode when false
    pub show: bool,
}

/// Parameters for setting the icon-mode emoji.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetEmoji {
    /// Glyph to show in icon mode
    pub emoji: String,
}

/// Parameters for setting the text-mode prefix label.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetShortLabel {
    /// Prefix label; clamped to five characters on write
    pub label: String,
}

/// Parameters for choosing which zone the menu bar shows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetMenuBarZone {
    /// `local` or an identifier from the selected list
    pub zone_id: String,
}
