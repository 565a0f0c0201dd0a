//! Collection wrapper types for picker and list output.

use std::fmt;

use crate::{
    catalog::ZoneOption,
    format::{self, FormatPreset},
    locations::LocationList,
};

/// Newtype wrapper for displaying the zone catalog (or the menu-bar zone
/// choices, which share the shape).
pub struct ZoneOptions(pub Vec<ZoneOption>);

impl ZoneOptions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ZoneOption> {
        self.0.iter()
    }
}

impl fmt::Display for ZoneOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No time zones found.")
        } else {
            for option in &self.0 {
                writeln!(f, "- {} `{}`", option.label, option.id)?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the selected list with positions, custom
/// names, and identifiers — the rows the preferences UI shows.
pub struct SelectedZones(pub LocationList);

impl fmt::Display for SelectedZones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No time zones selected.")
        } else {
            for (index, entry) in self.0.entries().iter().enumerate() {
                writeln!(
                    f,
                    "{}. **{}** `{}`",
                    index + 1,
                    entry.display_name(),
                    entry.identifier
                )?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a format preset catalog, each pattern with
/// its preview sample evaluated at "now" in the local zone.
pub struct FormatPresets(pub &'static [FormatPreset]);

impl fmt::Display for FormatPresets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for preset in self.0 {
            writeln!(
                f,
                "- `{}` — {}",
                preset.pattern,
                format::sample_label(preset.pattern)
            )?;
        }
        Ok(())
    }
}
