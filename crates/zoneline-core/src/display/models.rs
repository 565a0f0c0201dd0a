//! Display implementations for domain models.

use std::fmt;

use crate::menubar::MenuBarConfig;

impl fmt::Display for MenuBarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Menu Bar")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Mode: {}",
            if self.show_time_in_menu_bar { "time" } else { "icon" }
        )?;
        writeln!(f, "- Icon: {}", self.icon_emoji)?;
        if self.short_label.is_empty() {
            writeln!(f, "- Short label: (none)")?;
        } else {
            writeln!(f, "- Short label: {}", self.short_label)?;
        }
        writeln!(f, "- Zone: {}", self.target_zone_id)?;
        writeln!(f, "- Format: `{}`", self.format)
    }
}
