//! The world-clock view: local time plus each selected zone.

use std::fmt;

use serde::Serialize;

/// One rendered row of the world clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockRow {
    /// Display name of the zone (custom name or derived city name)
    pub name: String,
    /// The instant formatted under the active pattern in that zone
    pub time: String,
}

/// The fully rendered world-clock view for one instant.
///
/// Built by [`Preferences::world_clock`](crate::Preferences::world_clock);
/// this type only carries strings, so rendering it is pure formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldClock {
    /// Local time formatted under the active pattern
    pub local_time: String,
    /// Selected zones in list order
    pub rows: Vec<ClockRow>,
}

impl fmt::Display for WorldClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Local Time")?;
        writeln!(f)?;
        writeln!(f, "{}", self.local_time)?;
        for row in &self.rows {
            writeln!(f)?;
            writeln!(f, "## {}", row.name)?;
            writeln!(f)?;
            writeln!(f, "{}", row.time)?;
        }
        Ok(())
    }
}
