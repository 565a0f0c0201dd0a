//! Time-zone catalog: enumeration, labels, and identifier resolution.
//!
//! Labels follow the `"City (UTC +8)"` shape: the identifier's last path
//! segment with underscores replaced by spaces, then the UTC offset at the
//! given instant. If the IANA database cannot be found the catalog is empty
//! rather than an error.

use jiff::{tz::TimeZone, Timestamp};
use log::debug;
use serde::{Deserialize, Serialize};

/// One selectable zone in a picker: identifier plus human-readable label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOption {
    /// Canonical time-zone identifier, e.g. `America/Los_Angeles`
    pub id: String,
    /// Picker label, e.g. `Los Angeles (UTC -8)`
    pub label: String,
}

/// Enumerates every known time-zone identifier with its offset label at the
/// given instant, sorted ascending by label (case-insensitive).
pub fn list_all_zones(at: Timestamp) -> Vec<ZoneOption> {
    let mut options: Vec<ZoneOption> = jiff::tz::db()
        .available()
        .filter_map(|name| {
            let id = name.to_string();
            let tz = TimeZone::get(&id).ok()?;
            let label = format!("{} ({})", display_name(&id), utc_offset_label(&tz, at));
            Some(ZoneOption { id, label })
        })
        .collect();

    options.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    options
}

/// Derives the default display name for an identifier:
/// `America/Los_Angeles` -> `Los Angeles`.
pub fn display_name(identifier: &str) -> String {
    identifier
        .rsplit('/')
        .next()
        .unwrap_or(identifier)
        .replace('_', " ")
}

/// Formats a zone's UTC offset at an instant, e.g. `UTC +5.5`.
///
/// Whole hours render with no decimals, half hours with one, anything else
/// (e.g. Kathmandu's +5:45) with two. The sign is `+` for offsets >= 0.
pub fn utc_offset_label(tz: &TimeZone, at: Timestamp) -> String {
    let hours = f64::from(tz.to_offset(at).seconds()) / 3600.0;
    let sign = if hours >= 0.0 { "+" } else { "-" };
    let abs = hours.abs();

    let text = if abs.fract() == 0.0 {
        format!("{abs:.0}")
    } else if (abs * 2.0).fract() == 0.0 {
        format!("{abs:.1}")
    } else {
        format!("{abs:.2}")
    };

    format!("UTC {sign}{text}")
}

/// Resolves an identifier to a time zone, silently falling back to the
/// system zone when the identifier is unknown.
pub fn resolve(identifier: &str) -> TimeZone {
    TimeZone::get(identifier).unwrap_or_else(|err| {
        debug!("Unknown time zone '{identifier}', using system zone: {err}");
        TimeZone::system()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-07-01T12:00:00Z
    fn midsummer() -> Timestamp {
        Timestamp::from_second(1_719_835_200).expect("valid timestamp")
    }

    fn zone(id: &str) -> TimeZone {
        TimeZone::get(id).expect("zone present in tzdb")
    }

    #[test]
    fn display_name_strips_region_and_underscores() {
        assert_eq!(display_name("America/Los_Angeles"), "Los Angeles");
        assert_eq!(display_name("Asia/Tokyo"), "Tokyo");
        assert_eq!(display_name("America/Argentina/Buenos_Aires"), "Buenos Aires");
        assert_eq!(display_name("UTC"), "UTC");
    }

    #[test]
    fn whole_hour_offsets_have_no_decimals() {
        assert_eq!(utc_offset_label(&zone("UTC"), midsummer()), "UTC +0");
        assert_eq!(utc_offset_label(&zone("Asia/Tokyo"), midsummer()), "UTC +9");
        // New York observes DST in July
        assert_eq!(
            utc_offset_label(&zone("America/New_York"), midsummer()),
            "UTC -4"
        );
    }

    #[test]
    fn half_hour_offsets_have_one_decimal() {
        assert_eq!(
            utc_offset_label(&zone("Asia/Kolkata"), midsummer()),
            "UTC +5.5"
        );
    }

    #[test]
    fn quarter_hour_offsets_have_two_decimals() {
        assert_eq!(
            utc_offset_label(&zone("Asia/Kathmandu"), midsummer()),
            "UTC +5.75"
        );
    }

    #[test]
    fn catalog_is_sorted_case_insensitively() {
        let options = list_all_zones(midsummer());
        assert!(!options.is_empty());
        assert!(options.iter().any(|o| o.id == "Asia/Tokyo"));

        let labels: Vec<String> = options.iter().map(|o| o.label.to_lowercase()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn resolve_falls_back_to_system_zone() {
        let fallback = resolve("Atlantis/Sunken_City");
        assert_eq!(fallback, TimeZone::system());
        assert_eq!(resolve("Asia/Tokyo"), zone("Asia/Tokyo"));
    }
}
