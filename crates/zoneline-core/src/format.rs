//! Date/time pattern rendering and the format preset catalogs.
//!
//! Patterns use the conventional symbolic tokens (`MMM dd EEE hh:mm a`,
//! `HH:mm`, ...). A token is a run of the same letter; recognized runs are
//! substituted, anything else (separators included) passes through verbatim.
//!
//! Recognized tokens: `yyyy` `yy` `MMM` `MM` `M` `dd` `d` `EEE` `HH` `H`
//! `hh` `h` `mm` `m` `a`.

use jiff::{tz::TimeZone, Timestamp, Zoned};
use serde::Serialize;

/// A (label, pattern) pair offered in a format picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatPreset {
    pub label: &'static str,
    pub pattern: &'static str,
}

/// Presets offered for the main world-clock view. The first entry is the
/// fallback when a persisted pattern goes stale.
pub const POPOVER_FORMATS: [FormatPreset; 16] = [
    FormatPreset { label: "MON DD DAY hh:MM AM/PM", pattern: "MMM dd EEE hh:mm a" },
    FormatPreset { label: "MON DD DAY HH:MM (24 hr)", pattern: "MMM dd EEE HH:mm" },
    FormatPreset { label: "MON DD hh:MM AM/PM", pattern: "MMM dd hh:mm a" },
    FormatPreset { label: "MON DD HH:MM (24 hr)", pattern: "MMM dd HH:mm" },
    FormatPreset { label: "MON DD YYYY DAY HH:MM (24 hr)", pattern: "MMM dd yyyy EEE HH:mm" },
    FormatPreset { label: "MM/DD/YY hh:MM AM/PM", pattern: "MM/dd/yy hh:mm a" },
    FormatPreset { label: "MM/DD hh:MM AM/PM", pattern: "MM/dd hh:mm a" },
    FormatPreset { label: "MM/DD HH:MM (24 hr)", pattern: "MM/dd HH:mm" },
    FormatPreset { label: "MM/DD DAY hh:MM AM/PM", pattern: "MM/dd EEE hh:mm a" },
    FormatPreset { label: "MM/DD DAY HH:MM (24 hr)", pattern: "MM/dd EEE HH:mm" },
    FormatPreset { label: "DD/MM DAY hh:MM AM/PM", pattern: "dd/MM EEE hh:mm a" },
    FormatPreset { label: "DD/MM DAY HH:MM (24 hr)", pattern: "dd/MM EEE HH:mm" },
    FormatPreset { label: "DD DAY hh:MM AM/PM", pattern: "dd EEE hh:mm a" },
    FormatPreset { label: "DD DAY HH:MM (24 hr)", pattern: "dd EEE HH:mm" },
    FormatPreset { label: "DAY hh:MM AM/PM", pattern: "EEE hh:mm a" },
    FormatPreset { label: "DAY HH:MM (24 hr)", pattern: "EEE HH:mm" },
];

/// Presets offered for the menu-bar indicator (smaller set, no seconds).
pub const MENU_BAR_FORMATS: [FormatPreset; 6] = [
    FormatPreset { label: "HH:MM (24 hr)", pattern: "HH:mm" },
    FormatPreset { label: "hh:MM AM/PM", pattern: "hh:mm a" },
    FormatPreset { label: "DAY HH:MM (24 hr)", pattern: "EEE HH:mm" },
    FormatPreset { label: "DAY hh:MM AM/PM", pattern: "EEE hh:mm a" },
    FormatPreset { label: "MON DD HH:MM (24 hr)", pattern: "MMM dd HH:mm" },
    FormatPreset { label: "MON DD hh:MM AM/PM", pattern: "MMM dd hh:mm a" },
];

/// Returns whether a pattern is part of the given preset catalog.
pub fn catalog_contains(catalog: &[FormatPreset], pattern: &str) -> bool {
    catalog.iter().any(|preset| preset.pattern == pattern)
}

/// Formats an instant, interpreted in the given time zone, under a pattern.
pub fn format(instant: Timestamp, tz: &TimeZone, pattern: &str) -> String {
    render(&instant.to_zoned(tz.clone()), pattern)
}

/// Formats "now" in the system zone under a pattern. Used for the preview
/// text next to each preset in format pickers.
pub fn sample_label(pattern: &str) -> String {
    render(&Zoned::now(), pattern)
}

const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn weekday_abbrev(zdt: &Zoned) -> &'static str {
    use jiff::civil::Weekday::*;
    match zdt.weekday() {
        Monday => "Mon",
        Tuesday => "Tue",
        Wednesday => "Wed",
        Thursday => "Thu",
        Friday => "Fri",
        Saturday => "Sat",
        Sunday => "Sun",
    }
}

fn render(zdt: &Zoned, pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if !c.is_ascii_alphabetic() {
            out.push(c);
            continue;
        }

        let mut run = 1;
        while chars.peek() == Some(&c) {
            chars.next();
            run += 1;
        }

        match render_token(zdt, c, run) {
            Some(text) => out.push_str(&text),
            // unrecognized runs pass through literally
            None => out.extend(std::iter::repeat(c).take(run)),
        }
    }

    out
}

fn render_token(zdt: &Zoned, c: char, run: usize) -> Option<String> {
    let token = match (c, run) {
        ('y', 4) => format!("{:04}", zdt.year()),
        ('y', 2) => format!("{:02}", zdt.year().rem_euclid(100)),
        ('M', 3) => MONTH_ABBREVS[(zdt.month() - 1) as usize].to_string(),
        ('M', 2) => format!("{:02}", zdt.month()),
        ('M', 1) => zdt.month().to_string(),
        ('d', 2) => format!("{:02}", zdt.day()),
        ('d', 1) => zdt.day().to_string(),
        ('E', 3) => weekday_abbrev(zdt).to_string(),
        ('H', 2) => format!("{:02}", zdt.hour()),
        ('H', 1) => zdt.hour().to_string(),
        ('h', 2) => format!("{:02}", hour_12(zdt)),
        ('h', 1) => hour_12(zdt).to_string(),
        ('m', 2) => format!("{:02}", zdt.minute()),
        ('m', 1) => zdt.minute().to_string(),
        ('a', 1) => (if zdt.hour() < 12 { "AM" } else { "PM" }).to_string(),
        _ => return None,
    };
    Some(token)
}

fn hour_12(zdt: &Zoned) -> i8 {
    (zdt.hour() + 11) % 12 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-07-01T12:00:00Z, a Monday
    fn midsummer_noon() -> Timestamp {
        Timestamp::from_second(1_719_835_200).expect("valid timestamp")
    }

    fn utc() -> TimeZone {
        TimeZone::UTC
    }

    #[test]
    fn renders_default_popover_pattern() {
        let text = format(midsummer_noon(), &utc(), "MMM dd EEE hh:mm a");
        assert_eq!(text, "Jul 01 Mon 12:00 PM");
    }

    #[test]
    fn renders_numeric_patterns() {
        assert_eq!(
            format(midsummer_noon(), &utc(), "MM/dd/yy hh:mm a"),
            "07/01/24 12:00 PM"
        );
        assert_eq!(format(midsummer_noon(), &utc(), "HH:mm"), "12:00");
        assert_eq!(
            format(midsummer_noon(), &utc(), "MMM dd yyyy EEE HH:mm"),
            "Jul 01 2024 Mon 12:00"
        );
    }

    #[test]
    fn respects_time_zone() {
        let new_york = TimeZone::get("America/New_York").expect("tzdb entry");
        assert_eq!(format(midsummer_noon(), &new_york, "HH:mm"), "08:00");
        assert_eq!(
            format(midsummer_noon(), &new_york, "EEE hh:mm a"),
            "Mon 08:00 AM"
        );
    }

    #[test]
    fn midnight_is_twelve_am() {
        // 2024-07-01T00:00:00Z
        let midnight = Timestamp::from_second(1_719_792_000).expect("valid timestamp");
        assert_eq!(format(midnight, &utc(), "hh:mm a"), "12:00 AM");
        assert_eq!(format(midnight, &utc(), "HH:mm"), "00:00");
    }

    #[test]
    fn afternoon_wraps_to_twelve_hour_clock() {
        // 2024-07-01T13:05:00Z
        let ts = Timestamp::from_second(1_719_839_100).expect("valid timestamp");
        assert_eq!(format(ts, &utc(), "h:mm a"), "1:05 PM");
    }

    #[test]
    fn unrecognized_tokens_pass_through() {
        assert_eq!(format(midsummer_noon(), &utc(), "HH:mm zzz"), "12:00 zzz");
        assert_eq!(format(midsummer_noon(), &utc(), "Q"), "Q");
    }

    #[test]
    fn literal_separators_survive() {
        assert_eq!(format(midsummer_noon(), &utc(), "dd-MM/yyyy HH:mm"), "01-07/2024 12:00");
    }

    #[test]
    fn sample_label_keeps_pure_literals() {
        assert_eq!(sample_label("::  --"), "::  --");
    }

    #[test]
    fn catalogs_contain_their_own_patterns() {
        for preset in &POPOVER_FORMATS {
            assert!(catalog_contains(&POPOVER_FORMATS, preset.pattern));
        }
        for preset in &MENU_BAR_FORMATS {
            assert!(catalog_contains(&MENU_BAR_FORMATS, preset.pattern));
        }
        assert!(!catalog_contains(&MENU_BAR_FORMATS, "not a pattern"));
    }

    #[test]
    fn every_preset_pattern_renders_without_seconds() {
        for preset in POPOVER_FORMATS.iter().chain(MENU_BAR_FORMATS.iter()) {
            let text = format(midsummer_noon(), &utc(), preset.pattern);
            assert!(!text.is_empty());
            assert!(!text.contains("ss"));
        }
    }
}
