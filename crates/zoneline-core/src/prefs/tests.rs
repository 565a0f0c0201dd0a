//! Tests for the preference API against an in-memory store.

use jiff::Timestamp;

use super::*;
use crate::{
    menubar::EmojiSelection,
    params::{
        AddZone, MoveZone, RemoveZone, RenameZone, SetDateFormat, SetMenuBarFormat,
        SetMenuBarZone, SetShortLabel, SetShowTime,
    },
    store::{keys, MemoryStore, PreferenceStore},
};

fn create_test_prefs() -> Preferences {
    PreferencesBuilder::new()
        .with_store(MemoryStore::new())
        .build()
        .expect("in-memory build cannot fail")
}

fn prefs_with_store(store: MemoryStore) -> Preferences {
    PreferencesBuilder::new()
        .with_store(store)
        .build()
        .expect("in-memory build cannot fail")
}

fn add(prefs: &Preferences, identifier: &str) {
    let status = prefs
        .add_zone(&AddZone {
            identifier: identifier.to_string(),
        })
        .expect("add failed");
    assert!(status.applied, "expected {identifier} to be added");
}

// 2024-07-01T12:00:00Z
fn midsummer_noon() -> Timestamp {
    Timestamp::from_second(1_719_835_200).expect("valid timestamp")
}

#[test]
fn sixth_add_is_rejected() {
    let prefs = create_test_prefs();
    for id in [
        "Asia/Tokyo",
        "Europe/Paris",
        "America/New_York",
        "Australia/Sydney",
        "Africa/Cairo",
    ] {
        add(&prefs, id);
    }

    let status = prefs
        .add_zone(&AddZone {
            identifier: "America/Santiago".to_string(),
        })
        .unwrap();
    assert!(!status.applied);

    let zones = prefs.zones().unwrap();
    assert_eq!(zones.len(), 5);
    assert!(!zones.contains("America/Santiago"));
}

#[test]
fn duplicate_add_is_rejected() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");

    let status = prefs
        .add_zone(&AddZone {
            identifier: "Asia/Tokyo".to_string(),
        })
        .unwrap();
    assert!(!status.applied);
    assert_eq!(prefs.zones().unwrap().len(), 1);
}

#[test]
fn remove_and_move_preserve_order() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");
    add(&prefs, "Europe/Paris");
    add(&prefs, "America/New_York");

    prefs.remove_zone(&RemoveZone { index: 1 }).unwrap();
    let ids: Vec<String> = prefs
        .zones()
        .unwrap()
        .display_entries()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, ["Asia/Tokyo", "America/New_York"]);

    prefs.move_zone(&MoveZone { from: 1, to: 0 }).unwrap();
    let ids: Vec<String> = prefs
        .zones()
        .unwrap()
        .display_entries()
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    assert_eq!(ids, ["America/New_York", "Asia/Tokyo"]);
}

#[test]
fn out_of_bounds_indices_are_rejected() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");

    assert!(!prefs.remove_zone(&RemoveZone { index: 7 }).unwrap().applied);
    assert!(!prefs
        .move_zone(&MoveZone { from: 4, to: 0 })
        .unwrap()
        .applied);
    assert_eq!(prefs.zones().unwrap().len(), 1);
}

#[test]
fn rename_of_unselected_zone_changes_nothing() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");
    let before = prefs.zones().unwrap();

    let status = prefs
        .rename_zone(&RenameZone {
            identifier: "Europe/Paris".to_string(),
            name: "Nope".to_string(),
        })
        .unwrap();
    assert!(!status.applied);
    assert_eq!(prefs.zones().unwrap(), before);
}

#[test]
fn rename_round_trips_through_the_store() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");

    prefs
        .rename_zone(&RenameZone {
            identifier: "Asia/Tokyo".to_string(),
            name: "HQ".to_string(),
        })
        .unwrap();

    let entries = prefs.zones().unwrap().display_entries();
    assert_eq!(entries[0].1, "HQ");
}

#[test]
fn world_clock_uses_custom_names_and_active_pattern() {
    let prefs = create_test_prefs();
    add(&prefs, "America/New_York");
    prefs
        .rename_zone(&RenameZone {
            identifier: "America/New_York".to_string(),
            name: "East".to_string(),
        })
        .unwrap();
    prefs
        .set_date_format(&SetDateFormat {
            pattern: "EEE HH:mm".to_string(),
        })
        .unwrap();

    let clock = prefs.world_clock(midsummer_noon()).unwrap();
    assert_eq!(clock.rows.len(), 1);
    assert_eq!(clock.rows[0].name, "East");
    // New York is UTC-4 in July
    assert_eq!(clock.rows[0].time, "Mon 08:00");
}

#[test]
fn stale_date_format_is_rejected_by_setter() {
    let prefs = create_test_prefs();
    let status = prefs
        .set_date_format(&SetDateFormat {
            pattern: "ss.SSS".to_string(),
        })
        .unwrap();
    assert!(!status.applied);
    assert_eq!(prefs.date_format().unwrap(), keys::DEFAULT_DATE_FORMAT);
}

#[test]
fn heal_resets_stale_patterns_and_zone() {
    let mut store = MemoryStore::new();
    store.set(keys::DATE_FORMAT, "qqq broken").unwrap();
    store.set(keys::MENU_BAR_FORMAT, "ss").unwrap();
    store.set(keys::MENU_BAR_TIME_ZONE_ID, "Mars/Olympus_Mons").unwrap();
    let prefs = prefs_with_store(store);

    let report = prefs.heal().unwrap();
    assert_eq!(report.date_format_reset.as_deref(), Some("qqq broken"));
    assert_eq!(report.menu_bar_format_reset.as_deref(), Some("ss"));
    assert_eq!(
        report.menu_bar_zone_reset.as_deref(),
        Some("Mars/Olympus_Mons")
    );

    assert_eq!(prefs.date_format().unwrap(), "MMM dd EEE hh:mm a");
    let config = prefs.menu_bar_config().unwrap();
    assert_eq!(config.format, "HH:mm");
    assert_eq!(config.target_zone_id, "local");
}

#[test]
fn heal_keeps_valid_menu_bar_zone() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");
    prefs
        .set_menu_bar_zone(&SetMenuBarZone {
            zone_id: "Asia/Tokyo".to_string(),
        })
        .unwrap();

    let report = prefs.heal().unwrap();
    assert!(report.is_clean());
    assert_eq!(
        prefs.menu_bar_config().unwrap().target_zone_id,
        "Asia/Tokyo"
    );
}

#[test]
fn heal_is_idempotent() {
    let mut store = MemoryStore::new();
    store.set(keys::DATE_FORMAT, "stale").unwrap();
    let prefs = prefs_with_store(store);

    assert!(!prefs.heal().unwrap().is_clean());
    assert!(prefs.heal().unwrap().is_clean());
}

#[test]
fn menu_bar_zone_must_be_local_or_selected() {
    let prefs = create_test_prefs();

    let status = prefs
        .set_menu_bar_zone(&SetMenuBarZone {
            zone_id: "Asia/Tokyo".to_string(),
        })
        .unwrap();
    assert!(!status.applied);

    add(&prefs, "Asia/Tokyo");
    assert!(prefs
        .set_menu_bar_zone(&SetMenuBarZone {
            zone_id: "Asia/Tokyo".to_string(),
        })
        .unwrap()
        .applied);
    assert!(prefs
        .set_menu_bar_zone(&SetMenuBarZone {
            zone_id: "local".to_string(),
        })
        .unwrap()
        .applied);
}

#[test]
fn menu_bar_zone_options_start_with_local() {
    let prefs = create_test_prefs();
    add(&prefs, "Asia/Tokyo");
    prefs
        .rename_zone(&RenameZone {
            identifier: "Asia/Tokyo".to_string(),
            name: "HQ".to_string(),
        })
        .unwrap();

    let options = prefs.menu_bar_zone_options().unwrap();
    assert_eq!(options[0].id, "local");
    assert_eq!(options[0].label, "Local Time");
    assert_eq!(options[1].id, "Asia/Tokyo");
    assert_eq!(options[1].label, "HQ");
}

#[test]
fn short_label_is_clamped_to_five_characters() {
    let prefs = create_test_prefs();
    prefs
        .set_short_label(&SetShortLabel {
            label: "Singapore".to_string(),
        })
        .unwrap();
    assert_eq!(prefs.menu_bar_config().unwrap().short_label, "Singa");
}

#[test]
fn menu_bar_label_reflects_mode_and_prefix() {
    let prefs = create_test_prefs();
    add(&prefs, "America/New_York");
    prefs
        .set_menu_bar_zone(&SetMenuBarZone {
            zone_id: "America/New_York".to_string(),
        })
        .unwrap();
    prefs
        .set_menu_bar_format(&SetMenuBarFormat {
            pattern: "HH:mm".to_string(),
        })
        .unwrap();

    // icon mode by default
    assert_eq!(prefs.menu_bar_label(midsummer_noon()).unwrap(), "🌖");

    prefs.set_show_time(&SetShowTime { show: true }).unwrap();
    assert_eq!(prefs.menu_bar_label(midsummer_noon()).unwrap(), "08:00");

    prefs
        .set_short_label(&SetShortLabel {
            label: "NYC".to_string(),
        })
        .unwrap();
    assert_eq!(prefs.menu_bar_label(midsummer_noon()).unwrap(), "NYC 08:00");
}

#[test]
fn emoji_selection_tracks_the_preset_catalog() {
    let prefs = create_test_prefs();
    assert_eq!(
        prefs.emoji_selection().unwrap(),
        EmojiSelection::Preset("🌖".to_string())
    );

    prefs
        .set_emoji(&crate::params::SetEmoji {
            emoji: "🦀".to_string(),
        })
        .unwrap();
    assert_eq!(
        prefs.emoji_selection().unwrap(),
        EmojiSelection::Custom("🦀".to_string())
    );

    // healing never rewrites a custom emoji
    assert!(prefs.heal().unwrap().is_clean());
    assert_eq!(prefs.menu_bar_config().unwrap().icon_emoji, "🦀");
}
