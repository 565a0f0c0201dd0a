//! End-to-end preference operations against the SQLite store.

mod common;

use common::create_test_prefs;
use zoneline_core::params::{AddZone, MoveZone, RenameZone};

fn identifiers(prefs: &zoneline_core::Preferences) -> Vec<String> {
    prefs
        .zones()
        .expect("Failed to read zones")
        .display_entries()
        .into_iter()
        .map(|(id, _)| id)
        .collect()
}

#[test]
fn selections_round_trip_through_sqlite() {
    let (_temp_dir, prefs) = create_test_prefs();

    for id in ["Asia/Tokyo", "Europe/Paris", "America/New_York"] {
        let status = prefs
            .add_zone(&AddZone {
                identifier: id.to_string(),
            })
            .expect("Failed to add zone");
        assert!(status.applied);
    }
    prefs
        .rename_zone(&RenameZone {
            identifier: "Europe/Paris".to_string(),
            name: "Office".to_string(),
        })
        .expect("Failed to rename zone");

    let zones = prefs.zones().expect("Failed to read zones");
    assert_eq!(
        identifiers(&prefs),
        ["Asia/Tokyo", "Europe/Paris", "America/New_York"]
    );
    assert_eq!(zones.entries()[1].custom_name.as_deref(), Some("Office"));
}

#[test]
fn reorder_persists_in_slot_order() {
    let (_temp_dir, prefs) = create_test_prefs();

    for id in ["Asia/Tokyo", "Europe/Paris", "America/New_York"] {
        prefs
            .add_zone(&AddZone {
                identifier: id.to_string(),
            })
            .expect("Failed to add zone");
    }

    prefs
        .move_zone(&MoveZone { from: 2, to: 0 })
        .expect("Failed to move zone");
    assert_eq!(
        identifiers(&prefs),
        ["America/New_York", "Asia/Tokyo", "Europe/Paris"]
    );

    // a second identical move is not a no-op: it keeps moving the head
    prefs
        .move_zone(&MoveZone { from: 2, to: 0 })
        .expect("Failed to move zone");
    assert_eq!(
        identifiers(&prefs),
        ["Europe/Paris", "America/New_York", "Asia/Tokyo"]
    );
}

#[test]
fn heal_on_a_fresh_store_is_clean() {
    let (_temp_dir, prefs) = create_test_prefs();
    let report = prefs.heal().expect("Failed to heal");
    assert!(report.is_clean());
    assert_eq!(format!("{report}"), "Preferences are consistent.\n");
}
