//! Selected-zone operations: list, add, remove, reorder, rename, and the
//! world-clock view.

use jiff::{tz::TimeZone, Timestamp};
use log::{info, warn};

use super::Preferences;
use crate::{
    catalog,
    display::{clock::ClockRow, OperationStatus, WorldClock},
    error::Result,
    format,
    locations::{LocationList, MAX_LOCATIONS},
    params::{AddZone, MoveZone, RemoveZone, RenameZone},
    store::keys,
};

impl Preferences {
    /// Reads the current selected-zone list.
    pub fn zones(&self) -> Result<LocationList> {
        self.with_store(|store| LocationList::decode(store))
    }

    /// Appends a zone to the selected list.
    ///
    /// Duplicate identifiers and a full list are rejected without error. An
    /// identifier missing from the tz database is accepted (it renders as
    /// local time) but logged.
    pub fn add_zone(&self, params: &AddZone) -> Result<OperationStatus> {
        let identifier = params.identifier.as_str();
        self.with_store(|store| {
            let mut list = LocationList::decode(store)?;

            if identifier.is_empty() {
                return Ok(OperationStatus::rejected("no identifier given"));
            }
            if list.contains(identifier) {
                return Ok(OperationStatus::rejected(format!(
                    "{identifier} is already selected"
                )));
            }
            if list.is_full() {
                return Ok(OperationStatus::rejected(format!(
                    "the list already holds {MAX_LOCATIONS} zones"
                )));
            }

            if TimeZone::get(identifier).is_err() {
                warn!("'{identifier}' is not in the time-zone database; it will render as local time");
            }

            list.add(identifier);
            store.set_many(&list.encode())?;
            info!("Added zone {identifier}");
            Ok(OperationStatus::applied(format!("Added {identifier}")))
        })
    }

    /// Removes the zone at a 0-indexed list position.
    pub fn remove_zone(&self, params: &RemoveZone) -> Result<OperationStatus> {
        self.with_store(|store| {
            let mut list = LocationList::decode(store)?;
            let Some(entry) = list.entries().get(params.index) else {
                return Ok(OperationStatus::rejected("position is out of range"));
            };
            let identifier = entry.identifier.clone();
            list.remove(params.index);
            store.set_many(&list.encode())?;
            Ok(OperationStatus::applied(format!("Removed {identifier}")))
        })
    }

    /// Moves a zone to a new list position, clamping the destination.
    pub fn move_zone(&self, params: &MoveZone) -> Result<OperationStatus> {
        self.with_store(|store| {
            let mut list = LocationList::decode(store)?;
            if !list.move_entry(params.from, params.to) {
                return Ok(OperationStatus::rejected("nothing to move"));
            }
            let moved = list.entries()[params.to.min(list.len() - 1)]
                .identifier
                .clone();
            store.set_many(&list.encode())?;
            Ok(OperationStatus::applied(format!("Moved {moved}")))
        })
    }

    /// Sets or clears the custom display name of a selected zone.
    pub fn rename_zone(&self, params: &RenameZone) -> Result<OperationStatus> {
        self.with_store(|store| {
            let mut list = LocationList::decode(store)?;
            if !list.rename(&params.identifier, &params.name) {
                return Ok(OperationStatus::rejected(format!(
                    "{} is not selected",
                    params.identifier
                )));
            }
            store.set_many(&list.encode())?;
            let message = if params.name.is_empty() {
                format!("Cleared custom name of {}", params.identifier)
            } else {
                format!("Renamed {} to \"{}\"", params.identifier, params.name)
            };
            Ok(OperationStatus::applied(message))
        })
    }

    /// Computes the world-clock view for an instant: local time first, then
    /// every selected zone under the active date format.
    pub fn world_clock(&self, now: Timestamp) -> Result<WorldClock> {
        self.with_store(|store| {
            let pattern = store.get_or(keys::DATE_FORMAT, keys::DEFAULT_DATE_FORMAT)?;
            let list = LocationList::decode(store)?;

            let rows = list
                .entries()
                .iter()
                .map(|entry| ClockRow {
                    name: entry.display_name(),
                    time: format::format(now, &catalog::resolve(&entry.identifier), &pattern),
                })
                .collect();

            Ok(WorldClock {
                local_time: format::format(now, &TimeZone::system(), &pattern),
                rows,
            })
        })
    }
}
