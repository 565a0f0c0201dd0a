//! The ordered list of selected time zones.
//!
//! Persistence uses five fixed slots (`location1`..`location5` plus a
//! `locationNName` each), a legacy of the flat key/value model. All list
//! logic runs on [`LocationList`], a proper ordered sequence: decode the
//! slots, transform the list, encode back. Slot identity carries no meaning,
//! only list order does.
//!
//! Invariants: at most [`MAX_LOCATIONS`] entries, no duplicate identifiers.
//! Every mutator is a silent no-op when its precondition fails and reports
//! via its return value whether anything changed.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    catalog,
    error::Result,
    store::{keys, PreferenceStore},
};

/// Maximum number of selected time zones.
pub const MAX_LOCATIONS: usize = keys::LOCATION_SLOTS;

/// One selected time zone with an optional user-supplied display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeZoneSelection {
    /// Canonical time-zone identifier, e.g. `America/Los_Angeles`
    pub identifier: String,
    /// User-supplied display name; `None` means "unset"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_name: Option<String>,
}

impl TimeZoneSelection {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            custom_name: None,
        }
    }

    /// The name shown for this zone: the custom name if set, else the
    /// identifier's last path segment with underscores replaced by spaces.
    pub fn display_name(&self) -> String {
        match self.custom_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => catalog::display_name(&self.identifier),
        }
    }
}

/// An ordered, deduplicated, capacity-bounded list of selected zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationList {
    entries: Vec<TimeZoneSelection>,
}

impl LocationList {
    /// Decodes the persisted slots into the logical list: non-empty
    /// identifiers in slot order, first occurrence wins on duplicates.
    pub fn decode(store: &dyn PreferenceStore) -> Result<Self> {
        let mut entries: Vec<TimeZoneSelection> = Vec::with_capacity(keys::LOCATION_SLOTS);

        for slot in 1..=keys::LOCATION_SLOTS {
            let identifier = store.get_or(&keys::location_key(slot), "")?;
            if identifier.is_empty() {
                continue;
            }
            if entries.iter().any(|e| e.identifier == identifier) {
                debug!("Dropping duplicate slot {slot} ({identifier})");
                continue;
            }
            let name = store.get_or(&keys::location_name_key(slot), "")?;
            entries.push(TimeZoneSelection {
                identifier,
                custom_name: if name.is_empty() { None } else { Some(name) },
            });
        }

        Ok(Self { entries })
    }

    /// Encodes the list back into all ten slot fields, blanking unused
    /// slots. The result is meant for [`PreferenceStore::set_many`] so the
    /// whole update lands as one logical transaction.
    pub fn encode(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(keys::LOCATION_SLOTS * 2);
        for slot in 1..=keys::LOCATION_SLOTS {
            let entry = self.entries.get(slot - 1);
            fields.push((
                keys::location_key(slot),
                entry.map(|e| e.identifier.clone()).unwrap_or_default(),
            ));
            fields.push((
                keys::location_name_key(slot),
                entry
                    .and_then(|e| e.custom_name.clone())
                    .unwrap_or_default(),
            ));
        }
        fields
    }

    /// Appends an identifier. No-op when the identifier is empty, already
    /// present, or the list is full.
    pub fn add(&mut self, identifier: &str) -> bool {
        if identifier.is_empty() || self.contains(identifier) || self.entries.len() >= MAX_LOCATIONS
        {
            return false;
        }
        self.entries.push(TimeZoneSelection::new(identifier));
        true
    }

    /// Removes the entry at `index`, preserving the order of the rest.
    /// No-op when out of bounds.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    /// Moves the entry at `from` to `to`, clamping `to` into bounds. No-op
    /// when `from` is out of bounds or the move lands on its own position.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() {
            return false;
        }
        let to = to.min(self.entries.len() - 1);
        if from == to {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Sets the custom name of the entry matching `identifier`; an empty
    /// name clears it. No-op when the identifier is not selected.
    pub fn rename(&mut self, identifier: &str, new_name: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.identifier == identifier) else {
            return false;
        };
        entry.custom_name = if new_name.is_empty() {
            None
        } else {
            Some(new_name.to_string())
        };
        true
    }

    /// The ordered `(identifier, display name)` view used for rendering.
    pub fn display_entries(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.identifier.clone(), e.display_name()))
            .collect()
    }

    pub fn entries(&self) -> &[TimeZoneSelection] {
        &self.entries
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.iter().any(|e| e.identifier == identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_LOCATIONS
    }
}
