// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Manual row pins.
//!
//! A row assignment pins one event of one region to an explicit row index. Assignments are
//! written by drag-and-drop, removed when their event is deleted, and cleared wholesale by a
//! layout reset. The packer only ever reads them.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use hashbrown::HashMap;

use crate::{EventId, Region};

/// Map from `(region, event id)` to a pinned row index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowAssignments {
    rows: HashMap<(Region, EventId), usize>,
}

impl RowAssignments {
    /// Creates an empty set of assignments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins an event to `row`, replacing any previous pin.
    pub fn assign(&mut self, region: Region, id: EventId, row: usize) {
        self.rows.insert((region, id), row);
    }

    /// Returns the pinned row for an event, if any.
    pub fn get(&self, region: Region, id: &EventId) -> Option<usize> {
        self.rows.get(&(region, id.clone())).copied()
    }

    /// Removes the pin for an event, returning the row it was pinned to.
    pub fn remove(&mut self, region: Region, id: &EventId) -> Option<usize> {
        self.rows.remove(&(region, id.clone()))
    }

    /// Removes every pin.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Returns the number of pins.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether there are no pins.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(region, id, row)` triples in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Region, &EventId, usize)> + '_ {
        self.rows.iter().map(|((r, id), row)| (*r, id, *row))
    }

    /// Returns the persisted key for an event's pin (`"{region}-{id}"`).
    pub fn storage_key(region: Region, id: &EventId) -> String {
        format!("{}-{}", region.id(), id)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn assign_overwrites_and_remove_deletes() {
        let mut a = RowAssignments::new();
        let id = EventId::from(7);
        a.assign(Region::Asia, id.clone(), 2);
        a.assign(Region::Asia, id.clone(), 4);
        assert_eq!(a.get(Region::Asia, &id), Some(4));
        assert_eq!(a.get(Region::Pacific, &id), None);
        assert_eq!(a.len(), 1);
        assert_eq!(a.remove(Region::Asia, &id), Some(4));
        assert!(a.is_empty());
    }

    #[test]
    fn clear_resets_layout() {
        let mut a = RowAssignments::new();
        a.assign(Region::Asia, EventId::from(1), 0);
        a.assign(Region::Americas, EventId::from("x"), 3);
        a.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn storage_key_joins_region_and_id() {
        assert_eq!(
            RowAssignments::storage_key(Region::EuropeMiddleEast, &EventId::from(12)),
            "europe-middle-east-12"
        );
    }
}
