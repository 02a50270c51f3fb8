// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row packing for one region lane.
//!
//! Events are stacked into rows so that no two auto-placed events in a row overlap:
//! - Events are grouped into category tiers; tiers are laid out top to bottom and never
//!   share a row.
//! - Within a tier, manually pinned events go to their pinned row first.
//! - Periods are a shared background band: every auto-placed period goes to the tier's first
//!   row regardless of overlap.
//! - Every other event goes into the first row of its tier where it clears all occupants by
//!   the gutter, or into a new row.
//!
//! This is first-fit greedy interval coloring. It does not minimize the row count, but
//! placement is stable as events are added.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::cmp::Ordering;

use chronolane_core::{Event, EventId, RowAssignments, Tier};
use smallvec::SmallVec;

use crate::geometry::{EventGeometry, GeometrySpec};
use crate::log::{debug, warn};
use crate::measure::LabelMeasurer;
use crate::scale::TimeAxis;

/// An event with its geometry, as placed by the packer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackedEvent<'a> {
    /// The event.
    pub event: &'a Event,
    /// Geometry on the axis the region was packed against.
    pub geometry: EventGeometry,
    /// Whether the row came from a manual row assignment.
    pub pinned: bool,
}

/// Members of one packed row, in placement order.
pub type PackedRow<'a> = SmallVec<[PackedEvent<'a>; 4]>;

/// Packing parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PackSpec {
    /// Minimum horizontal gap between auto-placed events sharing a row.
    pub gutter: f64,
    /// Largest honored manual row index; larger pins are clamped to it.
    pub max_manual_row: usize,
    /// Classification thresholds.
    pub geometry: GeometrySpec,
}

impl Default for PackSpec {
    fn default() -> Self {
        Self {
            gutter: 5.0,
            max_manual_row: 1024,
            geometry: GeometrySpec::default(),
        }
    }
}

/// The rows of one region, top to bottom, with empty rows removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PackedRegion<'a> {
    rows: Vec<PackedRow<'a>>,
}

impl<'a> PackedRegion<'a> {
    /// Returns the rows.
    pub fn rows(&self) -> &[PackedRow<'a>] {
        &self.rows
    }

    /// Consumes the region, returning its rows.
    pub fn into_rows(self) -> Vec<PackedRow<'a>> {
        self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether the region has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row an event ended up in.
    pub fn row_of(&self, id: &EventId) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.iter().any(|p| p.event.id == *id))
    }
}

impl PackSpec {
    /// Set the gutter.
    pub fn with_gutter(mut self, gutter: f64) -> Self {
        self.gutter = gutter;
        self
    }

    /// Set the largest honored manual row index.
    pub fn with_max_manual_row(mut self, max_manual_row: usize) -> Self {
        self.max_manual_row = max_manual_row;
        self
    }

    /// Set the classification thresholds.
    pub fn with_geometry(mut self, geometry: GeometrySpec) -> Self {
        self.geometry = geometry;
        self
    }

    /// Packs the events of one region into rows.
    ///
    /// Manual pins are looked up by `(event.region, event.id)`. The result depends only on
    /// the set of events, not on their input order, except that events pinned to the same
    /// row keep their sorted order within it.
    pub fn pack_region<'a>(
        &self,
        events: impl IntoIterator<Item = &'a Event>,
        assignments: &RowAssignments,
        axis: &TimeAxis<'_>,
        measurer: &dyn LabelMeasurer,
    ) -> PackedRegion<'a> {
        let mut sorted: Vec<PackedEvent<'a>> = events
            .into_iter()
            .map(|event| PackedEvent {
                event,
                geometry: self.geometry.classify(event, axis, measurer),
                pinned: false,
            })
            .collect();
        sorted.sort_by(|a, b| stacking_order(a.event, b.event));

        // Sparse rows: a pin to a distant row does not allocate the rows in between.
        let mut rows: BTreeMap<usize, PackedRow<'a>> = BTreeMap::new();

        for group in sorted.chunk_by(|a, b| a.event.tier() == b.event.tier()) {
            let tier = group[0].event.tier();
            let group_start = row_count(&rows);

            let mut auto = Vec::with_capacity(group.len());
            for member in group {
                match assignments.get(member.event.region, &member.event.id) {
                    Some(row) => {
                        let row = if row > self.max_manual_row {
                            warn!(
                                id = %member.event.id,
                                row,
                                max = self.max_manual_row,
                                "manual row pin clamped"
                            );
                            self.max_manual_row
                        } else {
                            row
                        };
                        rows.entry(row).or_default().push(PackedEvent {
                            pinned: true,
                            ..*member
                        });
                    }
                    None => auto.push(*member),
                }
            }

            for member in auto {
                let row = if tier == Tier::Period {
                    group_start
                } else {
                    self.first_fit(&rows, group_start, &member.geometry)
                };
                rows.entry(row).or_default().push(member);
            }
        }

        let rows: Vec<PackedRow<'a>> = rows.into_values().filter(|r| !r.is_empty()).collect();
        debug!(events = sorted.len(), rows = rows.len(), "packed region");
        PackedRegion { rows }
    }

    /// Returns the first row at or after `start` that `geometry` fits into.
    ///
    /// Missing rows below the current row count are empty and always fit.
    fn first_fit(
        &self,
        rows: &BTreeMap<usize, PackedRow<'_>>,
        start: usize,
        geometry: &EventGeometry,
    ) -> usize {
        let end = row_count(rows);
        for i in start..end {
            match rows.get(&i) {
                None => return i,
                Some(row) if row.iter().all(|o| geometry.clears(&o.geometry, self.gutter)) => {
                    return i;
                }
                Some(_) => {}
            }
        }
        end
    }
}

fn row_count(rows: &BTreeMap<usize, PackedRow<'_>>) -> usize {
    rows.last_key_value().map_or(0, |(k, _)| k + 1)
}

/// Orders events by tier, then start year, then end year, then id.
fn stacking_order(a: &Event, b: &Event) -> Ordering {
    a.tier()
        .cmp(&b.tier())
        .then(a.year.cmp(&b.year))
        .then(a.end_year_or_start().cmp(&b.end_year_or_start()))
        .then_with(|| a.id.cmp(&b.id))
}
