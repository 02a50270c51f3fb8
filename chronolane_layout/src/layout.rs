// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full layout pass.
//!
//! A pass runs synchronously over an explicit [`LayoutContext`] snapshot:
//! 1. instantiate the time axis for the current zoom,
//! 2. filter events to the visible year range,
//! 3. place ruler labels,
//! 4. for each region lane, pack rows and **arrange** them into pixel rectangles.
//!
//! Nothing is cached between passes; the only state that survives is the caller-owned
//! [`RowAssignments`].

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use chronolane_core::{Event, Region, RowAssignments, Zoom, visible_events};
use kurbo::Rect;

#[cfg(not(feature = "std"))]
#[allow(
    unused_imports,
    reason = "test builds link `std`, whose inherent `f64::floor` takes precedence"
)]
use crate::float::FloatExt;

use crate::geometry::EventShape;
use crate::log::debug;
use crate::measure::LabelMeasurer;
use crate::packer::{PackSpec, PackedRow};
use crate::ruler::{PlacedMarker, RulerSpec, ruler_candidates};
use crate::scale::AxisSpec;

/// Vertical metrics and label rules for the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrangeSpec {
    /// Height of one row.
    pub row_height: f64,
    /// Inset of an event's box from the top (and bottom) of its row.
    pub row_top_inset: f64,
    /// Per-row pitch used when sizing a region lane.
    pub region_row_pitch: f64,
    /// Extra height added to every region lane.
    pub region_padding: f64,
    /// Minimum height of a region lane.
    pub min_region_height: f64,
    /// Gap between a shape and its external label, and before the next event.
    pub label_offset: f64,
    /// External labels with less room than this are hidden.
    pub min_visible_label: f64,
}

impl Default for ArrangeSpec {
    fn default() -> Self {
        Self {
            row_height: 32.0,
            row_top_inset: 5.0,
            region_row_pitch: 35.0,
            region_padding: 20.0,
            min_region_height: 100.0,
            label_offset: 4.0,
            min_visible_label: 20.0,
        }
    }
}

/// An event placed at its final position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedEvent<'a> {
    /// The event.
    pub event: &'a Event,
    /// Row index within the region.
    pub row: usize,
    /// Drawn shape.
    pub shape: EventShape,
    /// Drawn box, relative to the region's top-left corner. Points have zero width.
    pub rect: Rect,
    /// Room available to an external label before the next event in the row.
    ///
    /// `None` when the label is inside the shape or nothing follows in the row.
    pub label_max_width: Option<f64>,
    /// Whether the external label has too little room to be drawn.
    pub label_hidden: bool,
    /// Whether the row came from a manual row assignment.
    pub pinned: bool,
}

impl ArrangeSpec {
    /// Returns the row under a vertical offset from the top of a region lane.
    ///
    /// This is the drop target of a drag-and-drop row move. Offsets above the lane map to
    /// row `0`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "non-negative; saturating float-to-int conversion"
    )]
    pub fn row_at_offset(&self, relative_y: f64) -> usize {
        let row = (relative_y / self.row_height).floor();
        if row.is_nan() || row <= 0.0 {
            return 0;
        }
        row as usize
    }

    /// Returns the height of a region lane holding `rows` rows.
    pub fn region_height(&self, rows: usize) -> f64 {
        (rows as f64 * self.region_row_pitch + self.region_padding).max(self.min_region_height)
    }

    /// Arranges packed rows into placed events, row by row.
    ///
    /// Within a row, events are visited in start-year order so each external label can be
    /// clipped against the event that follows it.
    pub fn arrange<'a>(&self, rows: &[PackedRow<'a>]) -> Vec<PlacedEvent<'a>> {
        let mut out = Vec::new();
        for (row, members) in rows.iter().enumerate() {
            let mut sorted: Vec<_> = members.iter().collect();
            sorted.sort_by_key(|p| p.event.year);

            let y0 = row as f64 * self.row_height + self.row_top_inset;
            let y1 = (row + 1) as f64 * self.row_height - self.row_top_inset;

            for (i, member) in sorted.iter().enumerate() {
                let g = member.geometry;
                let label_max_width = match (g.shape, sorted.get(i + 1)) {
                    (EventShape::WideInterval, _) | (_, None) => None,
                    (shape, Some(next)) => {
                        let label_start = match shape {
                            EventShape::Point => g.start + self.label_offset,
                            _ => g.start + g.visual_width + self.label_offset,
                        };
                        let room = next.geometry.start - label_start - self.label_offset;
                        Some(room.max(0.0))
                    }
                };
                out.push(PlacedEvent {
                    event: member.event,
                    row,
                    shape: g.shape,
                    rect: Rect::new(g.start, y0, g.start + g.visual_width, y1),
                    label_max_width,
                    label_hidden: label_max_width.is_some_and(|w| w < self.min_visible_label),
                    pinned: member.pinned,
                });
            }
        }
        out
    }
}

/// The inputs of one layout pass.
pub struct LayoutContext<'a> {
    /// All events; filtered to the visible range and split by region during the pass.
    pub events: &'a [Event],
    /// Manual row pins.
    pub assignments: &'a RowAssignments,
    /// Time-axis configuration.
    pub axis: &'a AxisSpec,
    /// Current zoom.
    pub zoom: Zoom,
    /// Packing parameters.
    pub pack: PackSpec,
    /// Ruler placement parameters.
    pub ruler: RulerSpec,
    /// Arrange parameters.
    pub arrange: ArrangeSpec,
    /// Label width estimator.
    pub measurer: &'a dyn LabelMeasurer,
}

impl fmt::Debug for LayoutContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayoutContext")
            .field("events", &self.events.len())
            .field("assignments", &self.assignments.len())
            .field("axis", &self.axis)
            .field("zoom", &self.zoom)
            .field("pack", &self.pack)
            .field("ruler", &self.ruler)
            .field("arrange", &self.arrange)
            .finish_non_exhaustive()
    }
}

impl<'a> LayoutContext<'a> {
    /// Creates a context with default packing, ruler and arrange parameters.
    pub fn new(
        events: &'a [Event],
        assignments: &'a RowAssignments,
        axis: &'a AxisSpec,
        zoom: Zoom,
        measurer: &'a dyn LabelMeasurer,
    ) -> Self {
        Self {
            events,
            assignments,
            axis,
            zoom,
            pack: PackSpec::default(),
            ruler: RulerSpec::default(),
            arrange: ArrangeSpec::default(),
            measurer,
        }
    }

    /// Set the packing parameters.
    pub fn with_pack(mut self, pack: PackSpec) -> Self {
        self.pack = pack;
        self
    }

    /// Set the ruler parameters.
    pub fn with_ruler(mut self, ruler: RulerSpec) -> Self {
        self.ruler = ruler;
        self
    }

    /// Set the arrange parameters.
    pub fn with_arrange(mut self, arrange: ArrangeSpec) -> Self {
        self.arrange = arrange;
        self
    }
}

/// The layout of one region lane.
#[derive(Clone, Debug, PartialEq)]
pub struct RegionLayout<'a> {
    /// The region.
    pub region: Region,
    /// Number of rows.
    pub rows: usize,
    /// Lane height.
    pub height: f64,
    /// Placed events, row by row.
    pub events: Vec<PlacedEvent<'a>>,
}

/// Output of a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineLayout<'a> {
    /// Effective timeline width.
    pub width: f64,
    /// Placed ruler labels.
    pub markers: Vec<PlacedMarker>,
    /// One entry per region, in [`Region::ALL`] order.
    pub regions: Vec<RegionLayout<'a>>,
}

impl<'a> TimelineLayout<'a> {
    /// Runs a full layout pass.
    pub fn compute(ctx: &LayoutContext<'a>) -> Self {
        let axis = ctx.axis.instantiate(ctx.zoom);
        let visible = visible_events(ctx.events, axis.visible_range());
        let markers = ctx.ruler.place(&ruler_candidates(ctx.zoom), &axis);

        let regions = Region::ALL
            .into_iter()
            .map(|region| {
                let packed = ctx.pack.pack_region(
                    visible.iter().copied().filter(|e| e.region == region),
                    ctx.assignments,
                    &axis,
                    ctx.measurer,
                );
                let events = ctx.arrange.arrange(packed.rows());
                debug!(region = region.id(), rows = packed.len(), events = events.len(), "arranged region");
                RegionLayout {
                    region,
                    rows: packed.len(),
                    height: ctx.arrange.region_height(packed.len()),
                    events,
                }
            })
            .collect();

        Self {
            width: axis.width(),
            markers,
            regions,
        }
    }

    /// Returns the layout of one region.
    pub fn region(&self, region: Region) -> Option<&RegionLayout<'a>> {
        self.regions.iter().find(|r| r.region == region)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use chronolane_core::{Category, EventId, YearRange};
    use smallvec::smallvec;

    use super::*;
    use crate::geometry::GeometrySpec;
    use crate::measure::HeuristicLabelMeasurer;
    use crate::packer::PackedEvent;
    use crate::scale::{ScaleMode, TimeAxis};

    #[test]
    fn drop_offsets_map_to_rows() {
        let a = ArrangeSpec::default();
        assert_eq!(a.row_at_offset(-12.0), 0);
        assert_eq!(a.row_at_offset(0.0), 0);
        assert_eq!(a.row_at_offset(31.9), 0);
        assert_eq!(a.row_at_offset(32.0), 1);
        assert_eq!(a.row_at_offset(100.0), 3);
    }

    #[test]
    fn region_height_has_a_floor() {
        let a = ArrangeSpec::default();
        assert_eq!(a.region_height(0), 100.0);
        assert_eq!(a.region_height(2), 100.0);
        assert_eq!(a.region_height(4), 160.0);
    }

    fn packed<'a>(event: &'a Event, axis: &TimeAxis<'_>) -> PackedEvent<'a> {
        PackedEvent {
            event,
            geometry: GeometrySpec::default().classify(
                event,
                axis,
                &HeuristicLabelMeasurer::default(),
            ),
            pinned: false,
        }
    }

    #[test]
    fn external_labels_are_clipped_by_the_next_event() {
        let spec = AxisSpec::new()
            .with_mode(ScaleMode::Linear)
            .with_linear_domain(YearRange::new(0, 2000).unwrap())
            .with_width_base(2000.0);
        let axis = spec.instantiate(Zoom::default());

        let flag = Event::new(1, "Flag", 100, Region::Asia);
        let narrow = Event::new(2, "Narrow", 130, Region::Asia).with_end_year(140);
        let wide = Event::new(3, "Wide", 150, Region::Asia).with_end_year(400);
        let last = Event::new(4, "Last", 500, Region::Asia);
        // Out of order; arrange sorts by start year.
        let row: PackedRow<'_> = smallvec![
            packed(&last, &axis),
            packed(&flag, &axis),
            packed(&wide, &axis),
            packed(&narrow, &axis),
        ];
        let placed = ArrangeSpec::default().arrange(&[row]);
        let ids: Vec<_> = placed.iter().map(|p| p.event.id.clone()).collect();
        assert_eq!(
            ids,
            vec![EventId::Int(1), EventId::Int(2), EventId::Int(3), EventId::Int(4)]
        );

        // Flag at 100: label starts at 104, next starts at 130, so 130 - 104 - 4 = 22.
        assert_eq!(placed[0].label_max_width, Some(22.0));
        assert!(!placed[0].label_hidden);
        // Narrow bar 130..140: label at 144, next at 150, hidden.
        assert_eq!(placed[1].label_max_width, Some(2.0));
        assert!(placed[1].label_hidden);
        assert_eq!(placed[2].label_max_width, None);
        assert_eq!(placed[3].label_max_width, None);

        assert_eq!(placed[2].rect, Rect::new(150.0, 5.0, 400.0, 27.0));
        assert_eq!(placed[0].rect.width(), 0.0);
    }

    #[test]
    fn full_pass_covers_every_region() {
        let events = vec![
            Event::new(1, "Rome", -753, Region::EuropeMiddleEast)
                .with_end_year(476)
                .with_category(Category::State),
            Event::new(2, "Hastings", 1066, Region::EuropeMiddleEast),
            Event::new(3, "Too early", -400_000, Region::Asia),
        ];
        let assignments = RowAssignments::new();
        let axis = AxisSpec::new();
        let measurer = HeuristicLabelMeasurer::default();
        let ctx = LayoutContext::new(&events, &assignments, &axis, Zoom::new(2.0), &measurer);
        let layout = TimelineLayout::compute(&ctx);

        assert_eq!(layout.width, 5000.0);
        assert_eq!(layout.regions.len(), 5);
        let europe = layout.region(Region::EuropeMiddleEast).unwrap();
        assert_eq!(europe.rows, 2);
        assert_eq!(europe.events.len(), 2);
        let asia = layout.region(Region::Asia).unwrap();
        assert_eq!(asia.rows, 0);
        assert_eq!(asia.height, 100.0);
        assert!(!layout.markers.is_empty());
    }
}
