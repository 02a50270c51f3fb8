// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event geometry classification.
//!
//! Every event is classified from its pixel span into one of three shapes. The shape decides
//! two widths that are deliberately kept apart:
//! - the **visual** width, which is what gets drawn (a dot, a thin bar, or a labelled bar);
//! - the **footprint**, which is what the row packer tests for collisions. Points and
//!   narrow bars draw their label outside the shape, so their footprint includes the label.

use chronolane_core::Event;

use crate::measure::LabelMeasurer;
use crate::scale::TimeAxis;

/// Drawn shape of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventShape {
    /// No duration: a flag with an external label.
    Point,
    /// An interval too narrow to hold its label: a thin bar with an external label.
    NarrowInterval,
    /// An interval wide enough to hold its label inside.
    WideInterval,
}

impl EventShape {
    /// Returns whether the label is drawn outside the shape.
    pub fn has_external_label(self) -> bool {
        matches!(self, Self::Point | Self::NarrowInterval)
    }
}

/// Thresholds and minimum widths used by classification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeometrySpec {
    /// Intervals narrower than this (in pixels) are [`EventShape::NarrowInterval`].
    pub narrow_threshold: f64,
    /// Minimum footprint of an externally labelled event.
    pub min_label_footprint: f64,
    /// Minimum width of a wide interval.
    pub min_bar_width: f64,
    /// Minimum width of a wide interval that is a long period.
    pub min_period_bar_width: f64,
    /// Intervals lasting more than this many years are long periods.
    pub period_span_years: i64,
    /// Minimum drawn width of a narrow interval.
    pub min_narrow_bar_width: f64,
}

impl Default for GeometrySpec {
    fn default() -> Self {
        Self {
            narrow_threshold: 80.0,
            min_label_footprint: 80.0,
            min_bar_width: 20.0,
            min_period_bar_width: 40.0,
            period_span_years: 30,
            min_narrow_bar_width: 6.0,
        }
    }
}

impl GeometrySpec {
    /// Returns the collision footprint for a shape.
    ///
    /// `label_width` is the measured title width, used only for externally labelled shapes.
    pub fn footprint(
        &self,
        shape: EventShape,
        raw_width: f64,
        long_period: bool,
        label_width: f64,
    ) -> f64 {
        match shape {
            EventShape::Point | EventShape::NarrowInterval => {
                label_width.max(self.min_label_footprint)
            }
            EventShape::WideInterval => self.bar_width(raw_width, long_period),
        }
    }

    /// Returns the drawn width for a shape.
    pub fn visual_width(&self, shape: EventShape, raw_width: f64, long_period: bool) -> f64 {
        match shape {
            EventShape::Point => 0.0,
            EventShape::NarrowInterval => raw_width.max(self.min_narrow_bar_width),
            EventShape::WideInterval => self.bar_width(raw_width, long_period),
        }
    }

    fn bar_width(&self, raw_width: f64, long_period: bool) -> f64 {
        if long_period {
            raw_width.max(self.min_period_bar_width)
        } else {
            raw_width.max(self.min_bar_width)
        }
    }

    /// Classifies an event against an axis.
    pub fn classify(
        &self,
        event: &Event,
        axis: &TimeAxis<'_>,
        measurer: &dyn LabelMeasurer,
    ) -> EventGeometry {
        let start = axis.year_to_position(event.year);
        let end = event
            .end_year
            .map_or(start, |end_year| axis.year_to_position(end_year));
        let raw_width = end - start;

        let shape = if !event.has_span() {
            EventShape::Point
        } else if raw_width < self.narrow_threshold {
            EventShape::NarrowInterval
        } else {
            EventShape::WideInterval
        };
        let long_period = event.has_span() && event.duration_years() > self.period_span_years;

        let label_width = if shape.has_external_label() {
            measurer.label_width(&event.title)
        } else {
            0.0
        };

        EventGeometry {
            shape,
            start,
            raw_width,
            footprint: self.footprint(shape, raw_width, long_period, label_width),
            visual_width: self.visual_width(shape, raw_width, long_period),
        }
    }
}

/// Pixel geometry of one event on one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EventGeometry {
    /// Drawn shape.
    pub shape: EventShape,
    /// Left edge in pixels.
    pub start: f64,
    /// `position(end_year) - position(year)`; `0` for events without an end year.
    pub raw_width: f64,
    /// Width used for collision tests.
    pub footprint: f64,
    /// Width actually drawn.
    pub visual_width: f64,
}

impl EventGeometry {
    /// Returns the right edge of the collision footprint.
    pub fn footprint_end(&self) -> f64 {
        self.start + self.footprint
    }

    /// Returns whether `self` can share a row with `other` given a mandatory `gutter`.
    ///
    /// `self` must start at least `gutter` after `other`'s footprint ends, or end at least
    /// `gutter` before `other` starts.
    pub fn clears(&self, other: &Self, gutter: f64) -> bool {
        self.start >= other.footprint_end() + gutter || self.footprint_end() + gutter <= other.start
    }
}
