// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year-to-pixel mapping.
//!
//! A timeline axis maps astronomical years onto `[0, width]`, where `width` is the base
//! timeline width multiplied by the zoom factor. Two mappings are supported:
//! - **Linear**: equal pixels per year across the visible year range.
//! - **Experience**: piecewise-linear interpolation through [`ScaleMarker`]s, so that pixel
//!   distance tracks cumulative human experience instead of calendar duration.
//!
//! Gridlines and event geometry both go through [`TimeAxis::year_to_position`].

use chronolane_core::{ExperienceScale, ScaleMarker, YearRange, Zoom};

/// Which mapping a [`TimeAxis`] uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Equal pixels per year.
    Linear,
    /// Piecewise-linear experience-weighted mapping.
    #[default]
    Experience,
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Maps a value from domain space into range space.
    ///
    /// An empty domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }
}

/// A piecewise-linear experience-weighted mapping.
///
/// Years before the first marker map to the start of the range and years after the last
/// marker map to the end. In between, the year is interpolated to an experience value
/// within its bracketing pair of markers, and that experience value is normalized against
/// the first and last markers' experience.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleExperience<'a> {
    markers: &'a [ScaleMarker],
    range: (f64, f64),
}

impl<'a> ScaleExperience<'a> {
    /// Creates a mapping through the markers of `scale` onto `range`.
    pub fn new(scale: &'a ExperienceScale, range: (f64, f64)) -> Self {
        Self {
            markers: scale.markers(),
            range,
        }
    }

    /// Maps a year into range space.
    pub fn map(&self, year: f64) -> f64 {
        let m = self.markers;
        let first = m[0];
        let last = m[m.len() - 1];
        let (r0, r1) = self.range;
        if year < f64::from(first.year) {
            return r0;
        }
        if year > f64::from(last.year) {
            return r1;
        }

        // Index of the lower marker of the bracketing pair. Markers are strictly ascending, so
        // the pair is unique except at a marker year, where both neighbours agree.
        let upper = m.partition_point(|mk| f64::from(mk.year) <= year);
        let i = upper.saturating_sub(1).min(m.len() - 2);
        let lo = m[i];
        let hi = m[i + 1];

        let year_progress = (year - f64::from(lo.year)) / (f64::from(hi.year) - f64::from(lo.year));
        let experience = lo.experience + year_progress * (hi.experience - lo.experience);
        let t = (experience - first.experience) / (last.experience - first.experience);
        r0 + t * (r1 - r0)
    }
}

/// Time-axis configuration (mode, markers and base width, no zoom yet).
#[derive(Clone, Debug, PartialEq)]
pub struct AxisSpec {
    /// Timeline width in pixels at zoom `1.0`.
    pub width_base: f64,
    /// Year range of the linear mapping; also the visible year range.
    pub linear_domain: YearRange,
    /// Mapping mode.
    pub mode: ScaleMode,
    /// Control points of the experience mapping.
    pub markers: ExperienceScale,
}

impl AxisSpec {
    /// Creates an axis configuration with defaults:
    /// - `width_base = 2500`
    /// - `linear_domain = 300,000 BCE ..= 2026`
    /// - `mode = ScaleMode::Experience`
    /// - the built-in experience markers.
    pub fn new() -> Self {
        Self {
            width_base: 2500.0,
            linear_domain: YearRange::FULL_HISTORY,
            mode: ScaleMode::Experience,
            markers: ExperienceScale::builtin(),
        }
    }

    /// Set the base width in pixels.
    pub fn with_width_base(mut self, width_base: f64) -> Self {
        self.width_base = width_base;
        self
    }

    /// Set the linear/visible year range.
    pub fn with_linear_domain(mut self, domain: YearRange) -> Self {
        self.linear_domain = domain;
        self
    }

    /// Set the mapping mode.
    pub fn with_mode(mut self, mode: ScaleMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the experience markers.
    pub fn with_markers(mut self, markers: ExperienceScale) -> Self {
        self.markers = markers;
        self
    }

    /// Returns `width_base * zoom`.
    pub fn effective_width(&self, zoom: Zoom) -> f64 {
        self.width_base * zoom.get()
    }

    /// Instantiates a concrete axis for a zoom factor.
    pub fn instantiate(&self, zoom: Zoom) -> TimeAxis<'_> {
        let width = self.effective_width(zoom);
        let range = (0.0, width);
        let scale = match self.mode {
            ScaleMode::Linear => TimeScale::Linear(ScaleLinear::new(
                (
                    f64::from(self.linear_domain.min()),
                    f64::from(self.linear_domain.max()),
                ),
                range,
            )),
            ScaleMode::Experience => TimeScale::Experience(ScaleExperience::new(&self.markers, range)),
        };
        TimeAxis {
            scale,
            width,
            visible: self.linear_domain,
        }
    }
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// A concrete year mapping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimeScale<'a> {
    /// Linear mapping.
    Linear(ScaleLinear),
    /// Experience-weighted mapping.
    Experience(ScaleExperience<'a>),
}

impl TimeScale<'_> {
    /// Maps a year into range space.
    pub fn map(&self, year: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(year),
            Self::Experience(s) => s.map(year),
        }
    }
}

/// A time axis instantiated for one zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeAxis<'a> {
    scale: TimeScale<'a>,
    width: f64,
    visible: YearRange,
}

impl TimeAxis<'_> {
    /// Maps a year to a horizontal pixel offset.
    pub fn year_to_position(&self, year: i32) -> f64 {
        self.scale.map(f64::from(year))
    }

    /// Maps a fractional year to a horizontal pixel offset.
    pub fn position(&self, year: f64) -> f64 {
        self.scale.map(year)
    }

    /// Returns the effective width (`width_base * zoom`).
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the visible year range.
    pub fn visible_range(&self) -> YearRange {
        self.visible
    }

    /// Returns the underlying mapping.
    pub fn scale(&self) -> &TimeScale<'_> {
        &self.scale
    }
}
