// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Control points of the experience-weighted time axis.
//!
//! The experience-weighted scale spends horizontal space in proportion to the share of
//! cumulative human experience between two years, rather than the raw number of years. It is
//! defined by a piecewise-linear function through a list of `(year, experience)` markers.

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::{ScaleError, YearRange};

/// A single `(year, experience)` control point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleMarker {
    /// Astronomical year.
    pub year: i32,
    /// Cumulative experience at `year`, usually in `[0, 1]`.
    pub experience: f64,
}

impl ScaleMarker {
    /// Creates a marker.
    pub const fn new(year: i32, experience: f64) -> Self {
        Self { year, experience }
    }
}

/// The built-in markers, spanning 300,000 BCE to the present.
pub const DEFAULT_MARKERS: [ScaleMarker; 19] = [
    ScaleMarker::new(-300_000, 0.00),
    ScaleMarker::new(-100_000, 0.03),
    ScaleMarker::new(-50_000, 0.05),
    ScaleMarker::new(-10_000, 0.08),
    ScaleMarker::new(-6000, 0.10),
    ScaleMarker::new(-3000, 0.15),
    ScaleMarker::new(-1000, 0.20),
    ScaleMarker::new(0, 0.25),
    ScaleMarker::new(500, 0.35),
    ScaleMarker::new(1000, 0.45),
    ScaleMarker::new(1300, 0.50),
    ScaleMarker::new(1500, 0.55),
    ScaleMarker::new(1700, 0.62),
    ScaleMarker::new(1760, 0.67),
    ScaleMarker::new(1850, 0.75),
    ScaleMarker::new(1900, 0.80),
    ScaleMarker::new(1950, 0.85),
    ScaleMarker::new(2000, 0.90),
    ScaleMarker::new(2026, 1.00),
];

/// A validated, ascending list of scale markers.
///
/// Years are strictly ascending and experience never decreases, with a non-empty experience
/// range overall. Under those conditions the interpolated mapping is monotone.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceScale {
    markers: Vec<ScaleMarker>,
}

impl ExperienceScale {
    /// Validates and wraps a marker list.
    pub fn new(markers: Vec<ScaleMarker>) -> Result<Self, ScaleError> {
        if markers.len() < 2 {
            return Err(ScaleError::TooFewMarkers);
        }
        for (index, pair) in markers.windows(2).enumerate() {
            if pair[1].year <= pair[0].year {
                return Err(ScaleError::YearsNotAscending { index: index + 1 });
            }
            // NaN compares as unordered and is rejected here too.
            let ordered = matches!(
                pair[1].experience.partial_cmp(&pair[0].experience),
                Some(Ordering::Greater | Ordering::Equal)
            );
            if !ordered {
                return Err(ScaleError::ExperienceNotAscending { index: index + 1 });
            }
        }
        let first = markers[0].experience;
        let last = markers[markers.len() - 1].experience;
        if last <= first {
            return Err(ScaleError::FlatExperience);
        }
        Ok(Self { markers })
    }

    /// Returns the scale built from [`DEFAULT_MARKERS`].
    pub fn builtin() -> Self {
        Self {
            markers: DEFAULT_MARKERS.to_vec(),
        }
    }

    /// Returns the markers in ascending order.
    pub fn markers(&self) -> &[ScaleMarker] {
        &self.markers
    }

    /// Returns the first marker.
    pub fn first(&self) -> ScaleMarker {
        self.markers[0]
    }

    /// Returns the last marker.
    pub fn last(&self) -> ScaleMarker {
        self.markers[self.markers.len() - 1]
    }

    /// Returns the year range covered by the markers.
    pub fn years(&self) -> YearRange {
        // Construction guarantees at least two strictly ascending years.
        YearRange::new(self.first().year, self.last().year).unwrap_or_default()
    }
}

impl Default for ExperienceScale {
    fn default() -> Self {
        Self::builtin()
    }
}
