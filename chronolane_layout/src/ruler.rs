// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ruler (scale-marker) label placement.
//!
//! The ruler shows a handful of milestone years plus denser subdivisions that appear as the
//! user zooms in. Labels must not collide, and milestones must never be crowded out by
//! subdivisions, so placement runs in two passes: majors first, then minors into the gaps.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use chronolane_core::Zoom;

use crate::format::ruler_label;
use crate::scale::TimeAxis;

/// A ruler label that may be placed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RulerCandidate {
    /// Year the label marks.
    pub year: i32,
    /// Label text.
    pub label: String,
    /// Whether this is a milestone (placed in the first pass).
    pub major: bool,
}

impl RulerCandidate {
    /// Creates a milestone candidate labelled with [`ruler_label`].
    pub fn major(year: i32) -> Self {
        Self {
            year,
            label: ruler_label(year),
            major: true,
        }
    }

    /// Creates a subdivision candidate labelled with [`ruler_label`].
    pub fn minor(year: i32) -> Self {
        Self {
            year,
            label: ruler_label(year),
            major: false,
        }
    }
}

/// A placed ruler label.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedMarker {
    /// Year the label marks.
    pub year: i32,
    /// Label text.
    pub label: String,
    /// Horizontal pixel offset.
    pub x: f64,
    /// Whether this is a milestone.
    pub major: bool,
}

const MAJOR_YEARS: [i32; 10] = [-300_000, -100_000, -10_000, -3000, -1000, 0, 1000, 1500, 1900, 2000];

const MINOR_YEARS: [i32; 8] = [-50_000, -6000, -2000, -500, 500, 1300, 1700, 1800];

/// Zoom-dependent subdivisions: `(zoom above, first year, last year, step)`.
const ZOOM_SUBDIVISIONS: [(f64, i32, i32, usize); 4] = [
    (1.5, -3000, 2000, 500),
    (3.0, -1000, 2000, 100),
    (6.0, -500, 2000, 50),
    (10.0, -500, 2000, 25),
];

/// Returns the built-in ruler candidates for a zoom factor.
///
/// The fixed milestones and subdivisions are always present. Each zoom threshold that is
/// exceeded adds evenly spaced subdivisions, skipping years already present as minors.
pub fn ruler_candidates(zoom: Zoom) -> Vec<RulerCandidate> {
    let mut out: Vec<RulerCandidate> = MAJOR_YEARS.into_iter().map(RulerCandidate::major).collect();
    let mut minors: Vec<i32> = MINOR_YEARS.to_vec();
    for (threshold, first, last, step) in ZOOM_SUBDIVISIONS {
        if zoom.get() <= threshold {
            continue;
        }
        for year in (first..=last).step_by(step) {
            if !minors.contains(&year) {
                minors.push(year);
            }
        }
    }
    out.extend(minors.into_iter().map(RulerCandidate::minor));
    out
}

/// Ruler placement parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RulerSpec {
    /// Minimum pixel distance between any two placed labels.
    pub min_gap: f64,
}

impl Default for RulerSpec {
    fn default() -> Self {
        Self { min_gap: 80.0 }
    }
}

impl RulerSpec {
    /// Set the minimum gap.
    pub fn with_min_gap(mut self, min_gap: f64) -> Self {
        self.min_gap = min_gap;
        self
    }

    /// Places ruler labels on an axis.
    ///
    /// Candidates outside the axis' visible year range are skipped. Majors are walked in
    /// ascending year order and placed when they are at least `min_gap` away from every
    /// label placed so far; minors follow in a second pass against majors and minors alike.
    /// The result lists placed majors first, then placed minors, each in year order.
    pub fn place(&self, candidates: &[RulerCandidate], axis: &TimeAxis<'_>) -> Vec<PlacedMarker> {
        let visible = axis.visible_range();
        let mut placed: Vec<PlacedMarker> = Vec::new();

        for major in [true, false] {
            let mut pass: Vec<&RulerCandidate> = candidates
                .iter()
                .filter(|c| c.major == major && visible.contains(c.year))
                .collect();
            pass.sort_by_key(|c| c.year);

            for c in pass {
                let x = axis.year_to_position(c.year);
                // Pairwise against everything placed, not just the previous label.
                if placed.iter().all(|p| (x - p.x).abs() >= self.min_gap) {
                    placed.push(PlacedMarker {
                        year: c.year,
                        label: c.label.clone(),
                        x,
                        major: c.major,
                    });
                }
            }
        }
        placed
    }
}
