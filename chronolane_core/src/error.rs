// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors for time-axis inputs.

use thiserror::Error;

/// Errors returned when building a time-axis configuration.
///
/// A well-formed configuration guarantees the axis mapping is monotone and never divides
/// by zero, so these are only produced at construction time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// An experience scale needs at least two control points.
    #[error("an experience scale needs at least two markers")]
    TooFewMarkers,
    /// Marker years must be strictly ascending.
    #[error("marker {index} does not have a later year than the marker before it")]
    YearsNotAscending {
        /// Index of the offending marker.
        index: usize,
    },
    /// Marker experience values must never decrease.
    #[error("marker {index} has less experience than the marker before it")]
    ExperienceNotAscending {
        /// Index of the offending marker.
        index: usize,
    },
    /// The first and last markers carry the same experience value.
    #[error("the experience range of the markers is empty")]
    FlatExperience,
    /// A linear year range has `min >= max`.
    #[error("the linear year range is empty")]
    EmptyLinearDomain,
}
