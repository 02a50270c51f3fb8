// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom factor.

/// A horizontal zoom factor, always clamped to `[Zoom::MIN, Zoom::MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    /// Smallest zoom factor.
    pub const MIN: f64 = 0.5;
    /// Largest zoom factor.
    pub const MAX: f64 = 10.0;

    /// Creates a zoom factor, clamping into range. NaN maps to `1.0`.
    pub fn new(factor: f64) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(Self::MIN, Self::MAX))
    }

    /// Returns the factor.
    pub fn get(self) -> f64 {
        self.0
    }

    /// Multiplies the factor by `factor` and clamps the result.
    pub fn zoom_by(&mut self, factor: f64) {
        *self = Self::new(self.0 * factor);
    }

    /// Resets to `1.0`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}
