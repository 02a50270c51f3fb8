// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Year ranges.

use crate::ScaleError;

/// A non-empty, inclusive range of astronomical years.
///
/// Used both as the linear axis domain and as the visible-range filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YearRange {
    min: i32,
    max: i32,
}

impl YearRange {
    /// The full span of human history covered by the built-in markers.
    pub const FULL_HISTORY: Self = Self {
        min: -300_000,
        max: 2026,
    };

    /// Creates a range, rejecting `min >= max`.
    pub fn new(min: i32, max: i32) -> Result<Self, ScaleError> {
        if min >= max {
            return Err(ScaleError::EmptyLinearDomain);
        }
        Ok(Self { min, max })
    }

    /// Returns the first year of the range.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Returns the last year of the range.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Returns `max - min` in years.
    pub fn span(&self) -> f64 {
        f64::from(self.max) - f64::from(self.min)
    }

    /// Returns whether `year` lies inside the range (inclusive on both ends).
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::FULL_HISTORY
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn empty_range_is_rejected() {
        assert_eq!(YearRange::new(5, 5), Err(ScaleError::EmptyLinearDomain));
        assert_eq!(YearRange::new(6, 5), Err(ScaleError::EmptyLinearDomain));
    }

    #[test]
    fn contains_is_inclusive() {
        let r = YearRange::new(-100, 100).unwrap();
        assert!(r.contains(-100));
        assert!(r.contains(100));
        assert!(!r.contains(101));
        assert_eq!(r.span(), 200.0);
    }
}
