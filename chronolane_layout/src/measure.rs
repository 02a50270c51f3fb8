// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement hooks for collision footprints.
//!
//! Point events and narrow intervals draw their title outside their shape, so the packer
//! reserves room for the label when testing for overlap. Text shaping stays downstream;
//! the packer only asks a [`LabelMeasurer`] how wide a title is.

/// Estimates the horizontal space an event title occupies.
pub trait LabelMeasurer {
    /// Returns the width in pixels reserved for `text`, including any padding.
    fn label_width(&self, text: &str) -> f64;
}

/// A per-character heuristic: `chars * per_char + padding`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeuristicLabelMeasurer {
    /// Width reserved per character.
    pub per_char: f64,
    /// Fixed padding (marker dot plus gaps).
    pub padding: f64,
}

impl Default for HeuristicLabelMeasurer {
    fn default() -> Self {
        Self {
            per_char: 5.0,
            padding: 30.0,
        }
    }
}

impl LabelMeasurer for HeuristicLabelMeasurer {
    fn label_width(&self, text: &str) -> f64 {
        self.per_char * text.chars().count() as f64 + self.padding
    }
}
