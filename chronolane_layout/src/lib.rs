// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout engine for experience-weighted history timelines.
//!
//! This crate turns the data model of `chronolane_core` into pixel geometry:
//! - **Axes** map years to horizontal positions, either linearly or through a piecewise
//!   "experience" curve that gives recent history more room.
//! - **Geometry** classifies each event as a point, a narrow bar or a wide bar and computes
//!   the horizontal footprint it reserves, label included.
//! - **Packing** assigns events to rows within a region lane, honoring manual row pins.
//! - **Rulers** pick non-overlapping year labels for the top axis.
//! - **Layout** runs the whole pass and produces rectangles ready to draw.
//!
//! Drawing is out of scope; labels are measured through the [`LabelMeasurer`] trait so a
//! frontend can plug in real text shaping.

#![no_std]

extern crate alloc;

#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod layout;
mod log;
mod measure;
mod packer;
mod ruler;
mod scale;
#[cfg(test)]
mod scenario_tests;

pub use format::{format_year, ruler_label};
pub use geometry::{EventGeometry, EventShape, GeometrySpec};
pub use layout::{ArrangeSpec, LayoutContext, PlacedEvent, RegionLayout, TimelineLayout};
pub use measure::{HeuristicLabelMeasurer, LabelMeasurer};
pub use packer::{PackSpec, PackedEvent, PackedRegion, PackedRow};
pub use ruler::{PlacedMarker, RulerCandidate, RulerSpec, ruler_candidates};
pub use scale::{AxisSpec, ScaleExperience, ScaleLinear, ScaleMode, TimeAxis, TimeScale};
