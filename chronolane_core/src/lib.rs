// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data model for experience-weighted history timelines.
//!
//! This crate holds the inputs of a timeline layout pass:
//! - **Events** (entities, periods and facts) with a start year, an optional end year,
//!   a category and a region lane.
//! - **Regions**, the fixed horizontal lanes events are grouped into.
//! - **Categories** and their vertical **tiers**.
//! - **Row assignments**, the user's manual row pins.
//! - **Scale markers**, the control points of the experience-weighted time axis.
//!
//! Pixel geometry and row packing live in `chronolane_layout`; this crate stays free of
//! any coordinate math so it can be shared with persistence and import code.

#![no_std]

extern crate alloc;

mod assignments;
mod category;
mod domain;
mod error;
mod event;
mod filter;
mod marker;
mod region;
mod zoom;

pub use assignments::RowAssignments;
pub use category::{Category, Tier};
pub use domain::YearRange;
pub use error::ScaleError;
pub use event::{Event, EventId};
pub use filter::{time_span, visible_events};
pub use marker::{DEFAULT_MARKERS, ExperienceScale, ScaleMarker};
pub use region::Region;
pub use zoom::Zoom;
