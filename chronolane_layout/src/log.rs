// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conditional logging macros.
//!
//! When the `tracing` feature is enabled, these re-export `tracing` macros.
//! When disabled, they expand to nothing.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, warn};

// The no-op macros carry a trailing underscore: a local `macro_rules! warn` cannot be
// re-exported by name because it is ambiguous with the built-in `#[warn]` attribute.
#[cfg(not(feature = "tracing"))]
macro_rules! debug_ {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! warn_ {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {debug_ as debug, warn_ as warn};
