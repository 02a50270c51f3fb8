// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a sample history timeline to SVG.
//!
//! Usage: `chronolane_demo [OUT.svg] [--zoom Z] [--linear]`
//!
//! Set `RUST_LOG=chronolane_layout=debug` to see per-region packing logs.

mod data;
mod svg;

use std::error::Error;
use std::path::PathBuf;

use chronolane_core::Zoom;
use chronolane_layout::{AxisSpec, HeuristicLabelMeasurer, LayoutContext, ScaleMode, TimelineLayout};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render a sample history timeline to SVG.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Output SVG path.
    #[arg(default_value = "chronolane_demo.svg")]
    out: PathBuf,

    /// Zoom factor, clamped to `0.5..=10`.
    #[arg(long, default_value_t = 1.0)]
    zoom: f64,

    /// Use a linear year axis instead of the experience-weighted one.
    #[arg(long)]
    linear: bool,
}

impl Args {
    fn zoom(&self) -> Zoom {
        Zoom::new(self.zoom)
    }

    fn mode(&self) -> ScaleMode {
        if self.linear {
            ScaleMode::Linear
        } else {
            ScaleMode::Experience
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let events = data::sample_events();
    let assignments = data::sample_assignments();
    let axis = AxisSpec::new().with_mode(args.mode());
    let measurer = HeuristicLabelMeasurer::default();
    let ctx = LayoutContext::new(&events, &assignments, &axis, args.zoom(), &measurer);
    let layout = TimelineLayout::compute(&ctx);

    for region in &layout.regions {
        info!(
            region = region.region.name(),
            rows = region.rows,
            events = region.events.len(),
            "laid out region"
        );
    }

    std::fs::write(&args.out, svg::render(&layout))?;
    info!(
        path = %args.out.display(),
        width = layout.width,
        markers = layout.markers.len(),
        "wrote timeline"
    );
    Ok(())
}
