// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geographic region lanes.

/// One of the fixed horizontal lanes of the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Subsaharan Africa.
    SubsaharanAfrica,
    /// Europe and the Middle East.
    EuropeMiddleEast,
    /// Asia.
    Asia,
    /// North and South America.
    Americas,
    /// Oceania and the Pacific islands.
    Pacific,
}

impl Region {
    /// All regions in top-to-bottom display order.
    pub const ALL: [Self; 5] = [
        Self::SubsaharanAfrica,
        Self::EuropeMiddleEast,
        Self::Asia,
        Self::Americas,
        Self::Pacific,
    ];

    /// Returns the persisted id.
    pub fn id(self) -> &'static str {
        match self {
            Self::SubsaharanAfrica => "subsaharan-africa",
            Self::EuropeMiddleEast => "europe-middle-east",
            Self::Asia => "asia",
            Self::Americas => "americas",
            Self::Pacific => "pacific",
        }
    }

    /// Returns the display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::SubsaharanAfrica => "Subsaharan Africa",
            Self::EuropeMiddleEast => "Europe & Middle East",
            Self::Asia => "Asia",
            Self::Americas => "The Americas",
            Self::Pacific => "Pacific",
        }
    }

    /// Looks up a region by its persisted id.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }
}
