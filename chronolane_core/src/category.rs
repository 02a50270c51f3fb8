// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event categories and their vertical tiers.
//!
//! Categories come from persisted data as strings. The five entity-type categories map
//! one-to-one onto tiers; the older topical categories are kept as aliases so data saved by
//! earlier versions still stacks into the right band.

use peniko::Color;

/// Vertical precedence group of a category.
///
/// Tiers are laid out top to bottom in declaration order and never share a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Background periods, drawn as a shared band.
    Period,
    /// States, empires and other polities.
    State,
    /// Cultures and cultural eras.
    Culture,
    /// Religions.
    Religion,
    /// Point-like facts and happenings.
    Event,
    /// Categories with no known tier; stacked below everything else.
    Unranked,
}

impl Tier {
    /// Returns the numeric sort rank (`0..=4`, or `99` for [`Tier::Unranked`]).
    pub fn rank(self) -> u8 {
        match self {
            Self::Period => 0,
            Self::State => 1,
            Self::Culture => 2,
            Self::Religion => 3,
            Self::Event => 4,
            Self::Unranked => 99,
        }
    }
}

/// The category of an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// A historical period.
    Period,
    /// A state or polity.
    State,
    /// A culture.
    Culture,
    /// A religion.
    Religion,
    /// A single event.
    Event,
    /// Legacy: European cultural era.
    EraEuropean,
    /// Legacy: Chinese dynasty era.
    EraChinese,
    /// Legacy: civilizations.
    Civilizations,
    /// Legacy: science and philosophy.
    Science,
    /// Legacy: technology.
    Technology,
    /// Legacy: politics.
    Political,
    /// Legacy: people.
    People,
    /// Legacy: books.
    Books,
    /// Any name not listed above.
    Unknown,
}

impl Category {
    /// All known categories, in persisted-name order.
    pub const KNOWN: [Self; 13] = [
        Self::Period,
        Self::State,
        Self::Culture,
        Self::Religion,
        Self::Event,
        Self::EraEuropean,
        Self::EraChinese,
        Self::Civilizations,
        Self::Science,
        Self::Technology,
        Self::Political,
        Self::People,
        Self::Books,
    ];

    /// Parses a persisted category name. Unrecognized names map to [`Category::Unknown`].
    pub fn parse(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|c| c.name() == name)
            .unwrap_or(Self::Unknown)
    }

    /// Returns the persisted name of this category.
    pub fn name(self) -> &'static str {
        match self {
            Self::Period => "period",
            Self::State => "state",
            Self::Culture => "culture",
            Self::Religion => "religion",
            Self::Event => "event",
            Self::EraEuropean => "era-european",
            Self::EraChinese => "era-chinese",
            Self::Civilizations => "civilizations",
            Self::Science => "science",
            Self::Technology => "technology",
            Self::Political => "political",
            Self::People => "people",
            Self::Books => "books",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the tier this category stacks into.
    pub fn tier(self) -> Tier {
        match self {
            Self::Period => Tier::Period,
            Self::State | Self::Civilizations => Tier::State,
            Self::Culture | Self::EraEuropean | Self::EraChinese => Tier::Culture,
            Self::Religion => Tier::Religion,
            Self::Event
            | Self::Science
            | Self::Technology
            | Self::Political
            | Self::People
            | Self::Books => Tier::Event,
            Self::Unknown => Tier::Unranked,
        }
    }

    /// Returns whether this is one of the `era-*` legacy categories.
    pub fn is_era(self) -> bool {
        matches!(self, Self::EraEuropean | Self::EraChinese)
    }

    /// Returns the fill color used for flags, bars and legend swatches.
    pub fn color(self) -> Color {
        match self {
            Self::Period => Color::from_rgba8(0x94, 0xa3, 0xb8, 0xff),
            Self::State => Color::from_rgba8(0x3b, 0x82, 0xf6, 0xff),
            Self::Culture => Color::from_rgba8(0xa8, 0x55, 0xf7, 0xff),
            Self::Religion => Color::from_rgba8(0xf5, 0x9e, 0x0b, 0xff),
            Self::People => Color::from_rgba8(0xec, 0x48, 0x99, 0xff),
            Self::Political => Color::from_rgba8(0xef, 0x44, 0x44, 0xff),
            Self::Technology => Color::from_rgba8(0x14, 0xb8, 0xa6, 0xff),
            Self::Civilizations => Color::from_rgba8(0x63, 0x66, 0xf1, 0xff),
            Self::Science => Color::from_rgba8(0x22, 0xc5, 0x5e, 0xff),
            Self::Books => Color::from_rgba8(0x84, 0x54, 0x2f, 0xff),
            Self::EraEuropean => Color::from_rgba8(0x0e, 0xa5, 0xe9, 0xff),
            Self::EraChinese => Color::from_rgba8(0xdc, 0x26, 0x26, 0xff),
            Self::Event | Self::Unknown => Color::from_rgba8(0x10, 0xb9, 0x81, 0xff),
        }
    }
}
