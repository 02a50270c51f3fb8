// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timeline events.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::{Category, Region, Tier};

/// Stable identifier of an event.
///
/// Built-in events use integers; events derived from entities use string ids such as
/// `"entity-rome"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventId {
    /// Numeric id.
    Int(i64),
    /// String id.
    Str(Arc<str>),
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for EventId {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self::Str(Arc::from(value))
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// A time-stamped entity, period or fact.
///
/// Years use astronomical numbering: negative years are BCE and `0` is 1 CE.
/// `end_year`, when present, must not be earlier than `year`; an event whose end year equals
/// its start year is a point event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    /// Identifier, unique within the event collection.
    pub id: EventId,
    /// Display title.
    pub title: String,
    /// Start year.
    pub year: i32,
    /// Optional end year.
    pub end_year: Option<i32>,
    /// Display category.
    pub category: Category,
    /// Entity type, which takes precedence over `category` for tiering when set.
    pub entity_type: Option<Category>,
    /// Region lane.
    pub region: Region,
}

impl Event {
    /// Creates a point event in the [`Category::Event`] category.
    pub fn new(id: impl Into<EventId>, title: impl Into<String>, year: i32, region: Region) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            end_year: None,
            category: Category::Event,
            entity_type: None,
            region,
        }
    }

    /// Sets the end year.
    pub fn with_end_year(mut self, end_year: i32) -> Self {
        self.end_year = Some(end_year);
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Sets the entity type.
    pub fn with_entity_type(mut self, entity_type: Category) -> Self {
        self.entity_type = Some(entity_type);
        self
    }

    /// Returns the end year, or the start year for point events.
    pub fn end_year_or_start(&self) -> i32 {
        self.end_year.unwrap_or(self.year)
    }

    /// Returns whether this event spans a duration (has an end year different from its start).
    pub fn has_span(&self) -> bool {
        self.end_year.is_some_and(|end| end != self.year)
    }

    /// Returns the duration in years (`0` for point events).
    pub fn duration_years(&self) -> i64 {
        i64::from(self.end_year_or_start()) - i64::from(self.year)
    }

    /// Returns the category that decides stacking and color: the entity type when present,
    /// otherwise the category.
    pub fn effective_category(&self) -> Category {
        self.entity_type.unwrap_or(self.category)
    }

    /// Returns the tier used for vertical stacking.
    pub fn tier(&self) -> Tier {
        self.effective_category().tier()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use super::*;

    #[test]
    fn equal_end_year_is_a_point() {
        let e = Event::new(1, "Coronation", 800, Region::EuropeMiddleEast).with_end_year(800);
        assert!(!e.has_span());
        assert_eq!(e.duration_years(), 0);
        let e = e.with_end_year(814);
        assert!(e.has_span());
        assert_eq!(e.duration_years(), 14);
    }

    #[test]
    fn entity_type_overrides_category_tier() {
        let e = Event::new("entity-rome", "Rome", -753, Region::EuropeMiddleEast)
            .with_category(Category::Civilizations);
        assert_eq!(e.tier(), Tier::State);
        let e = e.with_entity_type(Category::Period);
        assert_eq!(e.effective_category(), Category::Period);
        assert_eq!(e.tier(), Tier::Period);
        let e = e.with_entity_type(Category::Unknown);
        assert_eq!(e.tier(), Tier::Unranked);
    }

    #[test]
    fn ids_display_without_decoration() {
        assert_eq!(EventId::from(42).to_string(), "42");
        assert_eq!(EventId::from("entity-rome").to_string(), "entity-rome");
    }
}
