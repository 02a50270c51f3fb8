// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible-range filtering and summary statistics.

extern crate alloc;

use alloc::vec::Vec;

use crate::{Event, YearRange};

/// Returns the events that overlap `range`.
///
/// An event is visible when it ends at or after the range start and starts at or before the
/// range end. Input order is preserved.
pub fn visible_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    range: YearRange,
) -> Vec<&'a Event> {
    events
        .into_iter()
        .filter(|e| e.end_year_or_start() >= range.min() && e.year <= range.max())
        .collect()
}

/// Returns the `(first, last)` year covered by `events`, clipped to `range`.
///
/// Returns `None` for an empty event list.
pub fn time_span<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    range: YearRange,
) -> Option<(i32, i32)> {
    let mut span: Option<(i32, i32)> = None;
    for e in events {
        let (lo, hi) = span.unwrap_or((e.year, e.end_year_or_start()));
        span = Some((lo.min(e.year), hi.max(e.end_year_or_start())));
    }
    span.map(|(lo, hi)| (lo.max(range.min()), hi.min(range.max())))
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::{EventId, Region};

    #[test]
    fn events_overlapping_the_edges_stay_visible() {
        let range = YearRange::new(-1000, 1000).unwrap();
        let events = vec![
            Event::new(1, "before", -5000, Region::Asia).with_end_year(-2000),
            Event::new(2, "straddles", -1500, Region::Asia).with_end_year(-900),
            Event::new(3, "inside", 0, Region::Asia),
            Event::new(4, "at end", 1000, Region::Asia),
            Event::new(5, "after", 1200, Region::Asia),
        ];
        let visible: Vec<_> = visible_events(&events, range)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();
        assert_eq!(visible, vec![EventId::Int(2), EventId::Int(3), EventId::Int(4)]);
    }

    #[test]
    fn time_span_is_clipped() {
        let range = YearRange::new(-1000, 1000).unwrap();
        let events = vec![
            Event::new(1, "a", -1500, Region::Asia).with_end_year(-900),
            Event::new(2, "b", 500, Region::Asia).with_end_year(1400),
        ];
        assert_eq!(time_span(&events, range), Some((-1000, 1000)));
        assert_eq!(time_span(&events[1..], range), Some((500, 1000)));
        assert_eq!(time_span(&Vec::<Event>::new(), range), None);
    }
}
