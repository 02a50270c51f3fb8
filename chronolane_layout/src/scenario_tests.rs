// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end layout scenarios and whole-pass properties.

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use chronolane_core::{
    Category, Event, EventId, ExperienceScale, Region, RowAssignments, ScaleMarker, Tier, Zoom,
};

use crate::{
    AxisSpec, EventShape, HeuristicLabelMeasurer, LayoutContext, PackSpec, PackedRegion,
    TimelineLayout,
};

fn int_id(id: &EventId) -> i64 {
    match id {
        EventId::Int(v) => *v,
        EventId::Str(_) => -1,
    }
}

fn ids(region: &PackedRegion<'_>) -> Vec<Vec<i64>> {
    region
        .rows()
        .iter()
        .map(|row| row.iter().map(|p| int_id(&p.event.id)).collect())
        .collect()
}

fn pack<'a>(events: &'a [Event], assignments: &RowAssignments) -> PackedRegion<'a> {
    let spec = AxisSpec::new();
    let axis = spec.instantiate(Zoom::default());
    PackSpec::default().pack_region(events, assignments, &axis, &HeuristicLabelMeasurer::default())
}

/// Deterministic event soup for property checks.
fn generated_events(count: i64) -> Vec<Event> {
    const CATEGORIES: [Category; 6] = [
        Category::Period,
        Category::State,
        Category::Culture,
        Category::Religion,
        Category::Event,
        Category::Unknown,
    ];
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move |bound: u64| {
        seed = seed
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (seed >> 33) % bound
    };
    (0..count)
        .map(|id| {
            let year = -3000 + i32::try_from(next(5000)).unwrap();
            let category = CATEGORIES[usize::try_from(next(6)).unwrap()];
            let event = Event::new(id, "Generated event", year, Region::Asia).with_category(category);
            match next(3) {
                0 => event,
                1 => event.with_end_year(year + i32::try_from(next(40)).unwrap() + 1),
                _ => event.with_end_year(year + i32::try_from(next(1500)).unwrap() + 1),
            }
        })
        .collect()
}

#[test]
fn scenario_a_point_and_interval_at_the_same_start() {
    let events = vec![
        Event::new(1, "A", -3000, Region::EuropeMiddleEast),
        Event::new(2, "B", -3000, Region::EuropeMiddleEast).with_end_year(-2900),
    ];
    let packed = pack(&events, &RowAssignments::new());
    // A's label footprint covers B's start, so B moves down a row.
    assert_eq!(ids(&packed), vec![vec![1], vec![2]]);
    let a = packed.rows()[0][0].geometry;
    let b = packed.rows()[1][0].geometry;
    assert_eq!(a.shape, EventShape::Point);
    assert!(!a.clears(&b, 5.0));
}

#[test]
fn scenario_b_experience_interpolation() {
    let markers = ExperienceScale::new(vec![
        ScaleMarker::new(0, 0.25),
        ScaleMarker::new(1300, 0.50),
        ScaleMarker::new(2026, 1.0),
    ])
    .unwrap();
    let spec = AxisSpec::new().with_markers(markers).with_width_base(3000.0);
    let axis = spec.instantiate(Zoom::default());

    let at_0 = axis.year_to_position(0);
    let at_650 = axis.year_to_position(650);
    let at_1300 = axis.year_to_position(1300);
    assert_eq!(at_0, 0.0);
    assert!((at_1300 - 1000.0).abs() < 1e-9);
    assert!((at_650 - (at_0 + at_1300) / 2.0).abs() < 1e-9);

    let events = vec![Event::new(1, "Mid", 650, Region::Asia)];
    let assignments = RowAssignments::new();
    let measurer = HeuristicLabelMeasurer::default();
    let ctx = LayoutContext::new(&events, &assignments, &spec, Zoom::default(), &measurer);
    let layout = TimelineLayout::compute(&ctx);
    let asia = layout.region(Region::Asia).unwrap();
    assert!((asia.events[0].rect.x0 - 500.0).abs() < 1e-9);
}

#[test]
fn scenario_c_period_and_state_never_share_a_row() {
    let events = vec![
        Event::new(1, "Bronze Age", -3300, Region::EuropeMiddleEast)
            .with_end_year(-1200)
            .with_category(Category::Period),
        Event::new(2, "Old Kingdom", -3300, Region::EuropeMiddleEast)
            .with_end_year(-1200)
            .with_category(Category::State),
    ];
    let packed = pack(&events, &RowAssignments::new());
    assert_eq!(ids(&packed), vec![vec![1], vec![2]]);
}

#[test]
fn scenario_d_two_pins_to_the_same_row_both_stay() {
    let state = |id: i64, year: i32| {
        Event::new(id, "State", year, Region::Americas)
            .with_end_year(year + 400)
            .with_category(Category::State)
    };
    let events = vec![state(1, 0), state(2, 100), state(3, 0), state(4, 100)];
    let mut assignments = RowAssignments::new();
    assignments.assign(Region::Americas, EventId::Int(1), 2);
    assignments.assign(Region::Americas, EventId::Int(2), 2);

    let packed = pack(&events, &assignments);
    // The two auto events overlap each other and fill rows 0 and 1.
    assert_eq!(ids(&packed), vec![vec![3], vec![4], vec![1, 2]]);
    assert!(packed.rows()[2].iter().all(|p| p.pinned));
}

#[test]
fn isolated_pins_collapse_onto_the_first_output_row() {
    let events = vec![
        Event::new(1, "One", 100, Region::Pacific).with_category(Category::Culture),
        Event::new(2, "Two", 110, Region::Pacific).with_category(Category::Culture),
    ];
    let mut assignments = RowAssignments::new();
    assignments.assign(Region::Pacific, EventId::Int(1), 2);
    assignments.assign(Region::Pacific, EventId::Int(2), 2);
    let packed = pack(&events, &assignments);
    assert_eq!(ids(&packed), vec![vec![1, 2]]);
}

#[test]
fn auto_events_in_a_row_never_overlap() {
    let events = generated_events(120);
    let packed = pack(&events, &RowAssignments::new());
    for row in packed.rows() {
        let auto: Vec<_> = row
            .iter()
            .filter(|p| !p.pinned && p.event.tier() != Tier::Period)
            .collect();
        for (i, a) in auto.iter().enumerate() {
            for b in &auto[i + 1..] {
                assert!(
                    a.geometry.clears(&b.geometry, 5.0),
                    "{} and {} overlap",
                    a.event.id,
                    b.event.id
                );
            }
        }
    }
}

#[test]
fn lower_tiers_sit_strictly_above_higher_tiers() {
    let events = generated_events(120);
    let packed = pack(&events, &RowAssignments::new());
    let tier_rows = |tier: Tier| -> Vec<usize> {
        packed
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|p| p.event.tier() == tier))
            .map(|(i, _)| i)
            .collect()
    };
    let tiers = [
        Tier::Period,
        Tier::State,
        Tier::Culture,
        Tier::Religion,
        Tier::Event,
        Tier::Unranked,
    ];
    for (i, lower) in tiers.iter().enumerate() {
        for higher in &tiers[i + 1..] {
            let (lo, hi) = (tier_rows(*lower), tier_rows(*higher));
            if let (Some(lo_max), Some(hi_min)) = (lo.iter().max(), hi.iter().min()) {
                assert!(lo_max < hi_min, "{lower:?} reaches below {higher:?}");
            }
        }
    }
}

#[test]
fn manual_pins_always_land_on_their_row() {
    // Row 0 always receives a member, so dropping empty rows never renumbers it.
    let mut events = generated_events(60);
    for e in &mut events {
        e.region = Region::SubsaharanAfrica;
    }
    let mut assignments = RowAssignments::new();
    for id in [3_i64, 17, 42] {
        assignments.assign(Region::SubsaharanAfrica, EventId::Int(id), 0);
    }
    let packed = pack(&events, &assignments);
    for id in [3, 17, 42] {
        assert_eq!(packed.row_of(&EventId::Int(id)), Some(0));
    }
}

#[test]
fn layout_is_idempotent() {
    let events = generated_events(80);
    let mut assignments = RowAssignments::new();
    assignments.assign(Region::Asia, EventId::Int(5), 4);
    let axis = AxisSpec::new();
    let measurer = HeuristicLabelMeasurer::default();
    let ctx = LayoutContext::new(&events, &assignments, &axis, Zoom::new(3.0), &measurer);
    assert_eq!(TimelineLayout::compute(&ctx), TimelineLayout::compute(&ctx));
}
