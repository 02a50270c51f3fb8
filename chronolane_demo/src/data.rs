// Copyright 2025 the Chronolane Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small sample of world history.

use chronolane_core::{Category, Event, EventId, Region, RowAssignments};

fn entity(id: &str, title: &str, year: i32, end: i32, kind: Category, region: Region) -> Event {
    Event::new(id, title, year, region)
        .with_end_year(end)
        .with_entity_type(kind)
}

fn fact(id: i64, title: &str, year: i32, region: Region) -> Event {
    Event::new(id, title, year, region)
}

pub(crate) fn sample_events() -> Vec<Event> {
    use Category::{Culture, Period, Religion, State};
    use Region::{Americas, Asia, EuropeMiddleEast, Pacific, SubsaharanAfrica};

    vec![
        Event::new("stone-age", "Stone Age", -300_000, EuropeMiddleEast)
            .with_end_year(-3300)
            .with_category(Period),
        Event::new("bronze-age", "Bronze Age", -3300, EuropeMiddleEast)
            .with_end_year(-1200)
            .with_category(Period),
        Event::new("classical", "Classical Antiquity", -800, EuropeMiddleEast)
            .with_end_year(500)
            .with_category(Period),
        entity("early-humans", "Early Humans", -300_000, -10_000, Culture, SubsaharanAfrica),
        entity("aksum", "Kingdom of Aksum", 100, 940, State, SubsaharanAfrica),
        entity("mali", "Mali Empire", 1235, 1670, State, SubsaharanAfrica),
        entity("sumer", "Sumerian City-States", -3500, -2300, State, Asia),
        entity("babylon", "Babylonian Empire", -1900, -1600, State, Asia),
        entity("song", "Song Dynasty", 960, 1279, State, Asia),
        entity("mongol", "Mongol Empire", 1206, 1368, State, Asia),
        entity("ming", "Ming Dynasty", 1368, 1644, State, Asia),
        entity("roc", "Republic of China", 1912, 1949, State, Asia),
        entity("buddhism", "Buddhism", -500, 2026, Religion, Asia),
        entity("confucianism", "Confucianism", -500, 2026, Religion, Asia),
        entity("achaemenid", "Achaemenid Empire", -550, -330, State, EuropeMiddleEast),
        entity("ancient-greece", "Ancient Greece", -800, -146, State, EuropeMiddleEast),
        entity("roman-republic", "Roman Republic", -509, -27, State, EuropeMiddleEast),
        entity("byzantine", "Byzantine Empire", 330, 1453, State, EuropeMiddleEast),
        entity("umayyad", "Umayyad Caliphate", 661, 750, State, EuropeMiddleEast),
        entity("ottoman", "Ottoman Empire", 1299, 1922, State, EuropeMiddleEast),
        entity("mesolithic", "Mesolithic", -10_000, -5000, Culture, EuropeMiddleEast),
        entity("iron-age", "Iron Age", -1200, -800, Culture, EuropeMiddleEast),
        entity("renaissance", "Renaissance", 1300, 1600, Culture, EuropeMiddleEast),
        entity("sci-rev", "Scientific Revolution", 1543, 1700, Culture, EuropeMiddleEast),
        entity("christianity", "Christianity", 30, 2026, Religion, EuropeMiddleEast),
        entity("islam", "Islam", 622, 2026, Religion, EuropeMiddleEast),
        entity("maya", "Maya Civilization", -2000, 1697, State, Americas),
        entity("aztec", "Aztec Empire", 1428, 1521, State, Americas),
        entity("inca", "Inca Empire", 1438, 1533, State, Americas),
        entity("lapita", "Lapita Culture", -1600, -500, Culture, Pacific),
        Event::new(200, "Homo sapiens emerge", -300_000, SubsaharanAfrica).with_end_year(-200_000),
        Event::new(207, "Writing invented", -3400, Asia).with_end_year(-3200),
        Event::new(205, "Domestication of animals", -10_000, Asia).with_end_year(-7000),
        fact(31, "Rice paddies & canals", -1000, Asia),
        fact(160, "Buddha achieves enlightenment", -528, Asia),
        fact(130, "Confucius dies", -479, Asia),
        fact(80, "Mongol Empire founded", 1206, Asia),
        fact(33, "Rice Green Revolution", 1960, Asia),
        fact(11, "Thales of Miletus born", -624, EuropeMiddleEast),
        fact(12, "Pythagoras born", -570, EuropeMiddleEast),
        fact(140, "Herodotus writes Histories", -440, EuropeMiddleEast),
        fact(150, "Plato founds the Academy", -387, EuropeMiddleEast),
        fact(17, "Alexander the Great born", -356, EuropeMiddleEast),
        fact(171, "Alexander dies", -323, EuropeMiddleEast),
        fact(2, "Jesus born", -4, EuropeMiddleEast),
        fact(5, "Muhammad born", 570, EuropeMiddleEast),
        fact(51, "Hijra to Medina", 622, EuropeMiddleEast),
        fact(19, "Copernicus publishes heliocentric model", 1543, EuropeMiddleEast),
        fact(24, "Newton publishes Principia", 1687, EuropeMiddleEast),
        Event::new(91, "Seven Years' War", 1756, EuropeMiddleEast).with_end_year(1763),
        fact(83, "French Revolution begins", 1789, EuropeMiddleEast),
        fact(300, "Voyages of Kupe", 925, Pacific),
        fact(301, "Columbus reaches the Caribbean", 1492, Americas),
    ]
}

/// Manual row pins, as a user would leave them after a few drags.
pub(crate) fn sample_assignments() -> RowAssignments {
    let mut rows = RowAssignments::new();
    rows.assign(Region::EuropeMiddleEast, EventId::Int(24), 9);
    rows.assign(Region::Asia, EventId::from("buddhism"), 7);
    rows
}
