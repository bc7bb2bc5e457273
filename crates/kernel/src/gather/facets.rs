//! Facet option lists and catalog statistics.

use std::collections::HashSet;

use serde::Serialize;

use super::types::Facet;
use crate::models::{ActivityCategory, AdventureEvent};

/// Tag selector shown above the gallery grid.
pub const GALLERY_TAGS: [&str; 11] = [
    Facet::SENTINEL,
    "Mountain",
    "Beach",
    "Jungle",
    "Waterfall",
    "Camping",
    "Hiking",
    "Group",
    "Night",
    "Sunrise",
    "Sunset",
];

/// Selector options: the sentinel, then each distinct value in first-seen order.
pub fn facet_options<'a, R, I>(records: &'a [R], extract: impl Fn(&'a R) -> I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    let mut options = vec![Facet::SENTINEL.to_string()];

    for value in records.iter().flat_map(extract) {
        if seen.insert(value) {
            options.push(value.to_string());
        }
    }

    options
}

/// Type selector options for the annual plan.
pub fn event_type_options(events: &[AdventureEvent]) -> Vec<String> {
    facet_options(events, |event| [event.event_type.as_str()])
}

/// Month selector options for the annual plan.
pub fn month_options(events: &[AdventureEvent]) -> Vec<String> {
    facet_options(events, |event| [event.month.as_str()])
}

/// Category selector options for the activities catalog.
pub fn activity_category_options() -> Vec<String> {
    std::iter::once(Facet::SENTINEL)
        .chain(ActivityCategory::ALL.iter().map(|c| c.as_str()))
        .map(str::to_string)
        .collect()
}

/// Headline numbers for the annual plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanStats {
    pub total: usize,
    pub confirmed: usize,
    pub event_types: usize,
    pub months_covered: usize,
}

impl PlanStats {
    pub fn from_events(events: &[AdventureEvent]) -> Self {
        let event_types: HashSet<_> = events.iter().map(|e| e.event_type).collect();
        let months: HashSet<&str> = events.iter().map(|e| e.month.as_str()).collect();

        Self {
            total: events.len(),
            confirmed: events.iter().filter(|e| e.confirmed).count(),
            event_types: event_types.len(),
            months_covered: months.len(),
        }
    }
}
