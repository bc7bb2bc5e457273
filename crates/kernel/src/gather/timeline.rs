//! Timeline grouping.
//!
//! Events are bucketed by month name and the buckets ordered by
//! [`MONTH_ORDER`]. Season months are keyed by their table spelling, so
//! "april" and "April" share a group. Months outside the table keep their
//! own spelling and follow December in the order they first appear.
//! Nothing here looks at `dates`.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::{AdventureEvent, MONTH_ORDER, month_rank};

/// Events sharing one month, in their filtered order.
#[derive(Debug, Clone, Serialize)]
pub struct MonthGroup<'a> {
    pub month: &'a str,
    pub events: Vec<&'a AdventureEvent>,
}

/// Group events by month in season order.
pub fn group_by_month<'a, I>(events: I) -> Vec<MonthGroup<'a>>
where
    I: IntoIterator<Item = &'a AdventureEvent>,
{
    let mut groups: Vec<MonthGroup<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for event in events {
        let month = month_rank(&event.month)
            .map_or(event.month.as_str(), |rank| MONTH_ORDER[rank]);
        match index.get(month) {
            Some(&slot) => groups[slot].events.push(event),
            None => {
                index.insert(month, groups.len());
                groups.push(MonthGroup {
                    month,
                    events: vec![event],
                });
            }
        }
    }

    // Stable: unknown months keep first-occurrence order.
    groups.sort_by_key(|group| month_rank(group.month).unwrap_or(MONTH_ORDER.len()));
    groups
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, EventType};

    fn event(id: &str, month: &str) -> AdventureEvent {
        AdventureEvent {
            id: id.to_string(),
            month: month.to_string(),
            title: id.to_string(),
            dates: "TBC".to_string(),
            duration: None,
            location: String::new(),
            description: String::new(),
            event_type: EventType::Hiking,
            confirmed: true,
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        }
    }

    fn months<'a>(groups: &[MonthGroup<'a>]) -> Vec<&'a str> {
        groups.iter().map(|g| g.month).collect()
    }

    #[test]
    fn groups_follow_season_table() {
        let events = [
            event("a", "October"),
            event("b", "April"),
            event("c", "December"),
            event("d", "June"),
        ];

        let groups = group_by_month(&events);
        assert_eq!(months(&groups), ["April", "June", "October", "December"]);
    }

    #[test]
    fn unknown_months_trail_in_first_seen_order() {
        let events = [
            event("a", "Unknown"),
            event("b", "December"),
            event("c", "January"),
            event("d", "April"),
            event("e", "Unknown"),
        ];

        let groups = group_by_month(&events);
        assert_eq!(months(&groups), ["April", "December", "Unknown", "January"]);

        let unknown: Vec<&str> = groups[2].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(unknown, ["a", "e"]);
    }

    #[test]
    fn month_spelling_variants_share_a_group() {
        let events = [
            event("a", "april"),
            event("b", "May"),
            event("c", " APRIL "),
            event("d", "April"),
        ];

        let groups = group_by_month(&events);
        assert_eq!(months(&groups), ["April", "May"]);

        let april: Vec<&str> = groups[0].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(april, ["a", "c", "d"]);
    }

    #[test]
    fn events_keep_relative_order_within_month() {
        let events = [event("x", "May"), event("y", "April"), event("z", "May")];

        let groups = group_by_month(&events);
        let may: Vec<&str> = groups[1].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(may, ["x", "z"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        let none: Vec<AdventureEvent> = Vec::new();
        assert!(group_by_month(&none).is_empty());
    }
}
