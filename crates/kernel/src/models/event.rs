//! Adventure event model.
//!
//! Events make up the annual plan. The `month` field drives timeline
//! ordering through [`MONTH_ORDER`]; `dates` is a display label only and
//! is never parsed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Operating season, in calendar order.
pub const MONTH_ORDER: [&str; 9] = [
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Position of `month` in [`MONTH_ORDER`], or `None` if it is outside the season.
pub fn month_rank(month: &str) -> Option<usize> {
    MONTH_ORDER
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month.trim()))
}

/// Kind of adventure.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Hiking,
    Expedition,
    Water,
    Trail,
    Event,
}

impl EventType {
    /// Every event type, in catalog order.
    pub const ALL: [EventType; 5] = [
        EventType::Hiking,
        EventType::Expedition,
        EventType::Water,
        EventType::Trail,
        EventType::Event,
    ];

    /// Lowercase label used in content files and type filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Hiking => "hiking",
            EventType::Expedition => "expedition",
            EventType::Water => "water",
            EventType::Trail => "trail",
            EventType::Event => "event",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map position of an event, in degrees.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}°N, {:.4}°E", self.lat, self.lng)
    }
}

/// A planned club adventure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdventureEvent {
    /// Stable identifier.
    pub id: String,

    /// Season month name (e.g. "April").
    pub month: String,

    pub title: String,

    /// Day-of-month label: "04", "10–14", "30 Apr – 02 May" or "TBC".
    pub dates: String,

    /// Length label such as "3D2N".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    pub location: String,

    #[serde(default)]
    pub description: String,

    #[serde(rename = "type")]
    pub event_type: EventType,

    pub confirmed: bool,

    pub coordinates: Coordinates,
}

impl AdventureEvent {
    /// Status badge text.
    pub fn status_label(&self) -> &'static str {
        if self.confirmed {
            "Confirmed"
        } else {
            "Tentative"
        }
    }

    /// Full date line for the detail view, e.g. "May 30 Apr – 02 May, 2026".
    pub fn date_label(&self, season_year: i32) -> String {
        format!("{} {}, {season_year}", self.month, self.dates)
    }
}
