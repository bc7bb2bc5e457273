//! Gather query engine types.
//!
//! Provides the explicit filter state each view keeps:
//! - Facet: one filter dimension, with the "All" sentinel
//! - EventFilter / GalleryFilter / ActivityFilter: per-view filter state
//! - GatherResult: ordered query output with counts

use serde::{Deserialize, Serialize};

/// Value of a single facet selector.
///
/// Serializes as a plain string; `"All"` (any case) or an empty string
/// means the facet imposes no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Facet {
    #[default]
    All,
    Only(String),
}

impl Facet {
    /// Label of the "no constraint" option.
    pub const SENTINEL: &'static str = "All";

    /// Whether this facet is unconstrained.
    pub fn is_all(&self) -> bool {
        matches!(self, Facet::All)
    }

    /// Selector label as shown in the filter bar.
    pub fn as_str(&self) -> &str {
        match self {
            Facet::All => Self::SENTINEL,
            Facet::Only(value) => value,
        }
    }

    /// Case-insensitive equality against one record value.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted.to_lowercase() == value.to_lowercase(),
        }
    }
}

impl From<&str> for Facet {
    fn from(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case(Self::SENTINEL) {
            Facet::All
        } else {
            Facet::Only(value.to_string())
        }
    }
}

impl From<String> for Facet {
    fn from(value: String) -> Self {
        Facet::from(value.as_str())
    }
}

impl From<Facet> for String {
    fn from(facet: Facet) -> Self {
        facet.as_str().to_string()
    }
}

/// Filter state of the annual plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFilter {
    /// Free-text search.
    #[serde(default)]
    pub query: String,

    /// Event type selector.
    #[serde(default, rename = "type")]
    pub event_type: Facet,

    /// Month selector.
    #[serde(default)]
    pub month: Facet,
}

impl EventFilter {
    /// Whether this state returns the full store.
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty() && self.event_type.is_all() && self.month.is_all()
    }
}

/// Filter state of the photo gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryFilter {
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub tag: Facet,
}

impl GalleryFilter {
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty() && self.tag.is_all()
    }
}

/// Filter state of the activities catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityFilter {
    #[serde(default)]
    pub category: Facet,
}

/// Result of running a predicate over a record store.
///
/// Items borrow from the store in their original relative order.
#[derive(Debug, Clone, Serialize)]
pub struct GatherResult<'a, R> {
    /// Matching records.
    pub items: Vec<&'a R>,

    /// Size of the store the query ran against.
    pub total: usize,
}

impl<'a, R> GatherResult<'a, R> {
    /// Create a result over a store of `total` records.
    pub fn new(items: Vec<&'a R>, total: usize) -> Self {
        Self { items, total }
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// No record matched; views show the empty state and offer to clear filters.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Result count line, e.g. "Showing 3 of 8 adventures".
    pub fn summary(&self, noun: &str) -> String {
        format!("Showing {} of {} {noun}", self.items.len(), self.total)
    }
}
