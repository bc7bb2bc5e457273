//! Predicate builder.
//!
//! Turns filter state into a single matcher. A predicate is a list of
//! record filters combined with AND; inactive constraints (empty query,
//! "All" facets) add no filter at all, so the identity state builds an
//! empty predicate.

use super::types::{ActivityFilter, EventFilter, Facet, GalleryFilter};
use crate::models::{Activity, AdventureEvent, GalleryImage};

/// Record fields visible to free-text search.
pub trait Searchable {
    /// Fields matched by case-insensitive substring.
    fn text_fields(&self) -> Vec<&str>;

    /// Category labels matched by case-insensitive equality.
    fn labels(&self) -> Vec<&str>;
}

impl Searchable for AdventureEvent {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.location.as_str(),
            self.description.as_str(),
        ]
    }

    fn labels(&self) -> Vec<&str> {
        vec![self.event_type.as_str()]
    }
}

impl Searchable for GalleryImage {
    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.location.as_str(),
        ]
    }

    fn labels(&self) -> Vec<&str> {
        self.tags.iter().map(String::as_str).collect()
    }
}

/// One constraint over a record.
pub trait RecordFilter<R>: Send + Sync {
    /// Filter name for logging.
    fn name(&self) -> &str;

    /// Whether the record satisfies this constraint.
    fn matches(&self, record: &R) -> bool;
}

/// AND-combination of record filters.
pub struct Predicate<R> {
    filters: Vec<Box<dyn RecordFilter<R>>>,
}

impl<R: 'static> Predicate<R> {
    /// Create a predicate that matches everything.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter.
    pub fn add<F: RecordFilter<R> + 'static>(mut self, filter: F) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Constrain `facet` against the values `extract` yields for a record.
    /// An "All" facet adds nothing.
    pub fn facet(
        self,
        name: &'static str,
        facet: &Facet,
        extract: fn(&R) -> Vec<&str>,
    ) -> Self {
        match facet {
            Facet::All => self,
            Facet::Only(_) => self.add(FacetFilter {
                name,
                facet: facet.clone(),
                extract,
            }),
        }
    }

    /// Whether every filter accepts the record.
    pub fn matches(&self, record: &R) -> bool {
        self.filters.iter().all(|filter| filter.matches(record))
    }

    /// No active constraints.
    pub fn is_identity(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the active filters, in insertion order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|filter| filter.name()).collect()
    }
}

impl<R: Searchable + 'static> Predicate<R> {
    /// Add free-text search. A blank query adds nothing.
    pub fn search(self, query: &str) -> Self {
        match TextSearch::new(query) {
            Some(search) => self.add(search),
            None => self,
        }
    }
}

impl<R: 'static> Default for Predicate<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Free-text search across [`Searchable`] fields.
pub struct TextSearch {
    needle: String,
}

impl TextSearch {
    /// Returns `None` for a blank query.
    pub fn new(query: &str) -> Option<Self> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            None
        } else {
            Some(Self { needle })
        }
    }
}

impl<R: Searchable> RecordFilter<R> for TextSearch {
    fn name(&self) -> &str {
        "search"
    }

    fn matches(&self, record: &R) -> bool {
        record
            .text_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
            || record
                .labels()
                .iter()
                .any(|label| label.to_lowercase() == self.needle)
    }
}

/// Equality constraint on one facet.
pub struct FacetFilter<R> {
    name: &'static str,
    facet: Facet,
    extract: fn(&R) -> Vec<&str>,
}

impl<R> RecordFilter<R> for FacetFilter<R> {
    fn name(&self) -> &str {
        self.name
    }

    fn matches(&self, record: &R) -> bool {
        (self.extract)(record)
            .into_iter()
            .any(|value| self.facet.matches(value))
    }
}

impl EventFilter {
    /// Build the annual plan predicate.
    pub fn predicate(&self) -> Predicate<AdventureEvent> {
        Predicate::<AdventureEvent>::new()
            .search(&self.query)
            .facet("type", &self.event_type, |event| {
                vec![event.event_type.as_str()]
            })
            .facet("month", &self.month, |event| vec![event.month.as_str()])
    }
}

impl GalleryFilter {
    /// Build the gallery predicate.
    pub fn predicate(&self) -> Predicate<GalleryImage> {
        Predicate::<GalleryImage>::new()
            .search(&self.query)
            .facet("tag", &self.tag, |image| {
                image.tags.iter().map(String::as_str).collect()
            })
    }
}

impl ActivityFilter {
    /// Build the activities predicate.
    pub fn predicate(&self) -> Predicate<Activity> {
        Predicate::<Activity>::new().facet("category", &self.category, |activity| {
            vec![activity.category.as_str()]
        })
    }
}
