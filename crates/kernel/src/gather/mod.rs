//! Gather query engine module.
//!
//! This module provides:
//! - Predicate: AND-combined record filters built from view filter state
//! - gather: stable, non-mutating filtering over a record store
//! - group_by_month: table-ordered timeline grouping
//! - Facet options and plan statistics
//! - Types: Facet, EventFilter, GalleryFilter, ActivityFilter, GatherResult

mod facets;
mod predicate;
mod query;
mod timeline;
pub mod types;

pub use facets::{
    GALLERY_TAGS, PlanStats, activity_category_options, event_type_options, facet_options,
    month_options,
};
pub use predicate::{FacetFilter, Predicate, RecordFilter, Searchable, TextSearch};
pub use query::gather;
pub use timeline::{MonthGroup, group_by_month};
pub use types::{ActivityFilter, EventFilter, Facet, GalleryFilter, GatherResult};
