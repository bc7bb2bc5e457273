//! Per-page views over the record stores.
//!
//! Each view owns its store and its explicit filter state. The rendering
//! layer calls the setters on user input and reads the derived sequences.

mod activities;
mod annual_plan;
mod gallery;

pub use activities::ActivitiesView;
pub use annual_plan::AnnualPlanView;
pub use gallery::{GalleryCard, GalleryView};
