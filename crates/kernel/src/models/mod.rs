//! Catalog records.

pub mod activity;
pub mod event;
pub mod image;

pub use activity::{Activity, ActivityCategory, Difficulty};
pub use event::{AdventureEvent, Coordinates, EventType, MONTH_ORDER, month_rank};
pub use image::GalleryImage;
