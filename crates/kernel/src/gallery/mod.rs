//! Photo gallery support.
//!
//! This module provides:
//! - GallerySession / FeedState: images plus infinite-scroll flags
//! - BatchSource: cursor-based batch fetching, with a simulated implementation
//! - LikedSet: session-only like overlay

mod feed;
mod likes;
mod source;

pub use feed::{
    DEFAULT_LIKES_JITTER, DEFAULT_LOAD_DELAY, DEFAULT_MAX_BATCHES, DEFAULT_SCROLL_THRESHOLD,
    FeedSettings, FeedState, GallerySession, LoadOutcome, ScrollPosition, SharedSession,
    complete_load,
};
pub use likes::LikedSet;
pub use source::{BatchPage, BatchSource, Cursor, SimulatedSource};
