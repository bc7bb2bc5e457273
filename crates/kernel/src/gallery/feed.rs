//! Infinite-scroll feed.
//!
//! Scrolling near the end of the gallery starts a load. Only one load runs
//! at a time and the feed stops for good once the source reports the end
//! of data or the batch cap is reached. A failed load keeps the feed open
//! so the next trigger retries.
//!
//! The session is shared with an in-flight load through a `Weak` handle;
//! if the gallery is dropped while the batch is pending, the batch is
//! thrown away.

use std::sync::{Arc, Weak};
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::source::{BatchPage, BatchSource, Cursor};
use crate::error::AppResult;
use crate::models::GalleryImage;

/// Default distance from the end of the grid that triggers a load.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 500.0;

/// Default artificial latency of the simulated source.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(800);

/// Default batch cap, initial batch included.
pub const DEFAULT_MAX_BATCHES: u32 = 2;

/// Default upper bound (exclusive) of the cosmetic likes bump.
pub const DEFAULT_LIKES_JITTER: u32 = 100;

/// Tuning for the gallery feed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedSettings {
    pub scroll_threshold: f64,
    pub load_delay: Duration,
    pub max_batches: u32,
    pub likes_jitter: u32,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            load_delay: DEFAULT_LOAD_DELAY,
            max_batches: DEFAULT_MAX_BATCHES,
            likes_jitter: DEFAULT_LIKES_JITTER,
        }
    }
}

/// Layout measurements reported by the scroll handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPosition {
    /// Bottom edge of the gallery container, relative to the viewport top.
    pub container_bottom: f64,

    /// Viewport height.
    pub viewport_height: f64,
}

impl ScrollPosition {
    /// Whether the container's end is within `threshold` of the viewport bottom.
    pub fn near_end(&self, threshold: f64) -> bool {
        self.container_bottom - self.viewport_height < threshold
    }
}

/// Pagination flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedState {
    /// Batches present, starting at 1 for the initial batch.
    pub current_batch: u32,
    pub has_more: bool,
    pub loading: bool,
    /// Message of the last failed load, cleared on the next success.
    pub last_error: Option<String>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            current_batch: 1,
            has_more: true,
            loading: false,
            last_error: None,
        }
    }
}

impl FeedState {
    /// A trigger now would start a load.
    pub fn can_load(&self) -> bool {
        self.has_more && !self.loading
    }

    /// Feed is finished and idle.
    pub fn all_loaded(&self) -> bool {
        !self.has_more && !self.loading
    }
}

/// What a load trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// A batch of this many images was appended.
    Appended(usize),
    /// Another load was in flight; nothing happened.
    Busy,
    /// The feed had already ended; nothing happened.
    Exhausted,
    /// The source failed; the feed stays open for a retry.
    Failed,
    /// The gallery was dropped before the batch arrived.
    Discarded,
}

/// Gallery images plus feed flags, shared with in-flight loads.
#[derive(Debug, Clone)]
pub struct GallerySession {
    pub images: Vec<GalleryImage>,
    pub feed: FeedState,
    /// Batch cap, initial batch included.
    max_batches: u32,
}

impl GallerySession {
    /// Session over the initial batch. A cap of 1 or less closes the feed
    /// before any load.
    pub fn new(images: Vec<GalleryImage>, max_batches: u32) -> Self {
        let feed = FeedState::default();
        Self {
            images,
            feed: FeedState {
                has_more: feed.current_batch < max_batches,
                ..feed
            },
            max_batches,
        }
    }

    /// Start a load, returning the cursor to fetch.
    ///
    /// Refuses with [`LoadOutcome::Busy`] or [`LoadOutcome::Exhausted`]
    /// without changing any state.
    pub fn begin_load(&mut self) -> Result<Cursor, LoadOutcome> {
        if self.feed.loading {
            return Err(LoadOutcome::Busy);
        }
        if !self.feed.has_more {
            return Err(LoadOutcome::Exhausted);
        }

        self.feed.loading = true;
        Ok(Cursor {
            batch: self.feed.current_batch,
            offset: self.images.len(),
        })
    }

    /// Apply the result of a load started with [`Self::begin_load`].
    pub fn finish_load(&mut self, result: AppResult<BatchPage>) -> LoadOutcome {
        self.feed.loading = false;

        match result {
            Ok(page) => {
                let appended = page.items.len();
                self.images.extend(page.items);
                self.feed.current_batch += 1;
                self.feed.last_error = None;
                if page.next.is_none() || self.feed.current_batch >= self.max_batches {
                    self.feed.has_more = false;
                }

                debug!(
                    batch = self.feed.current_batch,
                    appended,
                    total = self.images.len(),
                    has_more = self.feed.has_more,
                    "gallery batch appended"
                );
                LoadOutcome::Appended(appended)
            }
            Err(e) => {
                warn!(error = %e, batch = self.feed.current_batch, "gallery batch failed");
                self.feed.last_error = Some(e.to_string());
                LoadOutcome::Failed
            }
        }
    }
}

/// Shared handle to a gallery session.
pub type SharedSession = Arc<Mutex<GallerySession>>;

/// Fetch the batch at `cursor` and apply it if the session still exists.
///
/// The session lock is only taken after the fetch completes.
pub async fn complete_load(
    session: Weak<Mutex<GallerySession>>,
    source: Arc<dyn BatchSource>,
    cursor: Cursor,
) -> LoadOutcome {
    let result = source.fetch(cursor).await;

    let Some(session) = session.upgrade() else {
        debug!(
            batch = cursor.batch,
            "gallery dropped before batch arrived; discarding"
        );
        return LoadOutcome::Discarded;
    };

    let mut session = session.lock();
    session.finish_load(result)
}
