//! Gallery view: filtered photo grid with infinite scroll and likes.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::content::GalleryContent;
use crate::gallery::{
    BatchSource, FeedSettings, FeedState, GallerySession, LikedSet, LoadOutcome, ScrollPosition,
    SharedSession, SimulatedSource, complete_load,
};
use crate::gather::{Facet, GALLERY_TAGS, GalleryFilter, gather};
use crate::models::GalleryImage;

/// One tile of the gallery grid.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryCard {
    #[serde(flatten)]
    pub image: GalleryImage,

    /// Stored likes plus this session's like.
    pub display_likes: u32,

    pub liked: bool,
}

/// Photo gallery state.
///
/// Images and feed flags sit behind a shared lock so a pending load can
/// append to them; dropping the view makes any pending load a no-op.
pub struct GalleryView {
    session: SharedSession,
    source: Arc<dyn BatchSource>,
    settings: FeedSettings,
    filter: GalleryFilter,
    liked: LikedSet,
}

impl GalleryView {
    pub fn new(
        initial: Vec<GalleryImage>,
        source: Arc<dyn BatchSource>,
        settings: FeedSettings,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(GallerySession::new(
                initial,
                settings.max_batches,
            ))),
            source,
            settings,
            filter: GalleryFilter::default(),
            liked: LikedSet::new(),
        }
    }

    /// Gallery backed by the simulated source replaying `content.additional`.
    pub fn simulated(content: GalleryContent, settings: FeedSettings) -> Self {
        let source = SimulatedSource::new(
            content.additional,
            settings.load_delay,
            settings.max_batches,
            settings.likes_jitter,
        );
        Self::new(content.initial, Arc::new(source), settings)
    }

    pub fn filter(&self) -> &GalleryFilter {
        &self.filter
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        debug!(query = %self.filter.query, "gallery search changed");
    }

    pub fn set_tag(&mut self, tag: impl Into<Facet>) {
        self.filter.tag = tag.into();
        debug!(tag = %self.filter.tag.as_str(), "gallery tag filter changed");
    }

    pub fn clear_filters(&mut self) {
        self.filter = GalleryFilter::default();
    }

    pub fn tag_options(&self) -> &'static [&'static str] {
        &GALLERY_TAGS
    }

    /// Flip the like on an image. Returns whether it is now liked.
    pub fn toggle_like(&mut self, id: u32) -> bool {
        self.liked.toggle(id)
    }

    pub fn liked(&self) -> &LikedSet {
        &self.liked
    }

    /// Snapshot of the pagination flags.
    pub fn feed(&self) -> FeedState {
        self.session.lock().feed.clone()
    }

    /// Number of images loaded so far, ignoring filters.
    pub fn image_count(&self) -> usize {
        self.session.lock().images.len()
    }

    /// Filtered tiles in load order.
    pub fn visible(&self) -> Vec<GalleryCard> {
        let session = self.session.lock();
        let result = gather(&session.images, &self.filter.predicate());

        result
            .items
            .into_iter()
            .map(|image| GalleryCard {
                image: image.clone(),
                display_likes: self.liked.display_likes(image),
                liked: self.liked.contains(image.id),
            })
            .collect()
    }

    /// Whether to show the "all content loaded" message.
    pub fn show_end_message(&self) -> bool {
        self.feed().all_loaded() && !self.visible().is_empty()
    }

    /// Scroll handler. Starts a background load when the grid end is close
    /// and no load is running; must be called inside a Tokio runtime.
    pub fn on_scroll(&self, position: ScrollPosition) -> Option<JoinHandle<LoadOutcome>> {
        if !position.near_end(self.settings.scroll_threshold) {
            return None;
        }

        let begun = self.session.lock().begin_load();
        let cursor = match begun {
            Ok(cursor) => cursor,
            Err(outcome) => {
                debug!(?outcome, "scroll trigger ignored");
                return None;
            }
        };

        let session = Arc::downgrade(&self.session);
        Some(tokio::spawn(complete_load(session, Arc::clone(&self.source), cursor)))
    }

    /// Load the next batch now, waiting for it to land.
    pub async fn load_more(&self) -> LoadOutcome {
        let begun = self.session.lock().begin_load();
        let cursor = match begun {
            Ok(cursor) => cursor,
            Err(outcome) => return outcome,
        };

        let session = Arc::downgrade(&self.session);
        complete_load(session, Arc::clone(&self.source), cursor).await
    }
}
