//! Batch sources for the gallery feed.
//!
//! A source takes a cursor and returns one page of images plus the cursor
//! for the following page; `next: None` marks the end of data. The
//! simulated source replays a fixed template after an artificial delay.

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AppResult, KernelError};
use crate::models::GalleryImage;

/// Position of the next page to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    /// Batches already present, the initial one included.
    pub batch: u32,

    /// Images already present; new ids continue from here.
    pub offset: usize,
}

/// One fetched page.
#[derive(Debug, Clone)]
pub struct BatchPage {
    pub items: Vec<GalleryImage>,

    /// Cursor for the following page, `None` at end of data.
    pub next: Option<Cursor>,
}

/// Supplier of additional gallery batches.
#[async_trait]
pub trait BatchSource: Send + Sync {
    /// Fetch the page at `cursor`.
    async fn fetch(&self, cursor: Cursor) -> AppResult<BatchPage>;
}

/// Source that re-issues a static template with fresh ids.
pub struct SimulatedSource {
    template: Vec<GalleryImage>,
    delay: Duration,
    max_batches: u32,
    likes_jitter: u32,
}

impl SimulatedSource {
    /// Create a simulated source.
    ///
    /// `max_batches` counts the initial batch, so `2` allows one append.
    pub fn new(
        template: Vec<GalleryImage>,
        delay: Duration,
        max_batches: u32,
        likes_jitter: u32,
    ) -> Self {
        Self {
            template,
            delay,
            max_batches,
            likes_jitter,
        }
    }
}

#[async_trait]
impl BatchSource for SimulatedSource {
    async fn fetch(&self, cursor: Cursor) -> AppResult<BatchPage> {
        tokio::time::sleep(self.delay).await;

        let items = renumber(&self.template, cursor.offset, self.likes_jitter)?;
        let loaded = cursor.batch.saturating_add(1);
        let next = (loaded < self.max_batches).then(|| Cursor {
            batch: loaded,
            offset: cursor.offset + items.len(),
        });

        debug!(
            batch = loaded,
            offset = cursor.offset,
            items = items.len(),
            "simulated batch ready"
        );

        Ok(BatchPage { items, next })
    }
}

/// Copy `template` with ids continuing after `offset` and likes bumped by
/// a random amount below `jitter`.
///
/// Fails if an id would not fit in `u32`; likes saturate.
fn renumber(
    template: &[GalleryImage],
    offset: usize,
    jitter: u32,
) -> AppResult<Vec<GalleryImage>> {
    let mut rng = rand::thread_rng();

    template
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let id = offset
                .checked_add(i + 1)
                .and_then(|id| u32::try_from(id).ok())
                .ok_or_else(|| {
                    KernelError::Fetch(format!("image id after {offset} out of range"))
                })?;
            let bump = if jitter > 0 {
                rng.gen_range(0..jitter)
            } else {
                0
            };
            Ok(GalleryImage {
                id,
                likes: image.likes.saturating_add(bump),
                ..image.clone()
            })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    fn template() -> Vec<GalleryImage> {
        ContentStore::load().unwrap().gallery.additional
    }

    #[test]
    fn renumber_continues_ids_from_offset() {
        let batch = renumber(&template(), 8, 0).unwrap();

        let ids: Vec<u32> = batch.iter().map(|image| image.id).collect();
        assert_eq!(ids, [9, 10]);
        assert_eq!(batch[0].likes, 267);
        assert_eq!(batch[1].title, "Island Hopping");
    }

    #[test]
    fn renumber_jitter_stays_below_bound() {
        let source = template();
        for _ in 0..20 {
            let batch = renumber(&source, 8, 100).unwrap();
            for (fresh, original) in batch.iter().zip(&source) {
                assert!(fresh.likes >= original.likes);
                assert!(fresh.likes < original.likes + 100);
            }
        }
    }

    #[test]
    fn renumber_rejects_ids_past_u32() {
        let err = renumber(&template(), u32::MAX as usize, 0).unwrap_err();
        assert!(matches!(err, KernelError::Fetch(_)));
    }

    #[test]
    fn renumber_saturates_likes() {
        let mut source = template();
        source[0].likes = u32::MAX;

        let batch = renumber(&source, 8, 100).unwrap();
        assert_eq!(batch[0].likes, u32::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_source_signals_end_at_cap() {
        let source = SimulatedSource::new(template(), Duration::from_millis(800), 2, 0);

        let page = source
            .fetch(Cursor {
                batch: 1,
                offset: 8,
            })
            .await
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert!(page.next.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_source_continues_below_cap() {
        let source = SimulatedSource::new(template(), Duration::from_millis(800), 3, 0);

        let page = source
            .fetch(Cursor {
                batch: 1,
                offset: 8,
            })
            .await
            .unwrap();

        assert_eq!(
            page.next,
            Some(Cursor {
                batch: 2,
                offset: 10,
            })
        );
    }
}
