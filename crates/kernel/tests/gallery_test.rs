#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Gallery feed integration tests.
//!
//! Tests for scroll-triggered batch loading, the batch cap, in-flight
//! exclusion, failure recovery and teardown.

use std::sync::Arc;
use std::time::Duration;

use kembara_kernel::content::ContentStore;
use kembara_kernel::gallery::{FeedSettings, LoadOutcome, ScrollPosition};
use kembara_kernel::views::GalleryView;
use kembara_test_utils::{FlakySource, test_image};

const BOTTOM: ScrollPosition = ScrollPosition {
    container_bottom: 900.0,
    viewport_height: 900.0,
};

fn settings() -> FeedSettings {
    FeedSettings {
        load_delay: Duration::from_millis(800),
        likes_jitter: 0,
        ..FeedSettings::default()
    }
}

fn simulated(settings: FeedSettings) -> GalleryView {
    GalleryView::simulated(ContentStore::load().unwrap().gallery, settings)
}

#[tokio::test(start_paused = true)]
async fn scroll_far_from_end_does_nothing() {
    let view = simulated(settings());
    let far = ScrollPosition {
        container_bottom: 3000.0,
        viewport_height: 900.0,
    };

    assert!(view.on_scroll(far).is_none());
    assert!(!view.feed().loading);
    assert_eq!(view.image_count(), 8);
}

#[tokio::test(start_paused = true)]
async fn default_cap_allows_one_append() {
    let view = simulated(settings());
    assert_eq!(view.image_count(), 8);

    let handle = view.on_scroll(BOTTOM).unwrap();
    assert!(view.feed().loading);
    assert_eq!(handle.await.unwrap(), LoadOutcome::Appended(2));

    let feed = view.feed();
    assert_eq!(view.image_count(), 10);
    assert_eq!(feed.current_batch, 2);
    assert!(!feed.has_more);
    assert!(!feed.loading);
    assert!(view.show_end_message());

    assert!(view.on_scroll(BOTTOM).is_none());
    assert_eq!(view.load_more().await, LoadOutcome::Exhausted);
    assert_eq!(view.image_count(), 10);
}

#[tokio::test(start_paused = true)]
async fn appended_ids_continue_after_initial_batch() {
    let view = simulated(settings());
    view.load_more().await;

    let ids: Vec<u32> = view.visible().iter().map(|c| c.image.id).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());
}

#[tokio::test(start_paused = true)]
async fn higher_cap_allows_more_appends() {
    let view = simulated(FeedSettings {
        max_batches: 4,
        ..settings()
    });

    for _ in 0..3 {
        assert_eq!(view.load_more().await, LoadOutcome::Appended(2));
    }

    assert_eq!(view.image_count(), 14);
    assert!(view.feed().all_loaded());
    assert_eq!(view.load_more().await, LoadOutcome::Exhausted);
}

#[tokio::test(start_paused = true)]
async fn cap_of_one_keeps_initial_batch_only() {
    let view = simulated(FeedSettings {
        max_batches: 1,
        ..settings()
    });

    assert!(view.feed().all_loaded());
    assert!(view.on_scroll(BOTTOM).is_none());
    assert_eq!(view.load_more().await, LoadOutcome::Exhausted);

    let feed = view.feed();
    assert_eq!(view.image_count(), 8);
    assert_eq!(feed.current_batch, 1);
    assert!(view.show_end_message());
}

#[tokio::test(start_paused = true)]
async fn second_trigger_while_loading_is_ignored() {
    let view = simulated(settings());

    let handle = view.on_scroll(BOTTOM).unwrap();
    assert!(view.on_scroll(BOTTOM).is_none());
    assert_eq!(view.load_more().await, LoadOutcome::Busy);
    assert_eq!(view.image_count(), 8);

    assert_eq!(handle.await.unwrap(), LoadOutcome::Appended(2));
    assert_eq!(view.image_count(), 10);
}

#[tokio::test(start_paused = true)]
async fn batch_lands_only_after_delay() {
    let view = simulated(settings());
    let handle = view.on_scroll(BOTTOM).unwrap();

    tokio::time::sleep(Duration::from_millis(799)).await;
    assert_eq!(view.image_count(), 8);
    assert!(view.feed().loading);

    tokio::time::sleep(Duration::from_millis(2)).await;
    handle.await.unwrap();
    assert_eq!(view.image_count(), 10);
}

#[tokio::test(start_paused = true)]
async fn dropped_gallery_discards_pending_batch() {
    let view = simulated(settings());
    let handle = view.on_scroll(BOTTOM).unwrap();

    drop(view);

    assert_eq!(handle.await.unwrap(), LoadOutcome::Discarded);
}

#[tokio::test]
async fn failed_batch_can_be_retried() {
    let initial = vec![test_image(1, "Base Camp").build()];
    let template = vec![
        test_image(0, "Ridge Walk").tagged(&["mountain"]).build(),
        test_image(0, "Lake Shore").tagged(&["water"]).build(),
    ];
    let view = GalleryView::new(
        initial,
        Arc::new(FlakySource::new(1, template)),
        settings(),
    );

    assert_eq!(view.load_more().await, LoadOutcome::Failed);
    let feed = view.feed();
    assert!(feed.has_more);
    assert!(!feed.loading);
    assert!(feed.last_error.is_some());
    assert_eq!(view.image_count(), 1);

    assert_eq!(view.load_more().await, LoadOutcome::Appended(2));
    let feed = view.feed();
    assert!(feed.last_error.is_none());
    assert!(!feed.has_more);
    assert_eq!(view.image_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn filters_apply_to_appended_images() {
    let mut view = simulated(settings());
    view.set_tag("island");
    assert_eq!(view.visible().len(), 1);

    view.load_more().await;

    let titles: Vec<String> = view.visible().iter().map(|c| c.image.title.clone()).collect();
    assert_eq!(titles, vec!["Island Adventure", "Island Hopping"]);

    view.clear_filters();
    assert_eq!(view.visible().len(), 10);
}

#[tokio::test(start_paused = true)]
async fn end_message_hidden_when_filters_match_nothing() {
    let mut view = simulated(settings());
    view.load_more().await;
    assert!(view.show_end_message());

    view.set_query("no such photo");
    assert!(view.visible().is_empty());
    assert!(!view.show_end_message());
}

#[test]
fn likes_overlay_stored_counts() {
    let mut view = simulated(settings());

    assert!(view.toggle_like(1));
    let card = view.visible().into_iter().find(|c| c.image.id == 1).unwrap();
    assert!(card.liked);
    assert_eq!(card.image.likes, 245);
    assert_eq!(card.display_likes, 246);

    assert!(!view.toggle_like(1));
    let card = view.visible().into_iter().find(|c| c.image.id == 1).unwrap();
    assert!(!card.liked);
    assert_eq!(card.display_likes, 245);
    assert!(view.liked().is_empty());
}
