//! Kembara test utilities.
//!
//! Helpers for integration testing: record builders and batch sources
//! with scripted behavior.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use kembara_kernel::error::{AppResult, KernelError};
use kembara_kernel::gallery::{BatchPage, BatchSource, Cursor};
use kembara_kernel::models::{AdventureEvent, Coordinates, EventType, GalleryImage};

/// Create a test event with default values.
pub fn test_event(id: &str, event_type: EventType, month: &str) -> TestEvent {
    TestEvent {
        id: id.to_string(),
        month: month.to_string(),
        title: format!("Adventure {id}"),
        dates: "TBC".to_string(),
        duration: None,
        location: "Johor".to_string(),
        description: String::new(),
        event_type,
        confirmed: true,
        coordinates: Coordinates {
            lat: 2.0216,
            lng: 103.0769,
        },
    }
}

/// An event builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestEvent {
    pub id: String,
    pub month: String,
    pub title: String,
    pub dates: String,
    pub duration: Option<String>,
    pub location: String,
    pub description: String,
    pub event_type: EventType,
    pub confirmed: bool,
    pub coordinates: Coordinates,
}

impl TestEvent {
    pub fn titled(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn on(mut self, dates: &str) -> Self {
        self.dates = dates.to_string();
        self
    }

    /// Mark as tentative.
    pub fn unconfirmed(mut self) -> Self {
        self.confirmed = false;
        self
    }

    pub fn build(self) -> AdventureEvent {
        AdventureEvent {
            id: self.id,
            month: self.month,
            title: self.title,
            dates: self.dates,
            duration: self.duration,
            location: self.location,
            description: self.description,
            event_type: self.event_type,
            confirmed: self.confirmed,
            coordinates: self.coordinates,
        }
    }
}

/// Create a test image with default values.
pub fn test_image(id: u32, title: &str) -> TestImage {
    TestImage {
        id,
        title: title.to_string(),
        description: String::new(),
        likes: 0,
        location: String::new(),
        tags: Vec::new(),
    }
}

/// An image builder for creating test fixtures.
#[derive(Debug, Clone)]
pub struct TestImage {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub likes: u32,
    pub location: String,
    pub tags: Vec<String>,
}

impl TestImage {
    pub fn tagged(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_likes(mut self, likes: u32) -> Self {
        self.likes = likes;
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn at(mut self, location: &str) -> Self {
        self.location = location.to_string();
        self
    }

    pub fn build(self) -> GalleryImage {
        GalleryImage {
            id: self.id,
            src: format!("https://images.example.org/{}.jpg", self.id),
            alt: self.title.clone(),
            title: self.title,
            description: self.description,
            likes: self.likes,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            location: self.location,
            tags: self.tags,
            author: "Test Author".to_string(),
        }
    }
}

/// Batch source that fails a set number of times, then serves `template`
/// once and reports end of data.
pub struct FlakySource {
    failures_left: AtomicU32,
    template: Vec<GalleryImage>,
}

impl FlakySource {
    pub fn new(failures: u32, template: Vec<GalleryImage>) -> Self {
        Self {
            failures_left: AtomicU32::new(failures),
            template,
        }
    }
}

#[async_trait]
impl BatchSource for FlakySource {
    async fn fetch(&self, cursor: Cursor) -> AppResult<BatchPage> {
        tokio::task::yield_now().await;

        let remaining = self.failures_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures_left.store(remaining - 1, Ordering::SeqCst);
            return Err(KernelError::Fetch("upstream unavailable".to_string()));
        }

        let items = self
            .template
            .iter()
            .enumerate()
            .map(|(i, image)| {
                let id = u32::try_from(cursor.offset + i + 1)
                    .map_err(|e| KernelError::Fetch(e.to_string()))?;
                Ok(GalleryImage {
                    id,
                    ..image.clone()
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(BatchPage { items, next: None })
    }
}
