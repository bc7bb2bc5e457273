//! Compiled-in record stores.
//!
//! Club content ships inside the binary as YAML documents and is decoded
//! once at startup. Stores are read-only afterwards; views borrow or clone
//! from them but never write back.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{AppResult, KernelError};
use crate::models::{Activity, AdventureEvent, GalleryImage};

const EVENTS_YML: &str = include_str!("../../content/events.yml");
const GALLERY_YML: &str = include_str!("../../content/gallery.yml");
const ACTIVITIES_YML: &str = include_str!("../../content/activities.yml");

/// Gallery content: the opening batch plus the template for appended batches.
#[derive(Debug, Clone, Deserialize)]
pub struct GalleryContent {
    pub initial: Vec<GalleryImage>,
    #[serde(default)]
    pub additional: Vec<GalleryImage>,
}

/// All record stores for one session.
#[derive(Debug, Clone)]
pub struct ContentStore {
    pub events: Vec<AdventureEvent>,
    pub gallery: GalleryContent,
    pub activities: Vec<Activity>,
}

impl ContentStore {
    /// Decode the compiled-in content.
    pub fn load() -> AppResult<Self> {
        let store = Self {
            events: decode("events", EVENTS_YML)?,
            gallery: decode("gallery", GALLERY_YML)?,
            activities: decode("activities", ACTIVITIES_YML)?,
        };

        debug!(
            events = store.events.len(),
            images = store.gallery.initial.len(),
            additional_images = store.gallery.additional.len(),
            activities = store.activities.len(),
            "content decoded"
        );

        Ok(store)
    }
}

/// Decode one YAML document, tagging failures with the store name.
pub fn decode<T: DeserializeOwned>(name: &'static str, yaml: &str) -> AppResult<T> {
    serde_yml::from_str(yaml).map_err(|source| KernelError::Content { name, source })
}
