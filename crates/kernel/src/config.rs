//! Configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::gallery::{
    DEFAULT_LIKES_JITTER, DEFAULT_LOAD_DELAY, DEFAULT_MAX_BATCHES, DEFAULT_SCROLL_THRESHOLD,
    FeedSettings,
};

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Gallery infinite-scroll tuning.
    pub feed: FeedSettings,

    /// Year shown on event date lines (default: 2026).
    pub season_year: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed: FeedSettings::default(),
            season_year: 2026,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let load_delay_ms: u64 = lookup("GALLERY_LOAD_DELAY_MS")
            .map(|v| v.parse())
            .transpose()
            .context("GALLERY_LOAD_DELAY_MS must be a valid u64")?
            .unwrap_or(DEFAULT_LOAD_DELAY.as_millis() as u64);

        let scroll_threshold: f64 = lookup("GALLERY_SCROLL_THRESHOLD")
            .map(|v| v.parse())
            .transpose()
            .context("GALLERY_SCROLL_THRESHOLD must be a number")?
            .unwrap_or(DEFAULT_SCROLL_THRESHOLD);

        let max_batches: u32 = lookup("GALLERY_MAX_BATCHES")
            .map(|v| v.parse())
            .transpose()
            .context("GALLERY_MAX_BATCHES must be a valid u32")?
            .unwrap_or(DEFAULT_MAX_BATCHES);

        let likes_jitter: u32 = lookup("GALLERY_LIKES_JITTER")
            .map(|v| v.parse())
            .transpose()
            .context("GALLERY_LIKES_JITTER must be a valid u32")?
            .unwrap_or(DEFAULT_LIKES_JITTER);

        let season_year: i32 = lookup("SEASON_YEAR")
            .map(|v| v.parse())
            .transpose()
            .context("SEASON_YEAR must be a valid year")?
            .unwrap_or(2026);

        Ok(Self {
            feed: FeedSettings {
                scroll_threshold,
                load_delay: Duration::from_millis(load_delay_ms),
                max_batches,
                likes_jitter,
            },
            season_year,
        })
    }
}
