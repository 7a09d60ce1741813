//! NASA NeoWs feed import utilities.
//!
//! One-shot blocking fetch of the feed endpoint. Retries, caching, and the
//! demo-catalog fallback are the caller's policy, not this crate's.

use chrono::{Duration, NaiveDate};
use neo_catalog::{CatalogError, NearEarthObject};
use neo_config::FeedConfig;
use reqwest::blocking::Client;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("feed decode error: {0}")]
    Decode(#[from] CatalogError),
    #[error("feed window end {end} precedes start {start}")]
    WindowInverted { start: NaiveDate, end: NaiveDate },
    #[error("feed window may span at most {max} days, got {got}")]
    WindowTooWide { max: u32, got: i64 },
}

/// Inclusive date range requested from the feed endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FeedWindow {
    /// Validate a window against the configured maximum span.
    pub fn new(start: NaiveDate, end: NaiveDate, max_days: u32) -> Result<Self, ImportError> {
        if end < start {
            return Err(ImportError::WindowInverted { start, end });
        }
        let span = end.signed_duration_since(start).num_days();
        if span > i64::from(max_days) {
            return Err(ImportError::WindowTooWide {
                max: max_days,
                got: span,
            });
        }
        Ok(Self { start, end })
    }

    /// Widest window the feed accepts, starting at the given date.
    pub fn starting_at(start: NaiveDate, max_days: u32) -> Self {
        Self {
            start,
            end: start + Duration::days(i64::from(max_days)),
        }
    }

    /// Span of the window in days.
    pub fn span_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }
}

/// Build the feed request URL for a window.
pub fn feed_url(config: &FeedConfig, window: &FeedWindow) -> String {
    format!(
        "{}?start_date={}&end_date={}&api_key={}",
        config.base_url,
        window.start.format("%Y-%m-%d"),
        window.end.format("%Y-%m-%d"),
        config.api_key
    )
}

/// Fetch one feed window and flatten it into a date-ordered object list.
pub fn fetch_feed(
    config: &FeedConfig,
    window: &FeedWindow,
) -> Result<Vec<NearEarthObject>, ImportError> {
    let client = Client::builder().build()?;
    let body = client
        .get(feed_url(config, window))
        .send()?
        .error_for_status()?
        .text()?;
    let feed = neo_catalog::parse_feed(&body)?;
    Ok(feed.into_objects())
}
