//! Configuration models and loaders for the NEO Impact Calculator.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Public NeoWs feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://api.nasa.gov/neo/rest/v1/feed";

/// Rate-limited demonstration key accepted by the NASA API.
pub const DEMO_API_KEY: &str = "DEMO_KEY";

/// Maximum date span the feed endpoint accepts per request, in days.
pub const MAX_FEED_WINDOW_DAYS: u32 = 7;

/// Connection parameters for the NeoWs feed collaborator.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    pub base_url: String,
    pub api_key: String,
    pub max_window_days: u32,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_URL.to_string(),
            api_key: DEMO_API_KEY.to_string(),
            max_window_days: MAX_FEED_WINDOW_DAYS,
        }
    }
}

impl FeedConfig {
    /// Replace the API key with the `NASA_API_KEY` environment variable
    /// when it is set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var("NASA_API_KEY") {
            if !key.is_empty() {
                self.api_key = key;
            }
        }
        self
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a feed configuration from a TOML or YAML file, by extension.
pub fn load_feed_config<P: AsRef<Path>>(path: P) -> Result<FeedConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
