use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default location of the crowdfunding project dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/saaslabsco/frontend-assignment/refs/heads/master/frontend-assignment.json";

/// Default number of projects shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Default maximum number of page numbers shown in the pagination bar.
pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 10;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// URL of the project dataset (one GET per run)
    pub data_url: String,

    /// Number of projects per page
    pub page_size: usize,

    /// Maximum number of page-number entries in the pagination bar
    pub max_visible_pages: usize,

    /// Timeout for the dataset request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_url: DEFAULT_DATA_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_visible_pages: DEFAULT_MAX_VISIBLE_PAGES,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Initialize configuration from defaults and environment variables
    pub fn init() -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();
        config.load_from_env();
        Ok(config)
    }

    /// Load configuration overrides from environment variables
    pub fn load_from_env(&mut self) {
        if let Ok(url) = std::env::var("FUNDVIEW_DATA_URL") {
            self.data_url = url;
        }

        if let Ok(size) = std::env::var("FUNDVIEW_PAGE_SIZE") {
            if let Ok(size) = size.parse() {
                self.page_size = size;
            }
        }

        if let Ok(max) = std::env::var("FUNDVIEW_MAX_VISIBLE_PAGES") {
            if let Ok(max) = max.parse() {
                self.max_visible_pages = max;
            }
        }

        if let Ok(secs) = std::env::var("FUNDVIEW_REQUEST_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse() {
                self.request_timeout_secs = secs;
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            anyhow::bail!("page size must be at least 1");
        }

        if self.max_visible_pages == 0 {
            anyhow::bail!("max visible pages must be at least 1");
        }

        if !self.data_url.starts_with("http://") && !self.data_url.starts_with("https://") {
            anyhow::bail!("data URL must start with http:// or https://");
        }

        Ok(())
    }

    /// Request timeout as a `Duration`
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
