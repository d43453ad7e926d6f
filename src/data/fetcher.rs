//! Fetching the project dataset over HTTP.

use super::Project;
use crate::config::Config;
use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from fetching the project dataset.
///
/// Two kinds only: a response arrived with a non-success status, or the
/// request failed before a usable response existed (connection failure,
/// timeout, malformed body).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to fetch data")]
    Status,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// Message shown in the error screen.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.is_empty() {
            "An error occurred".to_string()
        } else {
            message
        }
    }
}

pub type FetchResult = Result<Vec<Project>, FetchError>;

/// Data-fetching capability, injected into the app so tests can
/// substitute a stub without process-wide mutation.
#[async_trait]
pub trait ProjectFetcher: Send + Sync {
    async fn fetch(&self) -> FetchResult;
}

/// Fetches the dataset with a single HTTP GET.
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(concat!("fundview/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            url: config.data_url.clone(),
        })
    }
}

#[async_trait]
impl ProjectFetcher for HttpFetcher {
    async fn fetch(&self) -> FetchResult {
        debug!("Fetching project dataset from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Dataset request returned HTTP {}", status);
            return Err(FetchError::Status);
        }

        let projects = response.json::<Vec<Project>>().await?;
        debug!("Fetched {} projects", projects.len());
        Ok(projects)
    }
}
