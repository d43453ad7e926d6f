//! Project records and data loading.

mod fetcher;

pub use fetcher::{FetchError, FetchResult, HttpFetcher, ProjectFetcher};

use serde::{Deserialize, Serialize};

/// One crowdfunding project entry from the fetched dataset.
///
/// Field names mirror the upstream JSON keys (`s.no`, `amt.pledged`, ...).
/// Only the serial number, percentage funded and amount pledged are
/// rendered; the descriptive fields are carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "s.no")]
    pub serial_no: u64,

    #[serde(rename = "amt.pledged")]
    pub amount_pledged: f64,

    #[serde(rename = "percentage.funded")]
    pub percentage_funded: f64,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub blurb: String,

    #[serde(default)]
    pub by: String,

    #[serde(default)]
    pub country: String,

    #[serde(default)]
    pub currency: String,

    #[serde(rename = "end.time", default)]
    pub end_time: String,

    #[serde(default)]
    pub location: String,

    #[serde(rename = "num.backers", default)]
    pub num_backers: String,

    #[serde(default)]
    pub state: String,

    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub url: String,
}

/// Tri-state describing data-fetch progress.
///
/// Exactly one variant holds at any time. `Ready` and `Failed` are
/// terminal: there is no refetch, reload is the only recovery path.
#[derive(Debug, Clone)]
pub enum LoadState {
    /// The fetch is in flight
    Loading,

    /// The fetch failed; carries the user-facing message
    Failed(String),

    /// The collection is populated (possibly empty)
    Ready(Vec<Project>),
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready(_))
    }
}
