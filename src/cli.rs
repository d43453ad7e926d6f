use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use crate::config::Config;
use crate::tui;

/// fundview - a terminal viewer for crowdfunding project data
#[derive(Parser)]
#[command(
    name = "fundview",
    version,
    about = "Browse a crowdfunding project dataset as a paginated table",
    long_about = r#"fundview fetches a JSON dataset of crowdfunding projects and renders it
as a paginated table: sequence number, percentage funded and amount
pledged, five projects per page.

Examples:
  fundview                         # Browse the default dataset
  fundview --url https://...       # Browse a different dataset
  fundview --page-size 10          # Ten projects per page"#
)]
pub struct Cli {
    /// URL of the project dataset
    #[arg(long = "url")]
    pub url: Option<String>,

    /// Number of projects per page
    #[arg(short = 'p', long = "page-size")]
    pub page_size: Option<usize>,

    /// Maximum number of page numbers in the pagination bar
    #[arg(long = "max-visible-pages")]
    pub max_visible_pages: Option<usize>,

    /// Enable debug logging
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        if self.debug {
            debug!("Debug logging enabled");
        }

        let mut config = Config::init()?;

        // CLI flags win over environment and defaults
        if let Some(url) = self.url {
            config.data_url = url;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if let Some(max) = self.max_visible_pages {
            config.max_visible_pages = max;
        }

        config.validate()?;
        info!(
            "Starting with page size {} and a {}-wide page window",
            config.page_size, config.max_visible_pages
        );

        tui::run(config).await
    }
}
