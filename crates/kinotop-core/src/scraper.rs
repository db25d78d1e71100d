//! Run orchestration for the Top 1000 scrape
//!
//! Pages are fetched and parsed strictly sequentially, in increasing page
//! order. The run stops at the first error but still hands back everything
//! accumulated before it; the caller writes the output file either way.

use std::path::Path;

use tracing::{info, warn};

use crate::client::{KinoClient, PageBrowser};
use crate::error::{KinoError, Result};
use crate::parser::{parse_listing, CreditsStrategy};
use crate::types::Movie;

/// First listing page (inclusive).
pub const FIRST_PAGE: u32 = 1;

/// Last listing page (inclusive).
pub const LAST_PAGE: u32 = 20;

/// Number of records the full listing is expected to yield.
pub const EXPECTED_TOTAL: usize = 1000;

/// Output file name, resolved against the working directory.
pub const OUTPUT_FILE: &str = "movies.json";

/// Result of one full run: whatever was accumulated, plus the error that
/// stopped the run early, if any.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub movies: Vec<Movie>,
    pub error: Option<KinoError>,
}

/// High-level scraper: a page client plus an extraction strategy.
pub struct KinoScraper<B> {
    client: KinoClient<B>,
    strategy: CreditsStrategy,
}

impl<B: PageBrowser> KinoScraper<B> {
    /// Create a scraper over a browser session with default configuration.
    pub fn new(browser: B) -> Self {
        Self::with_client(KinoClient::new(browser))
    }

    /// Create a scraper over a pre-configured page client.
    pub fn with_client(client: KinoClient<B>) -> Self {
        Self {
            client,
            strategy: CreditsStrategy::default(),
        }
    }

    /// Override the country/director split strategy.
    pub fn with_strategy(mut self, strategy: CreditsStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Fetch and extract a single listing page.
    pub async fn scrape_page(&mut self, page: u32) -> Result<Vec<Movie>> {
        let html = self.client.fetch_page(page).await?;
        parse_listing(&html, page, self.strategy)
    }

    /// Scrape the whole listing, first page to last.
    ///
    /// Stops at the first error; records accumulated before the failure are
    /// returned alongside it. The browser session is released on every
    /// path. A close failure never masks the error that stopped the run.
    pub async fn run(mut self) -> ScrapeOutcome {
        let mut movies = Vec::new();
        let mut error = None;

        for page in FIRST_PAGE..=LAST_PAGE {
            match self.scrape_page(page).await {
                Ok(batch) => {
                    movies.extend(batch);
                    info!("Processed page {page}");
                }
                Err(err) => {
                    error = Some(err);
                    break;
                }
            }
        }

        if let Err(err) = self.client.close().await {
            if error.is_none() {
                error = Some(err);
            } else {
                warn!("Failed to close browser session: {err}");
            }
        }

        ScrapeOutcome { movies, error }
    }
}

/// Write the accumulated records as a JSON array.
///
/// The file is overwritten in place, indented with 2 spaces, with
/// non-ASCII characters written literally. Called exactly once per run,
/// after all pages are processed or the run has failed.
pub fn write_movies(path: &Path, movies: &[Movie]) -> Result<()> {
    let json = serde_json::to_string_pretty(movies)?;
    std::fs::write(path, json)?;
    Ok(())
}
