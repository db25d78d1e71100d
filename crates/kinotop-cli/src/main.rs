//! Command-line runner for the Kinopoisk Top 1000 scraper.
//!
//! Takes no arguments: page range, listing URL and output path are fixed.
//! All failures are logged and the process exits zero either way; callers
//! detect a short run from the log or the record count in `movies.json`.

use std::path::Path;

use tracing::{error, info, warn};

use kinotop_core::scraper::{write_movies, KinoScraper, EXPECTED_TOTAL, OUTPUT_FILE};
use kinotop_core::WebDriverBrowser;

/// Local geckodriver endpoint.
const WEBDRIVER_URL: &str = "http://localhost:4444";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let browser = match WebDriverBrowser::connect(WEBDRIVER_URL).await {
        Ok(browser) => browser,
        Err(err) => {
            error!("Failed to start WebDriver session: {err}");
            return;
        }
    };

    let outcome = KinoScraper::new(browser).run().await;

    if let Some(err) = &outcome.error {
        error!("Run aborted: {err}");
    }

    match write_movies(Path::new(OUTPUT_FILE), &outcome.movies) {
        Ok(()) => {
            info!("Wrote {} records to {OUTPUT_FILE}", outcome.movies.len());
            if outcome.movies.len() != EXPECTED_TOTAL {
                warn!(
                    "Expected {EXPECTED_TOTAL} records, got {}",
                    outcome.movies.len()
                );
            }
        }
        Err(err) => error!("Failed to write {OUTPUT_FILE}: {err}"),
    }
}
