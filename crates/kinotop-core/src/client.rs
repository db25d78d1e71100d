//! Page fetching for the Kinopoisk Top 1000 listing
//!
//! The listing is rendered client-side, so a page is "fetched" by steering
//! a WebDriver-controlled browser to it, pausing for the fixed settling
//! duration, and capturing the markup as rendered at that point. The
//! browser capability itself is behind the [`PageBrowser`] trait so tests
//! can inject fixture documents without a live session.

use std::time::Duration;

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use tokio::time::sleep;
use url::Url;

use crate::error::{KinoError, Result};

/// Base URL of the Top 1000 listing; pages are addressed by query parameter
const LISTING_URL: &str = "https://www.kinopoisk.ru/lists/movies/top_1000/";

/// Pause after navigation so client-side rendering can populate the DOM
const DEFAULT_SETTLE: Duration = Duration::from_secs(3);

/// Headless Firefox capabilities for the WebDriver session
const HEADLESS_CAPS: &str = r#"{"moz:firefoxOptions": {"args": ["--headless"]}}"#;

/// Minimal browser capability the page fetcher needs.
///
/// [`WebDriverBrowser`] implements this over a live session; tests
/// implement it over canned documents.
#[async_trait]
pub trait PageBrowser: Send {
    /// Navigate the session to the given URL.
    async fn navigate(&mut self, url: &str) -> Result<()>;

    /// Capture the markup of the current page as rendered right now.
    async fn page_source(&mut self) -> Result<String>;

    /// Release the underlying session. Calling twice is a no-op.
    async fn close(&mut self) -> Result<()>;
}

/// WebDriver-backed browser session (headless Firefox via geckodriver).
pub struct WebDriverBrowser {
    // fantoccini's close consumes the client, so it lives in an Option
    // and is taken out on close
    client: Option<Client>,
}

impl WebDriverBrowser {
    /// Connect a new headless session at the given WebDriver endpoint.
    ///
    /// # Errors
    /// - `KinoError::Session` if the session cannot be established
    /// - `KinoError::Json` if the capability document is malformed
    pub async fn connect(webdriver_url: &str) -> Result<Self> {
        let capabilities: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(HEADLESS_CAPS)?;
        let client = ClientBuilder::native()
            .capabilities(capabilities)
            .connect(webdriver_url)
            .await?;
        Ok(Self {
            client: Some(client),
        })
    }

    fn session(&self) -> Result<&Client> {
        self.client.as_ref().ok_or(KinoError::SessionClosed)
    }
}

#[async_trait]
impl PageBrowser for WebDriverBrowser {
    async fn navigate(&mut self, url: &str) -> Result<()> {
        self.session()?.goto(url).await?;
        Ok(())
    }

    async fn page_source(&mut self) -> Result<String> {
        Ok(self.session()?.source().await?)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(client) = self.client.take() {
            client.close().await?;
        }
        Ok(())
    }
}

/// Configuration for the page fetcher
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Listing base URL; the page number is appended as a query parameter
    pub base_url: String,
    /// Settling pause after each navigation
    pub settle: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: LISTING_URL.to_string(),
            settle: DEFAULT_SETTLE,
        }
    }
}

/// Page fetcher over an injected browser session.
pub struct KinoClient<B> {
    browser: B,
    config: ClientConfig,
}

impl<B: PageBrowser> KinoClient<B> {
    /// Create a fetcher with default configuration.
    pub fn new(browser: B) -> Self {
        Self::with_config(browser, ClientConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(browser: B, config: ClientConfig) -> Self {
        Self { browser, config }
    }

    /// Fetch the rendered markup of one listing page.
    ///
    /// Navigates to `<base_url>?page=<page>`, sleeps the configured
    /// settling duration, and returns the page source as it exists at that
    /// point. No readiness check is made here; an unrendered page surfaces
    /// downstream as a page with no entries.
    ///
    /// # Errors
    /// Navigation and capture errors from the browser session propagate
    /// unchanged; there is no local retry.
    pub async fn fetch_page(&mut self, page: u32) -> Result<String> {
        let url = Url::parse_with_params(&self.config.base_url, [("page", page.to_string())])?;
        self.browser.navigate(url.as_str()).await?;
        sleep(self.config.settle).await;
        self.browser.page_source().await
    }

    /// Release the underlying browser session.
    pub async fn close(&mut self) -> Result<()> {
        self.browser.close().await
    }
}
