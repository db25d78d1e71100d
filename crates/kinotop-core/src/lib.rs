//! Kinopoisk Top 1000 Scraper Core Library
//!
//! This crate provides the core scraping functionality for the Kinopoisk
//! Top 1000 movie listing (https://www.kinopoisk.ru/lists/movies/top_1000/).
//!
//! The listing is rendered client-side, so fetching goes through a
//! WebDriver-controlled browser rather than a plain HTTP client.
//!
//! # Features
//! - WebDriver-backed page fetching with a fixed settling pause
//! - Fixed-selector extraction of title, year, country, director, rating
//!   and the watch-online marker
//! - Pluggable country/director split strategies
//! - Partial results survive a failed run and are still written out

pub mod client;
pub mod error;
pub mod parser;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, KinoClient, PageBrowser, WebDriverBrowser};
pub use error::{KinoError, Result};
pub use parser::{parse_listing, CreditsStrategy};
pub use scraper::{KinoScraper, ScrapeOutcome};
pub use types::Movie;
