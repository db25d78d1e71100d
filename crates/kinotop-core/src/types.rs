//! Data types for the Kinopoisk scraper

use serde::{Deserialize, Serialize};

/// One ranked movie from the Top 1000 listing.
///
/// Field names double as the JSON keys in the output file, so renaming a
/// field changes the on-disk format consumers of `movies.json` see.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Display title
    pub name: String,
    /// Release year (4-digit)
    pub year: u16,
    /// Primary country of origin
    pub country: String,
    /// Director name(s)
    pub director: String,
    /// Kinopoisk rating, `None` when the site publishes no rating
    pub rating: Option<f64>,
    /// Whether the listing carries the watch-online marker
    pub is_on_kinopoisk: bool,
}
