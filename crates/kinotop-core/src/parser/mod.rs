//! HTML parsers for the Kinopoisk Top 1000 listing
//!
//! This module contains the extraction logic for rendered listing pages:
//! - `listing`: locate entry containers and assemble records
//! - `fields`: parsing rules for the packed label fields

pub mod fields;
pub mod listing;

// Re-export main parsing functions
pub use fields::{parse_rating, parse_year_label, CreditsStrategy};
pub use listing::{parse_listing, RawEntryFields};
