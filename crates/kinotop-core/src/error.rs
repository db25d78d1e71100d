//! Error types for the Kinopoisk scraper
//!
//! This module defines all error types used throughout the library.

use thiserror::Error;

/// Error type for scraper operations
#[derive(Error, Debug)]
pub enum KinoError {
    /// WebDriver session could not be established
    #[error("Failed to start WebDriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    /// A WebDriver command failed (navigation, page source capture, ...)
    #[error("WebDriver command failed: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    /// The browser session was used after it was closed
    #[error("Browser session already closed")]
    SessionClosed,

    /// Page URL could not be constructed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A fixed CSS selector failed to compile
    #[error("Invalid selector: {0}")]
    Selector(String),

    /// A fetched page contained no listing entries
    #[error("No listing entries found on page {page}")]
    NoEntriesFound { page: u32 },

    /// A required sub-element was absent from a listing entry
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// A field could not be parsed out of its raw label text
    #[error("Failed to parse {field} from {label:?}: {message}")]
    FieldParse {
        field: &'static str,
        label: String,
        message: String,
    },

    /// JSON serialization of the output failed
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Output file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for scraper operations
pub type Result<T> = std::result::Result<T, KinoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_no_entries_found() {
        let error = KinoError::NoEntriesFound { page: 7 };
        assert_eq!(error.to_string(), "No listing entries found on page 7");
    }

    #[test]
    fn test_display_element_not_found() {
        let error = KinoError::ElementNotFound("title".to_string());
        assert_eq!(error.to_string(), "Element not found: title");
    }

    #[test]
    fn test_display_field_parse() {
        let error = KinoError::FieldParse {
            field: "year",
            label: "drama".to_string(),
            message: "expected a 4-digit year".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse year from \"drama\": expected a 4-digit year"
        );
    }

    #[test]
    fn test_display_selector() {
        let error = KinoError::Selector("div[".to_string());
        assert_eq!(error.to_string(), "Invalid selector: div[");
    }

    #[test]
    fn test_display_session_closed() {
        let error = KinoError::SessionClosed;
        assert_eq!(error.to_string(), "Browser session already closed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = KinoError::from(io);
        assert!(matches!(error, KinoError::Io(_)));
        assert!(error.to_string().contains("denied"));
    }
}
