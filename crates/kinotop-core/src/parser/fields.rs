//! Parsing rules for packed listing labels
//!
//! The listing packs several semantic values into compact text labels (a
//! year plus genre, or a country plus director) that have to be split
//! heuristically. The split behavior encodes the site's inconsistent label
//! formatting; treat changes here like selector changes, not refactors.

use crate::error::{KinoError, Result};

/// Separator between the country and the rest of the credits label.
const COUNTRY_SEPARATOR: &str = " • ";

/// Marker preceding the director name(s) in the credits label.
const DIRECTOR_MARKER: &str = "Режиссёр: ";

/// Token index at which the director name(s) begin in the historical
/// whitespace split.
const WHITESPACE_DIRECTOR_OFFSET: usize = 4;

fn field_error(field: &'static str, label: &str, message: &str) -> KinoError {
    KinoError::FieldParse {
        field,
        label: label.to_string(),
        message: message.to_string(),
    }
}

/// Parse the release year out of a secondary-info label.
///
/// Two label shapes occur on the site:
/// - `", 2008"` — empty segment before the comma; the year follows one
///   filler character after it
/// - `"2008, драма"` — the year is the segment before the comma
///
/// # Examples
/// ```
/// use kinotop_core::parser::parse_year_label;
///
/// assert_eq!(parse_year_label(", 2008").unwrap(), 2008);
/// assert_eq!(parse_year_label("2008, драма").unwrap(), 2008);
/// ```
pub fn parse_year_label(label: &str) -> Result<u16> {
    let mut segments = label.splitn(2, ',');
    let first = segments.next().unwrap_or("");

    let digits = if first.is_empty() {
        let rest = segments
            .next()
            .ok_or_else(|| field_error("year", label, "label is empty"))?;
        // One filler character sits between the comma and the year digits
        let mut chars = rest.chars();
        chars.next();
        chars.as_str()
    } else {
        first
    };
    let digits = digits.trim();

    let four_digits = regex_lite::Regex::new(r"^\d{4}$")
        .map_err(|e| field_error("year", label, &format!("year pattern did not compile: {e}")))?;
    if !four_digits.is_match(digits) {
        return Err(field_error("year", label, "expected a 4-digit year"));
    }
    digits
        .parse()
        .map_err(|_| field_error("year", label, "year out of range"))
}

/// Strategy for splitting the truncated credits label into country and
/// director.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreditsStrategy {
    /// Split on the literal `" • "` separator and the `"Режиссёр: "`
    /// marker. The default.
    #[default]
    Delimiter,
    /// Historical variant: country is the first whitespace token, the
    /// director starts at token index 4. The fixed token-count assumption
    /// drops leading name tokens whenever the label deviates from the
    /// shape it was written against.
    Whitespace,
}

impl CreditsStrategy {
    /// Split a credits label into `(country, director)`.
    ///
    /// # Errors
    /// `KinoError::FieldParse` when the expected separator or marker is
    /// missing (`Delimiter`) or the label is empty (`Whitespace`).
    pub fn split(self, label: &str) -> Result<(String, String)> {
        match self {
            CreditsStrategy::Delimiter => {
                let (country, _) = label.split_once(COUNTRY_SEPARATOR).ok_or_else(|| {
                    field_error("country", label, "missing \" • \" separator")
                })?;
                let (_, director) = label
                    .split_once(DIRECTOR_MARKER)
                    .ok_or_else(|| field_error("director", label, "missing director marker"))?;
                Ok((country.trim().to_string(), director.trim().to_string()))
            }
            CreditsStrategy::Whitespace => {
                let country = label
                    .split_whitespace()
                    .next()
                    .ok_or_else(|| field_error("country", label, "label is empty"))?
                    .to_string();
                let director = label
                    .split_whitespace()
                    .skip(WHITESPACE_DIRECTOR_OFFSET)
                    .collect::<Vec<_>>()
                    .join(" ");
                Ok((country, director))
            }
        }
    }
}

/// Parse the rating text as a floating-point number.
///
/// Only called for a present rating element; an absent element maps to
/// `None` upstream, never to `0.0`.
pub fn parse_rating(text: &str) -> Result<f64> {
    text.trim()
        .parse()
        .map_err(|_| field_error("rating", text, "not a floating-point number"))
}
