//! Listing-page parser
//!
//! Locates every entry container on a rendered Top 1000 page and
//! assembles one [`Movie`] per entry. All selectors are fixed: when the
//! site markup drifts, extraction fails loudly instead of silently
//! thinning the output.

use scraper::{ElementRef, Html, Selector};

use crate::error::{KinoError, Result};
use crate::types::Movie;

use super::fields::{parse_rating, parse_year_label, CreditsStrategy};

/// Per-entry container marker, stable across listing pages.
const ENTRY_SELECTOR: &str = r#"div[data-tid="679d3e26"]"#;

/// Movie title inside an entry.
const TITLE_SELECTOR: &str = "span.styles_mainTitle__IFQyZ.styles_activeMovieTittle__kJdJj";

/// Secondary-info label carrying the year (plus genre or original title).
const YEAR_SELECTOR: &str = "span.desktop-list-main-info_secondaryText__M_aus";

/// Truncated credits label carrying country and director.
const CREDITS_SELECTOR: &str = "span.desktop-list-main-info_truncatedText__IMQRP";

/// Rating value; matched on a class fragment because the full class list
/// carries generated suffixes.
const RATING_SELECTOR: &str = r#"span[class*="styles_kinopoiskValue__nkZEC"]"#;

/// Watch-online button, present only for titles available on the site.
const AVAILABILITY_SELECTOR: &str = "div.styles_onlineButton__ER9Vt.styles_inlineItem___co22";

/// Raw sub-element texts of one listing entry, collected before any
/// parsing so that "finding sub-elements" and "parsing their text" stay
/// separate failure modes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawEntryFields {
    pub title: Option<String>,
    pub year_label: Option<String>,
    pub credits_label: Option<String>,
    pub rating: Option<String>,
    pub is_on_kinopoisk: bool,
}

struct EntrySelectors {
    entry: Selector,
    title: Selector,
    year: Selector,
    credits: Selector,
    rating: Selector,
    availability: Selector,
}

impl EntrySelectors {
    fn compile() -> Result<Self> {
        Ok(Self {
            entry: compile(ENTRY_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            year: compile(YEAR_SELECTOR)?,
            credits: compile(CREDITS_SELECTOR)?,
            rating: compile(RATING_SELECTOR)?,
            availability: compile(AVAILABILITY_SELECTOR)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| KinoError::Selector(format!("{selector}: {e:?}")))
}

/// Parse one rendered listing page into records.
///
/// Extraction is a pure function of the document text: same input, same
/// output, in document order.
///
/// # Arguments
/// * `html` - Full rendered page markup
/// * `page` - Page number, carried into error context only
/// * `strategy` - Country/director split strategy
///
/// # Errors
/// - `KinoError::NoEntriesFound` when the page has no entry containers; on
///   this site an empty page means a rendering or selector failure, not a
///   legitimately empty page, and is fatal for the whole run
/// - `KinoError::ElementNotFound` / `KinoError::FieldParse` when a required
///   sub-field is missing or unparseable; there is no per-entry recovery
pub fn parse_listing(html: &str, page: u32, strategy: CreditsStrategy) -> Result<Vec<Movie>> {
    let selectors = EntrySelectors::compile()?;
    let document = Html::parse_document(html);

    let entries: Vec<ElementRef> = document.select(&selectors.entry).collect();
    if entries.is_empty() {
        return Err(KinoError::NoEntriesFound { page });
    }

    let mut movies = Vec::with_capacity(entries.len());
    for entry in &entries {
        let fields = collect_fields(entry, &selectors);
        movies.push(assemble_movie(fields, strategy)?);
    }
    Ok(movies)
}

/// Collect the raw sub-element texts of one entry element.
fn collect_fields(entry: &ElementRef, selectors: &EntrySelectors) -> RawEntryFields {
    RawEntryFields {
        title: element_text(entry, &selectors.title),
        year_label: element_text(entry, &selectors.year),
        credits_label: element_text(entry, &selectors.credits),
        rating: element_text(entry, &selectors.rating),
        is_on_kinopoisk: entry.select(&selectors.availability).next().is_some(),
    }
}

fn element_text(entry: &ElementRef, selector: &Selector) -> Option<String> {
    entry
        .select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// Assemble a record from collected raw fields.
fn assemble_movie(fields: RawEntryFields, strategy: CreditsStrategy) -> Result<Movie> {
    let name = fields
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| KinoError::ElementNotFound("title".to_string()))?;
    let year_label = fields
        .year_label
        .ok_or_else(|| KinoError::ElementNotFound("secondary-info label".to_string()))?;
    let credits_label = fields
        .credits_label
        .ok_or_else(|| KinoError::ElementNotFound("credits label".to_string()))?;

    let year = parse_year_label(&year_label)?;
    let (country, director) = strategy.split(&credits_label)?;
    let rating = fields.rating.as_deref().map(parse_rating).transpose()?;

    Ok(Movie {
        name,
        year,
        country,
        director,
        rating,
        is_on_kinopoisk: fields.is_on_kinopoisk,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ENTRY: &str = r#"
        <div data-tid="679d3e26">
            <span class="styles_mainTitle__IFQyZ styles_activeMovieTittle__kJdJj">Аватар</span>
            <span class="desktop-list-main-info_secondaryText__M_aus">, 2009</span>
            <span class="desktop-list-main-info_truncatedText__IMQRP">США • Режиссёр: Джеймс Кэмерон</span>
            <span class="styles_kinopoiskValue__nkZEC styles_top__x1">8.0</span>
            <div class="styles_onlineButton__ER9Vt styles_inlineItem___co22">Смотреть</div>
        </div>"#;

    const MINIMAL_ENTRY: &str = r#"
        <div data-tid="679d3e26">
            <span class="styles_mainTitle__IFQyZ styles_activeMovieTittle__kJdJj">Брат</span>
            <span class="desktop-list-main-info_secondaryText__M_aus">1997, драма</span>
            <span class="desktop-list-main-info_truncatedText__IMQRP">Россия • Режиссёр: Алексей Балабанов</span>
        </div>"#;

    fn document(entries: &str) -> String {
        format!("<html><body>{entries}</body></html>")
    }

    #[test]
    fn test_full_entry_parses_all_fields() {
        let movies =
            parse_listing(&document(FULL_ENTRY), 1, CreditsStrategy::Delimiter).unwrap();
        assert_eq!(movies.len(), 1);

        let movie = &movies[0];
        assert_eq!(movie.name, "Аватар");
        assert_eq!(movie.year, 2009);
        assert_eq!(movie.country, "США");
        assert_eq!(movie.director, "Джеймс Кэмерон");
        assert_eq!(movie.rating, Some(8.0));
        assert!(movie.is_on_kinopoisk);
    }

    #[test]
    fn test_absent_rating_and_marker() {
        let movies =
            parse_listing(&document(MINIMAL_ENTRY), 1, CreditsStrategy::Delimiter).unwrap();
        let movie = &movies[0];
        assert_eq!(movie.rating, None);
        assert!(!movie.is_on_kinopoisk);
    }

    #[test]
    fn test_entries_keep_document_order() {
        let html = document(&format!("{FULL_ENTRY}{MINIMAL_ENTRY}"));
        let movies = parse_listing(&html, 1, CreditsStrategy::Delimiter).unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].name, "Аватар");
        assert_eq!(movies[1].name, "Брат");
    }

    #[test]
    fn test_empty_page_is_fatal() {
        let err =
            parse_listing("<html><body></body></html>", 4, CreditsStrategy::Delimiter).unwrap_err();
        match err {
            KinoError::NoEntriesFound { page } => assert_eq!(page, 4),
            other => panic!("Expected NoEntriesFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_title_propagates() {
        let entry = r#"
            <div data-tid="679d3e26">
                <span class="desktop-list-main-info_secondaryText__M_aus">1997, драма</span>
                <span class="desktop-list-main-info_truncatedText__IMQRP">Россия • Режиссёр: Алексей Балабанов</span>
            </div>"#;
        let err = parse_listing(&document(entry), 1, CreditsStrategy::Delimiter).unwrap_err();
        assert!(matches!(err, KinoError::ElementNotFound(_)));
    }

    #[test]
    fn test_unparseable_year_propagates() {
        let entry = r#"
            <div data-tid="679d3e26">
                <span class="styles_mainTitle__IFQyZ styles_activeMovieTittle__kJdJj">Брат</span>
                <span class="desktop-list-main-info_secondaryText__M_aus">драма, боевик</span>
                <span class="desktop-list-main-info_truncatedText__IMQRP">Россия • Режиссёр: Алексей Балабанов</span>
            </div>"#;
        let err = parse_listing(&document(entry), 1, CreditsStrategy::Delimiter).unwrap_err();
        assert!(matches!(err, KinoError::FieldParse { field: "year", .. }));
    }

    #[test]
    fn test_whitespace_strategy_is_selectable() {
        let movies =
            parse_listing(&document(FULL_ENTRY), 1, CreditsStrategy::Whitespace).unwrap();
        assert_eq!(movies[0].country, "США");
        assert_eq!(movies[0].director, "Кэмерон");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = document(&format!("{FULL_ENTRY}{MINIMAL_ENTRY}"));
        let first = parse_listing(&html, 1, CreditsStrategy::Delimiter).unwrap();
        let second = parse_listing(&html, 1, CreditsStrategy::Delimiter).unwrap();
        assert_eq!(first, second);
    }
}
