use super::fields::{
    capture, find_first, first_match, first_text, has_descendant, raw_text, resolve_deadline_part,
    resolve_id, resolve_link, resolve_number, resolve_price, resolve_text, trimmed_text,
};
use crate::constants::*;
use crate::errors::{AppError, AppResult};
use crate::models::{ProcurementType, TenderRecord};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::OnceLock;
use tracing::debug;

/// CSS selectors for a listing container and its sub-elements.
/// Compiled once and reused for every page.
struct ListingSelectors {
    listing: Selector,
    number: Selector,
    description: Selector,
    category: Selector,
    region: Selector,
    price: Selector,
    countdown: Selector,
    /// Checked in order; the first marker present wins.
    markers: [(Selector, ProcurementType); 3],
}

struct ListingPatterns {
    number: Regex,
    price_fallback: Regex,
    date: Regex,
    time: Regex,
}

static SELECTORS: OnceLock<ListingSelectors> = OnceLock::new();
static PATTERNS: OnceLock<ListingPatterns> = OnceLock::new();

fn compile_selector(css: &str) -> AppResult<Selector> {
    Selector::parse(css).map_err(|e| AppError::SelectorError(format!("{css}: {e:?}")))
}

impl ListingSelectors {
    fn compile() -> AppResult<Self> {
        Ok(Self {
            listing: compile_selector(LISTING_SELECTOR)?,
            number: compile_selector(NUMBER_SELECTOR)?,
            description: compile_selector(DESCRIPTION_SELECTOR)?,
            category: compile_selector(CATEGORY_SELECTOR)?,
            region: compile_selector(REGION_SELECTOR)?,
            price: compile_selector(PRICE_SELECTOR)?,
            countdown: compile_selector(COUNTDOWN_SELECTOR)?,
            markers: [
                (compile_selector(FZ44_MARKER_SELECTOR)?, ProcurementType::Fz44),
                (compile_selector(FZ223_MARKER_SELECTOR)?, ProcurementType::Fz223),
                (
                    compile_selector(COMMERCIAL_MARKER_SELECTOR)?,
                    ProcurementType::Commercial,
                ),
            ],
        })
    }

    fn cached() -> AppResult<&'static Self> {
        if let Some(selectors) = SELECTORS.get() {
            return Ok(selectors);
        }
        let compiled = Self::compile()?;
        Ok(SELECTORS.get_or_init(|| compiled))
    }
}

impl ListingPatterns {
    fn compile() -> AppResult<Self> {
        Ok(Self {
            number: Regex::new(NUMBER_PATTERN)?,
            price_fallback: Regex::new(PRICE_FALLBACK_PATTERN)?,
            date: Regex::new(DATE_PATTERN)?,
            time: Regex::new(TIME_PATTERN)?,
        })
    }

    fn cached() -> AppResult<&'static Self> {
        if let Some(patterns) = PATTERNS.get() {
            return Ok(patterns);
        }
        let compiled = Self::compile()?;
        Ok(PATTERNS.get_or_init(|| compiled))
    }
}

/// Parses one search results page and extracts a record per listing container.
///
/// Containers are `article.tender-row` elements, returned in document order. Missing
/// sub-elements never fail the page; each field falls back to its default instead.
///
/// # Arguments
///
/// * `html` - Raw HTML of the page
/// * `base_domain` - Domain that relative listing links are resolved against
///
/// # Errors
///
/// Returns `SelectorError` or `RegexError` if the built-in selectors or patterns fail
/// to compile.
pub fn parse_tender_listings(html: &str, base_domain: &str) -> AppResult<Vec<TenderRecord>> {
    let selectors = ListingSelectors::cached()?;
    let patterns = ListingPatterns::cached()?;
    let document = Html::parse_document(html);

    let records: Vec<TenderRecord> = document
        .select(&selectors.listing)
        .map(|listing| extract_record(listing, selectors, patterns, base_domain))
        .collect();

    debug!(listings = records.len(), "Parsed listing containers");
    Ok(records)
}

fn extract_record(
    listing: ElementRef<'_>,
    selectors: &ListingSelectors,
    patterns: &ListingPatterns,
    base_domain: &str,
) -> TenderRecord {
    let id = resolve_id(listing.value().attr("id"));

    let number = first_text(listing, &selectors.number)
        .and_then(|label| capture(&patterns.number, &label, 1));
    let number = resolve_number(number, &id);

    let description = find_first(listing, &selectors.description);
    let title = resolve_text(description.map(trimmed_text));
    let link = resolve_link(
        description.and_then(|anchor| anchor.value().attr("href")),
        base_domain,
    );

    let category = resolve_text(first_text(listing, &selectors.category));
    let region = resolve_text(first_text(listing, &selectors.region));

    let price = match first_text(listing, &selectors.price) {
        Some(shown) if shown == HIDDEN_PRICE => description
            .map(raw_text)
            .and_then(|text| capture(&patterns.price_fallback, &text, 1)),
        shown => shown,
    };
    let price = resolve_price(price);

    let countdown = find_first(listing, &selectors.countdown).map(raw_text);
    let end_date = resolve_deadline_part(
        countdown
            .as_deref()
            .and_then(|text| first_match(&patterns.date, text)),
    );
    let end_time = resolve_deadline_part(
        countdown
            .as_deref()
            .and_then(|text| first_match(&patterns.time, text)),
    );

    let procurement_type = selectors
        .markers
        .iter()
        .find(|(marker, _)| has_descendant(listing, marker))
        .map(|(_, kind)| *kind)
        .unwrap_or_default();

    TenderRecord {
        id,
        number,
        title,
        link,
        category,
        region,
        price,
        end_date,
        end_time,
        procurement_type,
    }
}
