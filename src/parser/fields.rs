//! Optional lookups used to derive each output field from a listing container.
//!
//! Every lookup returns `Option<String>`; the fallback for a missing value is
//! applied once, by the `resolve_*` functions below, so each default appears in
//! exactly one place.

use crate::models::NOT_SPECIFIED;
use regex::Regex;
use scraper::{ElementRef, Selector};
use url::Url;

/// First descendant of `scope` matching `selector`, in document order.
pub(crate) fn find_first<'a>(scope: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    scope.select(selector).next()
}

pub(crate) fn has_descendant(scope: ElementRef<'_>, selector: &Selector) -> bool {
    find_first(scope, selector).is_some()
}

/// Full text content of an element, untrimmed.
pub(crate) fn raw_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}

/// Trimmed text content of an element.
pub(crate) fn trimmed_text(element: ElementRef<'_>) -> String {
    raw_text(element).trim().to_string()
}

/// Trimmed text of the first descendant matching `selector`.
pub(crate) fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    find_first(scope, selector).map(trimmed_text)
}

/// Capture group `group` of the first match of `pattern` in `text`.
pub(crate) fn capture(pattern: &Regex, text: &str, group: usize) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|c| c.get(group))
        .map(|m| m.as_str().trim().to_string())
}

/// Whole first match of `pattern` in `text`.
pub(crate) fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_string())
}

pub(crate) fn resolve_id(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

pub(crate) fn resolve_number(value: Option<String>, id: &str) -> String {
    value.unwrap_or_else(|| id.to_string())
}

pub(crate) fn resolve_text(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Price has no value when the lookup found nothing or found only whitespace.
pub(crate) fn resolve_price(value: Option<String>) -> String {
    value
        .filter(|price| !price.is_empty())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

pub(crate) fn resolve_deadline_part(value: Option<String>) -> String {
    value.unwrap_or_default()
}

/// Resolves `href` against the base domain, or points at the domain root with `#`.
///
/// An empty or bare `#` href counts as missing.
pub(crate) fn resolve_link(href: Option<&str>, base_domain: &str) -> String {
    let resolved = href
        .map(str::trim)
        .filter(|href| !href.is_empty() && *href != "#")
        .and_then(|href| Url::parse(base_domain).ok()?.join(href).ok());

    match resolved {
        Some(url) => url.to_string(),
        None => format!("{}#", base_domain.trim_end_matches('/')),
    }
}
