//! HTML extraction of tender listings.
//!
//! The entry point is [`parse_tender_listings`], which turns one search results page
//! into an ordered list of [`crate::models::TenderRecord`] values.

mod fields;
mod listing;

// Re-export public API
pub use listing::parse_tender_listings;
