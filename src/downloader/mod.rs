//! Page fetching and pagination over the tender search results.
//!
//! [`scrape_tenders`] drives the whole run: it fetches pages one by one with
//! [`fetch_page`], extracts their listings, and stops on the first terminal condition.

mod page_fetcher;
mod paginator;

// Re-export public API
pub use page_fetcher::{build_client, build_page_url, fetch_page, validate_url_template};
pub use paginator::{page_budget, scrape_tenders, ScrapeOptions, ScrapeOutcome, StopReason};
