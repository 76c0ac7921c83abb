use super::page_fetcher::{build_page_url, fetch_page};
use crate::config::ScraperConfig;
use crate::errors::{AppError, AppResult};
use crate::models::TenderRecord;
use crate::parser::parse_tender_listings;
use crate::ui;
use crate::utils::format_duration;
use std::fmt;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Inputs for one scraping run.
#[derive(Debug, Clone)]
pub struct ScrapeOptions<'a> {
    /// Page URL template with one `{}` placeholder for the page number
    pub url_template: &'a str,
    /// Cap on the total number of records collected
    pub max_records: usize,
    pub config: &'a ScraperConfig,
}

/// Why pagination stopped.
#[derive(Debug)]
pub enum StopReason {
    /// The record cap was reached.
    CapReached,
    /// A page contained no listing containers.
    EmptyPage,
    /// A page contained fewer listings than a full page.
    ShortPage,
    /// Every page in the budget was visited.
    PageBudgetExhausted,
    /// A page could not be fetched or parsed.
    Failed(AppError),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::CapReached => write!(f, "record cap reached"),
            StopReason::EmptyPage => write!(f, "page without listings"),
            StopReason::ShortPage => write!(f, "last page reached"),
            StopReason::PageBudgetExhausted => write!(f, "page budget exhausted"),
            StopReason::Failed(e) => write!(f, "page failed: {e}"),
        }
    }
}

/// Records collected by [`scrape_tenders`] and how the run ended.
#[derive(Debug)]
pub struct ScrapeOutcome {
    pub records: Vec<TenderRecord>,
    pub pages_fetched: usize,
    pub stop_reason: StopReason,
}

/// Upper bound on pages to visit: enough full pages for the cap, plus one spare.
pub fn page_budget(max_records: usize, records_per_page: usize) -> usize {
    max_records.div_ceil(records_per_page.max(1)) + 1
}

/// Fetches and parses one page.
async fn scrape_page(
    client: &reqwest::Client,
    url: &str,
    config: &ScraperConfig,
) -> AppResult<Vec<TenderRecord>> {
    let html = fetch_page(client, url).await?;
    parse_tender_listings(&html, &config.base_domain)
}

/// Walks the paginated search results until a stop condition is met.
///
/// Pages are fetched strictly one after another, starting at page 1. After every
/// successfully processed page that is not the last, the run pauses for the
/// configured page delay.
///
/// # Stop conditions
///
/// - The collected records reach `max_records` (mid-page if necessary; the result holds
///   exactly `max_records` records)
/// - A page has no listing containers
/// - A page has fewer listings than `full_page_threshold`
/// - The page budget from [`page_budget`] is used up
/// - A page fails to fetch or parse
///
/// Failures never discard records from earlier pages; they only end pagination.
pub async fn scrape_tenders(client: &reqwest::Client, options: &ScrapeOptions<'_>) -> ScrapeOutcome {
    let config = options.config;
    let max_records = options.max_records;
    let mut records: Vec<TenderRecord> = Vec::with_capacity(max_records.min(1024));
    let mut pages_fetched = 0;

    if max_records == 0 {
        return ScrapeOutcome {
            records,
            pages_fetched,
            stop_reason: StopReason::CapReached,
        };
    }

    let total_pages = page_budget(max_records, config.records_per_page);
    let start = Instant::now();
    let pb = ui::create_progress_bar(max_records as u64).ok();

    info!(
        max_records = max_records,
        page_budget = total_pages,
        "Starting pagination"
    );

    let mut stop_reason = StopReason::PageBudgetExhausted;

    for page in 1..=total_pages {
        if page > 1 {
            tokio::time::sleep(config.page_delay()).await;
        }

        let url = build_page_url(options.url_template, page);
        if let Some(pb) = &pb {
            pb.set_message(format!("Page {page}"));
        }

        let listings = match scrape_page(client, &url, config).await {
            Ok(listings) => listings,
            Err(e) => {
                warn!(page = page, url = %url, error = %e, "Stopping pagination after failed page");
                stop_reason = StopReason::Failed(e);
                break;
            }
        };
        pages_fetched += 1;

        let found = listings.len();
        debug!(page = page, listings = found, "Page parsed");

        if found == 0 {
            stop_reason = StopReason::EmptyPage;
            break;
        }

        let remaining = max_records - records.len();
        let taken = found.min(remaining);
        records.extend(listings.into_iter().take(taken));
        if let Some(pb) = &pb {
            pb.inc(taken as u64);
        }

        if records.len() >= max_records {
            stop_reason = StopReason::CapReached;
            break;
        }

        if found < config.full_page_threshold {
            stop_reason = StopReason::ShortPage;
            break;
        }
    }

    if let Some(pb) = &pb {
        pb.finish_with_message(format!("Collected {} tender(s)", records.len()));
    }

    info!(
        records = records.len(),
        pages = pages_fetched,
        stop_reason = %stop_reason,
        elapsed = %format_duration(start.elapsed()),
        "Pagination finished"
    );

    ScrapeOutcome {
        records,
        pages_fetched,
        stop_reason,
    }
}
