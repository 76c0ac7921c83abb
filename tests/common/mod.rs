//! Common test utilities for integration tests

use mockito::{Matcher, Mock, ServerGuard};
use tender_scraper::config::ScraperConfig;

/// Builds a results page with `count` listing containers whose ids start at `first_id`.
#[allow(dead_code)]
pub fn listing_page(first_id: usize, count: usize) -> String {
    let articles: String = (first_id..first_id + count)
        .map(|id| {
            format!(
                r#"<article class="tender-row" id="{id}">
                     <span class="tender__number">№{id}</span>
                     <a class="tender-info__description" href="/tender/{id}">Tender {id}</a>
                     <a class="list-branches__link">Construction</a>
                     <a class="tender__region-link">Moscow</a>
                     <div class="starting-price__price">{id}000 ₽</div>
                     <span class="tender__countdown-text">Ends: 15.03.2025 14:30</span>
                     <div class="b-44"></div>
                   </article>"#
            )
        })
        .collect();
    format!("<html><body><section class=\"results\">{articles}</section></body></html>")
}

/// Page with no listing containers
#[allow(dead_code)]
pub const EMPTY_PAGE: &str = "<html><body><p>Nothing found</p></body></html>";

/// Mock answering `GET /extsearch?page={page}` with `body`, not yet registered.
#[allow(dead_code)]
pub fn page_mock(server: &mut ServerGuard, page: usize, body: &str) -> Mock {
    server
        .mock("GET", "/extsearch")
        .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(body)
}

/// Registers a mock answering `GET /extsearch?page={page}` with `body`.
#[allow(dead_code)]
pub async fn mock_page(server: &mut ServerGuard, page: usize, body: &str) -> Mock {
    page_mock(server, page, body).create_async().await
}

/// URL template pointing at the mock server.
#[allow(dead_code)]
pub fn url_template(server: &ServerGuard) -> String {
    format!("{}/extsearch?page={{}}", server.url())
}

/// Config without the inter-page pause.
#[allow(dead_code)]
pub fn fast_config() -> ScraperConfig {
    config_with_delay(0)
}

/// Config with the given inter-page pause.
#[allow(dead_code)]
pub fn config_with_delay(page_delay_ms: u64) -> ScraperConfig {
    ScraperConfig {
        page_delay_ms,
        ..ScraperConfig::default()
    }
}
