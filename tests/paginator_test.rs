//! Integration tests for pagination against a local HTTP server

#[path = "common/mod.rs"]
mod common;

use common::*;
use tender_scraper::downloader::{build_client, scrape_tenders, ScrapeOptions, StopReason};
use std::time::{Duration, Instant};
use tender_scraper::models::ProcurementType;

const PAGE_DELAY_MS: u64 = 200;

#[tokio::test]
async fn test_cap_reached_mid_page() {
    let mut server = mockito::Server::new_async().await;
    let page1 = mock_page(&mut server, 1, &listing_page(1, 15)).await;
    let page2 = page_mock(&mut server, 2, &listing_page(16, 15))
        .expect(0)
        .create_async()
        .await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 10,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert_eq!(outcome.records.len(), 10);
    assert_eq!(outcome.records[0].id, "1");
    assert_eq!(outcome.records[9].id, "10");
    assert_eq!(outcome.pages_fetched, 1);
    assert!(matches!(outcome.stop_reason, StopReason::CapReached));
    page1.assert_async().await;
    page2.assert_async().await;
}

#[tokio::test]
async fn test_cap_spanning_pages() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 20)).await;
    let _page2 = mock_page(&mut server, 2, &listing_page(21, 20)).await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 25,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert_eq!(outcome.records.len(), 25);
    assert_eq!(outcome.records[24].id, "25");
    assert_eq!(outcome.pages_fetched, 2);
    assert!(matches!(outcome.stop_reason, StopReason::CapReached));
}

#[tokio::test]
async fn test_empty_third_page_keeps_earlier_records() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 20)).await;
    let _page2 = mock_page(&mut server, 2, &listing_page(21, 20)).await;
    let page3 = mock_page(&mut server, 3, EMPTY_PAGE).await;
    let page4 = page_mock(&mut server, 4, &listing_page(41, 20))
        .expect(0)
        .create_async()
        .await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert_eq!(outcome.records.len(), 40);
    assert_eq!(outcome.pages_fetched, 3);
    assert!(matches!(outcome.stop_reason, StopReason::EmptyPage));
    page3.assert_async().await;
    page4.assert_async().await;
}

#[tokio::test]
async fn test_short_page_is_last_page() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 20)).await;
    let _page2 = mock_page(&mut server, 2, &listing_page(21, 14)).await;
    let page3 = page_mock(&mut server, 3, &listing_page(35, 20))
        .expect(0)
        .create_async()
        .await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert_eq!(outcome.records.len(), 34);
    assert!(matches!(outcome.stop_reason, StopReason::ShortPage));
    page3.assert_async().await;
}

#[tokio::test]
async fn test_failed_page_keeps_earlier_records() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 20)).await;
    let _page2 = server
        .mock("GET", "/extsearch")
        .match_query(mockito::Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(500)
        .create_async()
        .await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert_eq!(outcome.records.len(), 20);
    assert_eq!(outcome.pages_fetched, 1);
    assert!(matches!(outcome.stop_reason, StopReason::Failed(_)));
}

#[tokio::test]
async fn test_page_budget_bounds_full_pages() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 15)).await;
    let _page2 = mock_page(&mut server, 2, &listing_page(16, 15)).await;
    let _page3 = mock_page(&mut server, 3, &listing_page(31, 15)).await;
    let page4 = page_mock(&mut server, 4, &listing_page(46, 15))
        .expect(0)
        .create_async()
        .await;

    // ceil(100 / 50) + 1 = 3 pages
    let mut config = fast_config();
    config.records_per_page = 50;
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert_eq!(outcome.records.len(), 45);
    assert_eq!(outcome.pages_fetched, 3);
    assert!(matches!(outcome.stop_reason, StopReason::PageBudgetExhausted));
    page4.assert_async().await;
}

#[tokio::test]
async fn test_zero_cap_issues_no_request() {
    let mut server = mockito::Server::new_async().await;
    let page1 = page_mock(&mut server, 1, &listing_page(1, 15))
        .expect(0)
        .create_async()
        .await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 0,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.pages_fetched, 0);
    page1.assert_async().await;
}

#[tokio::test]
async fn test_records_carry_extracted_fields() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(7, 1)).await;

    let config = fast_config();
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 5,
        config: &config,
    };

    let outcome = scrape_tenders(&client, &options).await;

    let record = &outcome.records[0];
    assert_eq!(record.number, "7");
    assert_eq!(record.title, "Tender 7");
    assert_eq!(record.link, "https://rostender.info/tender/7");
    assert_eq!(record.price, "7000 ₽");
    assert_eq!(record.procurement_type, ProcurementType::Fz44);
}

#[tokio::test]
async fn test_single_page_run_does_not_pause() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 10)).await;

    let config = config_with_delay(PAGE_DELAY_MS);
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let start = Instant::now();
    let outcome = scrape_tenders(&client, &options).await;
    let elapsed = start.elapsed();

    assert_eq!(outcome.records.len(), 10);
    assert!(
        elapsed < Duration::from_millis(PAGE_DELAY_MS),
        "single page took {elapsed:?}"
    );
}

#[tokio::test]
async fn test_pause_between_pages_but_not_after_last() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 20)).await;
    let _page2 = mock_page(&mut server, 2, &listing_page(21, 20)).await;
    let _page3 = mock_page(&mut server, 3, &listing_page(41, 10)).await;

    let config = config_with_delay(PAGE_DELAY_MS);
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let start = Instant::now();
    let outcome = scrape_tenders(&client, &options).await;
    let elapsed = start.elapsed();

    assert_eq!(outcome.records.len(), 50);
    assert!(matches!(outcome.stop_reason, StopReason::ShortPage));
    assert!(
        elapsed >= Duration::from_millis(2 * PAGE_DELAY_MS),
        "three pages took {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_millis(3 * PAGE_DELAY_MS),
        "three pages took {elapsed:?}"
    );
}

#[tokio::test]
async fn test_no_pause_after_failed_page() {
    let mut server = mockito::Server::new_async().await;
    let _page1 = mock_page(&mut server, 1, &listing_page(1, 20)).await;
    let _page2 = server
        .mock("GET", "/extsearch")
        .match_query(mockito::Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(500)
        .create_async()
        .await;

    let config = config_with_delay(PAGE_DELAY_MS);
    let client = build_client(&config).unwrap();
    let template = url_template(&server);
    let options = ScrapeOptions {
        url_template: &template,
        max_records: 100,
        config: &config,
    };

    let start = Instant::now();
    let outcome = scrape_tenders(&client, &options).await;
    let elapsed = start.elapsed();

    assert_eq!(outcome.records.len(), 20);
    assert!(matches!(outcome.stop_reason, StopReason::Failed(_)));
    assert!(
        elapsed >= Duration::from_millis(PAGE_DELAY_MS),
        "failed second page took {elapsed:?}"
    );
    assert!(
        elapsed < Duration::from_millis(2 * PAGE_DELAY_MS),
        "failed second page took {elapsed:?}"
    );
}
