//! tender-scraper library
//!
//! This crate provides the core functionality for the `tender-scraper` binary.
//! Keep the crate root minimal; implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle the stages of the scraping pipeline:
//!
//! - [`downloader`] - Fetches search result pages and drives pagination
//! - [`parser`] - Extracts tender records from a page's HTML
//! - [`writer`] - Exports collected records to CSV
//! - [`cli`] - Command-line interface for orchestrating the workflow
//! - [`config`] - Scraper settings, optionally loaded from TOML
//! - [`models`] - Tender record and procurement type
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! ```no_run
//! use tender_scraper::config::ScraperConfig;
//! use tender_scraper::downloader::{build_client, scrape_tenders, ScrapeOptions};
//! use tender_scraper::errors::AppResult;
//! use tender_scraper::writer::write_tenders_csv;
//!
//! # async fn example() -> AppResult<()> {
//! let config = ScraperConfig::default();
//! let client = build_client(&config)?;
//! let options = ScrapeOptions {
//!     url_template: "https://rostender.info/extsearch?page={}",
//!     max_records: 40,
//!     config: &config,
//! };
//! let outcome = scrape_tenders(&client, &options).await;
//! write_tenders_csv("tenders.csv".as_ref(), &outcome.records)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod models;
pub mod parser;
pub mod ui;
pub mod utils;
pub mod writer;
