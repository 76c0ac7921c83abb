use crate::constants::{
    DEFAULT_BASE_DOMAIN, DEFAULT_RECORDS_PER_PAGE, DEFAULT_USER_AGENT, FULL_PAGE_THRESHOLD,
};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Scraper tunables with all values filled in (no Options).
///
/// Every field has a default, so a TOML file only needs the keys it overrides.
/// Unknown keys are rejected to catch typos.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScraperConfig {
    /// `User-Agent` header sent with every page request
    pub user_agent: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Pause between successfully processed pages, in milliseconds
    pub page_delay_ms: u64,
    /// Expected listings on a full page; only sizes the page budget.
    pub records_per_page: usize,
    /// A page with fewer listings than this is treated as the last one.
    pub full_page_threshold: usize,
    /// Domain that relative listing links are resolved against
    pub base_domain: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: 10,
            page_delay_ms: 1000,
            records_per_page: DEFAULT_RECORDS_PER_PAGE,
            full_page_threshold: FULL_PAGE_THRESHOLD,
            base_domain: DEFAULT_BASE_DOMAIN.to_string(),
        }
    }
}

impl ScraperConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, and `InvalidInput` if the TOML is
    /// malformed, contains unknown keys, or fails validation.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ScraperConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants the pipeline relies on.
    pub fn validate(&self) -> AppResult<()> {
        if self.records_per_page == 0 {
            return Err(AppError::InvalidInput(
                "records_per_page must be greater than 0".into(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::InvalidInput(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }
        self.base_url()?;
        Ok(())
    }

    pub fn base_url(&self) -> AppResult<Url> {
        Ok(Url::parse(&self.base_domain)?)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }
}
