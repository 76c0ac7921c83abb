// Data source
pub const DEFAULT_SEARCH_URL: &str = "https://rostender.info/extsearch?page={}";
pub const DEFAULT_BASE_DOMAIN: &str = "https://rostender.info";
pub const PAGE_PLACEHOLDER: &str = "{}";

// Request identity
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// CLI defaults
pub const DEFAULT_MAX_RECORDS: usize = 100;
pub const DEFAULT_OUTPUT: &str = "tenders.csv";

// Pagination
pub const DEFAULT_RECORDS_PER_PAGE: usize = 20;
pub const FULL_PAGE_THRESHOLD: usize = 15;

// Selectors
pub const LISTING_SELECTOR: &str = "article.tender-row";
pub const NUMBER_SELECTOR: &str = "span.tender__number";
pub const DESCRIPTION_SELECTOR: &str = "a.tender-info__description";
pub const CATEGORY_SELECTOR: &str = "a.list-branches__link";
pub const REGION_SELECTOR: &str = "a.tender__region-link";
pub const PRICE_SELECTOR: &str = "div.starting-price__price";
pub const COUNTDOWN_SELECTOR: &str = "span.tender__countdown-text";
pub const FZ44_MARKER_SELECTOR: &str = "div.b-44";
pub const FZ223_MARKER_SELECTOR: &str = "div.b-223";
pub const COMMERCIAL_MARKER_SELECTOR: &str = "div.b-commerce";

// Patterns
pub const NUMBER_PATTERN: &str = r"№(\d+)";
pub const PRICE_FALLBACK_PATTERN: &str = r"(?i)(?:price|цена):\s*([\d\s]+(?:rub|руб)\.?)";
pub const DATE_PATTERN: &str = r"\d{2}\.\d{2}\.\d{4}";
pub const TIME_PATTERN: &str = r"\d{2}:\d{2}";

/// Shown by the site in place of a hidden starting price.
pub const HIDDEN_PRICE: &str = "—";
