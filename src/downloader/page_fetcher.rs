use crate::config::ScraperConfig;
use crate::constants::PAGE_PLACEHOLDER;
use crate::errors::{AppError, AppResult};
use tracing::debug;

/// Builds the HTTP client used for every page request.
///
/// The client carries the configured `User-Agent` header and per-request timeout.
pub fn build_client(config: &ScraperConfig) -> AppResult<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout())
        .build()?;
    Ok(client)
}

/// Substitutes the page number into the URL template's `{}` placeholder.
pub fn build_page_url(template: &str, page: usize) -> String {
    template.replacen(PAGE_PLACEHOLDER, &page.to_string(), 1)
}

/// Checks that a URL template has exactly one `{}` page placeholder.
pub fn validate_url_template(template: &str) -> AppResult<()> {
    match template.matches(PAGE_PLACEHOLDER).count() {
        1 => Ok(()),
        n => Err(AppError::InvalidInput(format!(
            "URL template must contain exactly one '{PAGE_PLACEHOLDER}' placeholder, found {n}: {template}"
        ))),
    }
}

/// Fetches a single results page and returns its body as text.
///
/// # Errors
///
/// Returns `NetworkError` if the request fails, times out, or the server answers with a
/// non-success status. The status code is included in the message.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> AppResult<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to fetch {url}: {e}")))?;

    let status = response.status();
    let response = response.error_for_status().map_err(|e| {
        AppError::NetworkError(format!("HTTP {}: Failed to fetch {url}: {e}", status.as_u16()))
    })?;

    let body = response.text().await?;
    debug!(url = url, bytes = body.len(), "Fetched page");
    Ok(body)
}
