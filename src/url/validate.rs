use super::has_http_scheme;
use crate::TrawlError;

/// Validates a crawl start URL
///
/// The URL must be non-empty and start with an `http`-style scheme.
pub fn validate_url(url: &str) -> Result<(), TrawlError> {
    if url.is_empty() {
        return Err(TrawlError::Validation("URL is required".to_string()));
    }

    if !has_http_scheme(url) {
        return Err(TrawlError::Validation(
            "URL must start with http".to_string(),
        ));
    }

    Ok(())
}

/// Validates a requested page budget against the configured ceiling
pub fn validate_max_pages(max_pages: i64, ceiling: u32) -> Result<usize, TrawlError> {
    if max_pages < 1 {
        return Err(TrawlError::Validation(
            "Max pages must be greater than 0".to_string(),
        ));
    }

    if max_pages > i64::from(ceiling) {
        return Err(TrawlError::Validation(format!(
            "Max pages must not exceed {}",
            ceiling
        )));
    }

    usize::try_from(max_pages)
        .map_err(|_| TrawlError::Validation(format!("Max pages out of range: {}", max_pages)))
}
