//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building HTTP clients with proper user agent strings and timeouts
//! - GET requests with load-time measurement
//! - Error classification into fetch and parse failures

use crate::config::Config;
use crate::TrawlError;
use reqwest::{header::CONTENT_TYPE, redirect::Policy, Client};
use std::future::Future;
use std::time::{Duration, Instant};

/// Maximum redirect hops followed for a single fetch
const MAX_REDIRECTS: usize = 10;

/// Raw result of fetching one URL
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: String,

    /// Decoded response body
    pub body: String,

    /// Time from sending the request to receiving the full body
    pub elapsed: Duration,
}

impl FetchedPage {
    /// Load time in fractional milliseconds
    pub fn load_time_in_ms(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1_000_000.0
    }
}

/// Anything that can retrieve a page body for a URL
///
/// The coordinator is generic over this so the transport can be swapped
/// out, e.g. for an in-memory site in tests.
pub trait PageSource {
    /// Fetches `url`, failing with `TrawlError::Fetch` or `TrawlError::Parse`
    fn fetch(&self, url: &str) -> impl Future<Output = Result<FetchedPage, TrawlError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use trawl::config::Config;
/// use trawl::crawler::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.user_agent_string())
        .timeout(Duration::from_secs(config.crawler.timeout_secs))
        .connect_timeout(Duration::from_secs(config.crawler.connect_timeout_secs))
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page source backed by a reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a client built from `config`
    pub fn new(config: &Config) -> Result<Self, TrawlError> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Wraps an existing client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpFetcher {
    /// Fetches a URL and times the transfer
    ///
    /// # Error Mapping
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | Timeout | Fetch ("Request timeout") |
    /// | Connection refused / DNS failure | Fetch ("Connection refused") |
    /// | Non-2xx status | Fetch ("HTTP <code>") |
    /// | Body read failure | Fetch |
    /// | Content-Type present and not HTML | Parse |
    async fn fetch(&self, url: &str) -> Result<FetchedPage, TrawlError> {
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(url, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrawlError::Fetch {
                url: url.to_string(),
                message: format!("HTTP {}", status.as_u16()),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.text().await.map_err(|e| fetch_error(url, &e))?;
        let elapsed = start.elapsed();

        if let Some(content_type) = content_type {
            if !is_html_content_type(&content_type) {
                return Err(TrawlError::Parse {
                    url: url.to_string(),
                    message: format!("Expected HTML, got {}", content_type),
                });
            }
        }

        tracing::debug!("Fetched {} in {:?}", url, elapsed);

        Ok(FetchedPage {
            url: url.to_string(),
            body,
            elapsed,
        })
    }
}

/// Returns true if a Content-Type header value denotes an HTML document
fn is_html_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}

/// Classifies a transport error
fn fetch_error(url: &str, e: &reqwest::Error) -> TrawlError {
    let message = if e.is_timeout() {
        "Request timeout".to_string()
    } else if e.is_connect() {
        "Connection refused".to_string()
    } else {
        e.to_string()
    };

    TrawlError::Fetch {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_fetcher_new() {
        assert!(HttpFetcher::new(&Config::default()).is_ok());
    }

    #[test]
    fn test_is_html_content_type() {
        assert!(is_html_content_type("text/html"));
        assert!(is_html_content_type("text/html; charset=utf-8"));
        assert!(is_html_content_type("application/xhtml+xml"));
        assert!(is_html_content_type("TEXT/HTML"));
        assert!(!is_html_content_type("application/json"));
        assert!(!is_html_content_type("image/png"));
    }

    #[test]
    fn test_load_time_in_ms() {
        let page = FetchedPage {
            url: "https://a.test".to_string(),
            body: String::new(),
            elapsed: Duration::from_micros(1500),
        };
        assert!((page.load_time_in_ms() - 1.5).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host() {
        let fetcher = HttpFetcher::new(&Config::default()).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/").await;
        assert!(matches!(result, Err(TrawlError::Fetch { .. })));
    }
}
