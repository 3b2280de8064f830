//! Crawler module for page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with load-time measurement
//! - HTML analysis (title, word count, images, links)
//! - Frontier management under a page budget
//! - Overall crawl coordination

mod coordinator;
mod fetcher;
mod frontier;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageSource};
pub use frontier::{Frontier, LinkDecision, SkipReason};
pub use parser::{analyze_page, count_words};

use crate::config::Config;
use crate::report::{CrawlResult, CrawledPage};
use crate::TrawlError;

/// Crawls a single page over HTTP
///
/// # Example
///
/// ```no_run
/// use trawl::config::Config;
/// use trawl::crawler::crawl;
///
/// # async fn example() -> Result<(), trawl::TrawlError> {
/// let page = crawl(&Config::default(), "https://example.com").await?;
/// println!("{} words", page.word_count);
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, url: &str) -> Result<CrawledPage, TrawlError> {
    Coordinator::new(config)?.crawl(url).await
}

/// Runs a budgeted recursive crawl over HTTP
///
/// # Example
///
/// ```no_run
/// use trawl::config::Config;
/// use trawl::crawler::crawl_recursive;
///
/// # async fn example() -> Result<(), trawl::TrawlError> {
/// let result = crawl_recursive(&Config::default(), "https://example.com", 10).await?;
/// println!("{} pages", result.pages_crawled());
/// # Ok(())
/// # }
/// ```
pub async fn crawl_recursive(
    config: &Config,
    url: &str,
    max_pages: i64,
) -> Result<CrawlResult, TrawlError> {
    Coordinator::new(config)?
        .crawl_recursive(url, max_pages)
        .await
}
