//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates:
//! - Validating crawl requests
//! - Fetching and analyzing the root page
//! - Expanding same-site links through the frontier under the page budget
//! - Reducing the visited pages into a `CrawlResult`
//!
//! Fetches run one at a time in frontier order. Any fetch or parse failure
//! aborts the whole crawl; no partial result is returned.

use crate::config::Config;
use crate::crawler::fetcher::{HttpFetcher, PageSource};
use crate::crawler::frontier::{Frontier, LinkDecision, SkipReason};
use crate::crawler::parser::analyze_page;
use crate::report::{CrawlResult, CrawledPage};
use crate::url::{validate_max_pages, validate_url};
use crate::TrawlError;
use std::time::Instant;

/// Main crawler coordinator structure
pub struct Coordinator<S = HttpFetcher> {
    source: S,
    max_pages_limit: u32,
}

impl Coordinator<HttpFetcher> {
    /// Creates a coordinator that fetches over HTTP
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(TrawlError)` - Failed to build the HTTP client
    pub fn new(config: &Config) -> Result<Self, TrawlError> {
        Ok(Self::with_source(HttpFetcher::new(config)?, config))
    }
}

impl<S: PageSource> Coordinator<S> {
    /// Creates a coordinator over an arbitrary page source
    pub fn with_source(source: S, config: &Config) -> Self {
        Self {
            source,
            max_pages_limit: config.crawler.max_pages_limit,
        }
    }

    /// Crawls a single page
    ///
    /// Links and images are classified against `url` itself.
    pub async fn crawl(&self, url: &str) -> Result<CrawledPage, TrawlError> {
        validate_url(url)?;

        tracing::info!("Crawling {}", url);
        self.crawl_page(url, url).await
    }

    /// Crawls `url` and up to `max_pages - 1` same-site pages reachable from it
    ///
    /// # Traversal
    ///
    /// 1. Validate the URL and page budget
    /// 2. Fetch and analyze the root page
    /// 3. Offer each page's links, in document order, to the frontier
    /// 4. Fetch queued URLs first-in first-out until the frontier is empty
    /// 5. Reduce the pages into averages
    ///
    /// # Returns
    ///
    /// * `Ok(CrawlResult)` - Pages in visit order, root first
    /// * `Err(TrawlError)` - Validation failed, or any page failed to load
    pub async fn crawl_recursive(
        &self,
        url: &str,
        max_pages: i64,
    ) -> Result<CrawlResult, TrawlError> {
        validate_url(url)?;
        let max_pages = validate_max_pages(max_pages, self.max_pages_limit)?;

        tracing::info!("Starting crawl of {} (max {} pages)", url, max_pages);
        let start_time = Instant::now();

        let mut frontier = Frontier::new(url, max_pages);
        let mut pages = Vec::with_capacity(max_pages);

        let root = self.crawl_page(url, url).await?;
        expand_links(&mut frontier, &root);
        pages.push(root);

        while let Some(next_url) = frontier.next_url() {
            tracing::debug!(
                "Processing URL: {} ({} pending)",
                next_url,
                frontier.pending_len()
            );

            let page = self.crawl_page(&next_url, url).await.inspect_err(|e| {
                tracing::error!("Aborting crawl of {}: {}", url, e);
            })?;
            expand_links(&mut frontier, &page);
            pages.push(page);
        }

        let result = CrawlResult::new(url, pages);

        tracing::info!(
            "Crawl completed: {} pages crawled in {:?}",
            result.pages_crawled(),
            start_time.elapsed()
        );

        Ok(result)
    }

    /// Fetches and analyzes one page
    async fn crawl_page(&self, url: &str, root_url: &str) -> Result<CrawledPage, TrawlError> {
        let fetched = self.source.fetch(url).await?;
        Ok(analyze_page(&fetched, root_url))
    }
}

/// Offers a page's links to the frontier, stopping once the budget is spent
fn expand_links(frontier: &mut Frontier, page: &CrawledPage) {
    for link in &page.links {
        match frontier.offer(link, &page.url) {
            LinkDecision::Queue(url) => {
                tracing::debug!("Queued {} (from {})", url, page.url);
            }
            LinkDecision::Skip(SkipReason::BudgetReached) => {
                tracing::debug!("Page budget reached while expanding {}", page.url);
                break;
            }
            LinkDecision::Skip(reason) => {
                tracing::debug!("Skipping {}: {}", link.href, reason);
            }
        }
    }
}
