//! Crawl report data model
//!
//! Field names serialize in camelCase (`loadTimeInMs`, `isExternal`,
//! `pagesCrawled`, ...) so reports keep the established JSON shape.

use crate::report::stats::compute_averages;
use crate::TrawlError;
use serde::Serialize;

/// An image reference found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawledImage {
    pub src: String,
    pub is_external: bool,
}

/// A link reference found on a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawledLink {
    pub href: String,
    pub is_external: bool,
}

/// One fetched and analyzed document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawledPage {
    /// The URL used to fetch the page
    pub url: String,

    /// Fetch duration in fractional milliseconds
    pub load_time_in_ms: f64,

    /// Number of whitespace-separated tokens in the body text
    pub word_count: usize,

    /// Text of the first `<title>`, empty if absent
    pub title: String,

    /// Unique image sources in first-seen order
    pub images: Vec<CrawledImage>,

    /// Unique link targets in first-seen order
    pub links: Vec<CrawledLink>,
}

impl CrawledPage {
    /// Number of images pointing outside the crawl root
    pub fn external_images(&self) -> usize {
        self.images.iter().filter(|i| i.is_external).count()
    }

    /// Number of links pointing outside the crawl root
    pub fn external_links(&self) -> usize {
        self.links.iter().filter(|l| l.is_external).count()
    }
}

/// Ceiling of the per-page mean of each metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Averages {
    pub load_time_in_ms: u64,
    pub word_count: u64,
    pub title_length: u64,
    pub images: u64,
    pub links: u64,
}

/// The outcome of one recursive crawl
///
/// `pages_crawled` and `averages` are derived from `pages` at construction
/// and cannot be changed independently.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    #[serde(rename = "url")]
    root_url: String,
    pages_crawled: usize,
    averages: Averages,
    pages: Vec<CrawledPage>,
}

impl CrawlResult {
    /// Builds a result from pages in visit order (root first)
    pub fn new(root_url: impl Into<String>, pages: Vec<CrawledPage>) -> Self {
        Self {
            root_url: root_url.into(),
            pages_crawled: pages.len(),
            averages: compute_averages(&pages),
            pages,
        }
    }

    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    pub fn pages_crawled(&self) -> usize {
        self.pages_crawled
    }

    pub fn averages(&self) -> &Averages {
        &self.averages
    }

    pub fn pages(&self) -> &[CrawledPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<CrawledPage> {
        self.pages
    }
}

/// Structured failure reported to callers instead of a raw error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    pub error: String,
    pub status: u16,
}

impl From<&TrawlError> for ErrorReport {
    fn from(err: &TrawlError) -> Self {
        Self {
            error: err.to_string(),
            status: err.status_code(),
        }
    }
}
