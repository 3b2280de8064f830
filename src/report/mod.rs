//! Report module for crawl results
//!
//! This module handles:
//! - The per-page and per-crawl data model
//! - Reducing pages into averaged metrics
//! - Rendering results as JSON, markdown, or a console summary

mod markdown;
pub mod stats;
mod types;

pub use markdown::{format_markdown_report, generate_markdown_report};
pub use stats::{compute_averages, format_statistics, print_statistics};
pub use types::{Averages, CrawlResult, CrawledImage, CrawledLink, CrawledPage, ErrorReport};

use crate::config::{OutputConfig, OutputFormat};
use crate::TrawlError;
use serde::Serialize;

/// A finished crawl ready to be rendered
#[derive(Debug, Clone)]
pub enum Report {
    /// Result of a single-page crawl
    Page(CrawledPage),
    /// Result of a recursive crawl
    Crawl(CrawlResult),
}

impl Report {
    /// Views the report as a crawl result
    ///
    /// A single page becomes a one-page result rooted at its own URL.
    pub fn to_crawl_result(&self) -> CrawlResult {
        match self {
            Self::Page(page) => CrawlResult::new(page.url.clone(), vec![page.clone()]),
            Self::Crawl(result) => result.clone(),
        }
    }
}

/// Renders a report in the configured output format
pub fn render_report(report: &Report, output: &OutputConfig) -> Result<String, TrawlError> {
    match output.format {
        OutputFormat::Json => match report {
            Report::Page(page) => to_json(page, output.pretty),
            Report::Crawl(result) => to_json(result, output.pretty),
        },
        OutputFormat::Markdown => Ok(format_markdown_report(
            &report.to_crawl_result(),
            chrono::Utc::now(),
        )),
        OutputFormat::Summary => Ok(format_statistics(&report.to_crawl_result())),
    }
}

/// Renders a failure as the structured error shape
pub fn render_error(err: &TrawlError, pretty: bool) -> Result<String, TrawlError> {
    to_json(&ErrorReport::from(err), pretty)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, TrawlError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
