//! Aggregate statistics over crawled pages
//!
//! This module reduces per-page reports into averaged metrics and renders
//! a plain-text overview for the console.

use crate::report::types::{Averages, CrawlResult, CrawledPage};
use std::fmt::Write;

/// Averages each metric across `pages`, rounding up
///
/// Metrics: load time, word count, title length (bytes), image count and
/// link count. An empty slice yields all zeros.
pub fn compute_averages(pages: &[CrawledPage]) -> Averages {
    let count = pages.len();
    if count == 0 {
        return Averages::default();
    }

    let total_load_time: f64 = pages.iter().map(|p| p.load_time_in_ms).sum();
    let sum = |metric: fn(&CrawledPage) -> usize| pages.iter().map(metric).sum::<usize>();

    Averages {
        load_time_in_ms: (total_load_time / count as f64).ceil() as u64,
        word_count: ceil_div(sum(|p| p.word_count), count),
        title_length: ceil_div(sum(|p| p.title.len()), count),
        images: ceil_div(sum(|p| p.images.len()), count),
        links: ceil_div(sum(|p| p.links.len()), count),
    }
}

fn ceil_div(total: usize, count: usize) -> u64 {
    total.div_ceil(count) as u64
}

/// Formats crawl statistics as plain text
pub fn format_statistics(result: &CrawlResult) -> String {
    let averages = result.averages();
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "=== Crawl Statistics ===\n");
    let _ = writeln!(out, "Root URL: {}", result.root_url());
    let _ = writeln!(out, "Pages crawled: {}\n", result.pages_crawled());

    let _ = writeln!(out, "Averages:");
    let _ = writeln!(out, "  Load time: {}ms", averages.load_time_in_ms);
    let _ = writeln!(out, "  Word count: {}", averages.word_count);
    let _ = writeln!(out, "  Title length: {}", averages.title_length);
    let _ = writeln!(out, "  Images: {}", averages.images);
    let _ = writeln!(out, "  Links: {}\n", averages.links);

    let _ = writeln!(out, "Pages:");
    for page in result.pages() {
        let _ = writeln!(
            out,
            "  - {} ({:.1}ms, {} words, {} images, {} links)",
            page.url,
            page.load_time_in_ms,
            page.word_count,
            page.images.len(),
            page.links.len()
        );
    }

    out
}

/// Prints statistics to stdout
pub fn print_statistics(result: &CrawlResult) {
    print!("{}", format_statistics(result));
}
