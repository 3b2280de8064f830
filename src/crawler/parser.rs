//! HTML page analyzer
//!
//! This module turns a fetched document into a `CrawledPage`:
//! - Page title (first `<title>`)
//! - Word count over the body's direct children, scripts excluded
//! - Unique image sources and link targets, classified internal/external

use crate::crawler::fetcher::FetchedPage;
use crate::report::{CrawledImage, CrawledLink, CrawledPage};
use crate::url::is_external;
use scraper::{Html, Selector};
use std::collections::HashSet;

/// Analyzes a fetched page
///
/// # Arguments
///
/// * `fetched` - The fetched page (URL, body and timing)
/// * `root_url` - The crawl root used to classify images and links
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use trawl::crawler::{analyze_page, FetchedPage};
///
/// let fetched = FetchedPage {
///     url: "https://a.test".to_string(),
///     body: r#"<html><head><title>Test</title></head><body><p>Hello there</p><a href="/x">x</a></body></html>"#.to_string(),
///     elapsed: Duration::from_millis(5),
/// };
/// let page = analyze_page(&fetched, "https://a.test");
/// assert_eq!(page.title, "Test");
/// assert_eq!(page.links.len(), 1);
/// ```
pub fn analyze_page(fetched: &FetchedPage, root_url: &str) -> CrawledPage {
    let document = Html::parse_document(&fetched.body);

    let images = collect_attribute(&document, "img", "src")
        .into_iter()
        .map(|src| CrawledImage {
            is_external: is_external(&src, root_url),
            src,
        })
        .collect();

    let links = collect_attribute(&document, "a", "href")
        .into_iter()
        .map(|href| CrawledLink {
            is_external: is_external(&href, root_url),
            href,
        })
        .collect();

    CrawledPage {
        url: fetched.url.clone(),
        load_time_in_ms: fetched.load_time_in_ms(),
        word_count: count_words(&body_text(&document)),
        title: extract_title(&document),
        images,
        links,
    }
}

/// Extracts the trimmed text of the first `<title>`, or an empty string
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Collects an attribute from every matching element, deduplicated
///
/// Elements without the attribute contribute an empty string. Order is the
/// first-seen document order.
fn collect_attribute(document: &Html, tag: &str, attribute: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(tag) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for element in document.select(&selector) {
        let value = element.value().attr(attribute).unwrap_or("");
        if seen.insert(value) {
            values.push(value.to_string());
        }
    }

    values
}

/// Concatenates the text of the body's direct non-script children
fn body_text(document: &Html) -> String {
    let Ok(selector) = Selector::parse("body > *:not(script)") else {
        return String::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Counts words in `text`
///
/// Whitespace runs collapse to one space, the text is lowercased and
/// trimmed, then split on single spaces. Text with no words still yields
/// one (empty) token.
pub fn count_words(text: &str) -> usize {
    let collapsed = text
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    collapsed.trim().split(' ').count()
}
