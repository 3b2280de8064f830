//! Markdown report generation
//!
//! This module renders a crawl result as a human-readable markdown document
//! with the averaged metrics followed by a per-page breakdown.

use crate::report::types::CrawlResult;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes a markdown report for `result` to `output_path`
pub fn generate_markdown_report(result: &CrawlResult, output_path: &Path) -> std::io::Result<()> {
    let markdown = format_markdown_report(result, Utc::now());

    let mut file = File::create(output_path)?;
    file.write_all(markdown.as_bytes())?;

    Ok(())
}

/// Formats a crawl result as markdown
///
/// # Arguments
///
/// * `result` - The crawl result to render
/// * `generated_at` - Timestamp written into the report header
pub fn format_markdown_report(result: &CrawlResult, generated_at: DateTime<Utc>) -> String {
    let mut md = String::new();

    md.push_str("# Crawl Report\n\n");
    md.push_str(&format!("- **Root URL**: {}\n", result.root_url()));
    md.push_str(&format!("- **Pages Crawled**: {}\n", result.pages_crawled()));
    md.push_str(&format!(
        "- **Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    let averages = result.averages();
    md.push_str("## Averages\n\n");
    md.push_str("| Metric | Average |\n");
    md.push_str("|--------|---------|\n");
    md.push_str(&format!("| Load Time (ms) | {} |\n", averages.load_time_in_ms));
    md.push_str(&format!("| Word Count | {} |\n", averages.word_count));
    md.push_str(&format!("| Title Length | {} |\n", averages.title_length));
    md.push_str(&format!("| Images | {} |\n", averages.images));
    md.push_str(&format!("| Links | {} |\n\n", averages.links));

    md.push_str("## Pages\n\n");
    md.push_str("| # | URL | Title | Load Time (ms) | Words | Images (external) | Links (external) |\n");
    md.push_str("|---|-----|-------|----------------|-------|-------------------|------------------|\n");

    for (index, page) in result.pages().iter().enumerate() {
        md.push_str(&format!(
            "| {} | {} | {} | {:.2} | {} | {} ({}) | {} ({}) |\n",
            index + 1,
            page.url,
            escape_cell(&page.title),
            page.load_time_in_ms,
            page.word_count,
            page.images.len(),
            page.external_images(),
            page.links.len(),
            page.external_links()
        ));
    }

    md
}

/// Keeps table cells on one line and escapes column separators
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::{CrawledLink, CrawledPage};
    use chrono::TimeZone;

    fn create_test_result() -> CrawlResult {
        let pages = vec![
            CrawledPage {
                url: "https://a.test".to_string(),
                load_time_in_ms: 120.0,
                word_count: 10,
                title: "Home | A".to_string(),
                images: vec![],
                links: vec![
                    CrawledLink {
                        href: "/b".to_string(),
                        is_external: false,
                    },
                    CrawledLink {
                        href: "https://elsewhere.test".to_string(),
                        is_external: true,
                    },
                ],
            },
            CrawledPage {
                url: "https://a.test/b".to_string(),
                load_time_in_ms: 80.0,
                word_count: 15,
                title: "B".to_string(),
                images: vec![],
                links: vec![],
            },
        ];
        CrawlResult::new("https://a.test", pages)
    }

    fn generated_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_format_markdown_report() {
        let markdown = format_markdown_report(&create_test_result(), generated_at());

        assert!(markdown.contains("# Crawl Report"));
        assert!(markdown.contains("- **Pages Crawled**: 2"));
        assert!(markdown.contains("- **Generated**: 2024-01-01 00:00:00 UTC"));
        assert!(markdown.contains("| Word Count | 13 |"));
        assert!(markdown.contains("| Load Time (ms) | 100 |"));
    }

    #[test]
    fn test_markdown_lists_pages_in_order() {
        let markdown = format_markdown_report(&create_test_result(), generated_at());

        let first = markdown.find("| 1 | https://a.test |").unwrap();
        let second = markdown.find("| 2 | https://a.test/b |").unwrap();
        assert!(first < second);
        assert!(markdown.contains("| 2 (1) |"));
    }

    #[test]
    fn test_markdown_escapes_title_pipes() {
        let markdown = format_markdown_report(&create_test_result(), generated_at());
        assert!(markdown.contains("Home \\| A"));
    }

    #[test]
    fn test_generate_markdown_report_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.md");

        generate_markdown_report(&create_test_result(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("# Crawl Report"));
    }
}
