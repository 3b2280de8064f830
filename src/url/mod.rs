//! URL handling module for Trawl
//!
//! This module provides href normalization, external-link classification
//! and the validation rules applied to crawl requests.

mod classify;
mod normalize;
mod validate;

// Re-export main functions
pub use classify::{is_external, LinkKind};
pub use normalize::{collapse_slashes, normalize_href};
pub use validate::{validate_max_pages, validate_url};

/// Returns true if the reference carries an `http`-style scheme prefix
///
/// This is a literal prefix test: `https://...`, `http://...` and even
/// `httpfoo` all count as absolute.
pub fn has_http_scheme(reference: &str) -> bool {
    reference.starts_with("http")
}
