use super::has_http_scheme;

/// Where a discovered reference points relative to the crawl root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// Relative, or absolute under the root URL
    Internal,
    /// Absolute and outside the root URL
    External,
}

impl LinkKind {
    /// Classifies a reference against the crawl's root URL
    pub fn of(reference: &str, root_url: &str) -> Self {
        if has_http_scheme(reference) && !reference.starts_with(root_url) {
            Self::External
        } else {
            Self::Internal
        }
    }

    /// Returns true if the reference leaves the crawled site
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External)
    }
}

/// Returns true if `reference` is external to `root_url`
///
/// The test is a literal prefix comparison, not a host comparison:
/// `https://a.test.evil/` is internal to a crawl rooted at `https://a.test`.
///
/// # Examples
///
/// ```
/// use trawl::url::is_external;
///
/// assert!(is_external("https://b.test/", "https://a.test/"));
/// assert!(!is_external("https://a.test/docs", "https://a.test/"));
/// assert!(!is_external("/docs", "https://a.test/"));
/// ```
pub fn is_external(reference: &str, root_url: &str) -> bool {
    LinkKind::of(reference, root_url).is_external()
}
