//! Crawl frontier: pending URLs, visited set and page budget
//!
//! Discovered links are queued first-in first-out, so pages are visited
//! breadth-first in discovery order. A page slot is reserved when a URL is
//! queued, not when it is fetched; the budget therefore caps the number of
//! pages that can ever be fetched in one crawl.

use crate::report::CrawledLink;
use crate::url::normalize_href;
use std::collections::{HashSet, VecDeque};
use std::fmt;

/// Why a discovered link was not queued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The page budget is already fully reserved
    BudgetReached,
    /// The link points outside the crawl root
    External,
    /// Fragment-only link (`#section`)
    Fragment,
    /// The bare `/` self-link
    RootLink,
    /// The normalized URL was already queued or visited
    AlreadyVisited,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::BudgetReached => "page budget reached",
            Self::External => "external link",
            Self::Fragment => "fragment link",
            Self::RootLink => "root link",
            Self::AlreadyVisited => "already visited",
        };
        f.write_str(text)
    }
}

/// Outcome of offering a link to the frontier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkDecision {
    /// The normalized URL was queued for fetching
    Queue(String),
    /// The link was dropped
    Skip(SkipReason),
}

/// Work queue and visited set for a single crawl
#[derive(Debug)]
pub struct Frontier {
    pending: VecDeque<String>,
    visited: HashSet<String>,
    reserved: usize,
    max_pages: usize,
}

impl Frontier {
    /// Creates a frontier for a crawl rooted at `root_url`
    ///
    /// The root counts as visited and consumes one page of the budget.
    pub fn new(root_url: &str, max_pages: usize) -> Self {
        let mut visited = HashSet::new();
        visited.insert(normalize_href(root_url, root_url));

        Self {
            pending: VecDeque::new(),
            visited,
            reserved: 1,
            max_pages,
        }
    }

    /// Decides whether a link found on `page_url` becomes a new page
    ///
    /// Checks run in order: budget, external, fragment, bare `/`, then the
    /// visited set on the normalized URL.
    pub fn offer(&mut self, link: &CrawledLink, page_url: &str) -> LinkDecision {
        if self.is_budget_exhausted() {
            return LinkDecision::Skip(SkipReason::BudgetReached);
        }

        if link.is_external {
            return LinkDecision::Skip(SkipReason::External);
        }

        if link.href.starts_with('#') {
            return LinkDecision::Skip(SkipReason::Fragment);
        }

        if link.href == "/" {
            return LinkDecision::Skip(SkipReason::RootLink);
        }

        let url = normalize_href(&link.href, page_url);
        if !self.visited.insert(url.clone()) {
            return LinkDecision::Skip(SkipReason::AlreadyVisited);
        }

        self.reserved += 1;
        self.pending.push_back(url.clone());
        LinkDecision::Queue(url)
    }

    /// Takes the next pending URL
    pub fn next_url(&mut self) -> Option<String> {
        self.pending.pop_front()
    }

    /// Returns true once every page slot has been reserved
    pub fn is_budget_exhausted(&self) -> bool {
        self.reserved >= self.max_pages
    }

    /// Returns true if `url` has been queued or visited
    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    /// Pages visited or queued so far, root included
    pub fn pages_reserved(&self) -> usize {
        self.reserved
    }

    /// Number of URLs waiting to be fetched
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}
