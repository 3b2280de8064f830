//! Trawl: a budgeted same-site page crawler
//!
//! This crate fetches a starting page, extracts structural facts (title,
//! word count, images, links) and then follows same-site links breadth-first
//! up to a page budget, producing per-page reports plus averaged metrics.

pub mod config;
pub mod crawler;
pub mod report;
pub mod url;

use thiserror::Error;

/// Main error type for Trawl operations
#[derive(Debug, Error)]
pub enum TrawlError {
    #[error("{0}")]
    Validation(String),

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Failed to parse {url}: {message}")]
    Parse { url: String, message: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrawlError {
    /// Returns the HTTP-style status code reported alongside this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::Fetch { .. } | Self::Parse { .. } => 502,
            Self::Client(_) | Self::Config(_) | Self::Io(_) | Self::Json(_) => 500,
        }
    }

    /// Returns true if the error was raised before any page was fetched
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for Trawl operations
pub type Result<T> = std::result::Result<T, TrawlError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{Coordinator, HttpFetcher, PageSource};
pub use report::{Averages, CrawlResult, CrawledImage, CrawledLink, CrawledPage, ErrorReport};
pub use crate::url::{is_external, normalize_href};
