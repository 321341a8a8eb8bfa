//! Trending-Digest: a daily digest of trending repositories
//!
//! This crate renders the trending listing page, enriches each listed
//! repository through the GitHub REST API (falling back to a README-derived
//! summary), and writes the consolidated records to a JSON file.

pub mod config;
pub mod enrich;
pub mod github;
pub mod http;
pub mod lister;
pub mod output;
pub mod pipeline;

use thiserror::Error;

/// Main error type for Trending-Digest operations
///
/// Only failures that abort a run live here. Per-repository enrichment
/// failures never surface as errors; they collapse into sentinel values.
#[derive(Debug, Error)]
pub enum TrendingError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to render {url}: {message}")]
    Render { url: String, message: String },

    #[error("chrome/chromium not detected on your system")]
    BrowserNotFound,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Trending-Digest operations
pub type Result<T> = std::result::Result<T, TrendingError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use enrich::{Enricher, OutputRecord};
pub use github::{DetailFetcher, ReadmeSummarizer, RepoDetails};
pub use lister::{ListedRepo, Lister};
pub use pipeline::{run, RunReport};
