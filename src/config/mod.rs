//! Configuration module for Trending-Digest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every section and key has a default, so an empty
//! file (or no file at all) yields a working configuration.
//!
//! # Example
//!
//! ```no_run
//! use trending_digest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("trending.toml")).unwrap();
//! println!("Records will be written to: {}", config.output.path.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, EnrichConfig, GithubConfig, HttpConfig, OutputConfig, RendererKind, Since,
    SourceConfig,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;
