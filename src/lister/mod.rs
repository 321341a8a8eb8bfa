//! Lister module for the trending listing page
//!
//! This module renders the listing page once and extracts the ordered
//! sequence of repositories from it:
//! - Render capabilities (plain HTTP, headless browser)
//! - Row extraction from the rendered document

mod parser;
mod renderer;

pub use parser::parse_trending;
pub use renderer::{ChromeRenderer, HttpRenderer, PageRenderer};

use crate::TrendingError;
use url::Url;

/// A repository as it appears on the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedRepo {
    /// Repository owner (user or organization)
    pub owner: String,

    /// Repository name
    pub name: String,

    /// Absolute canonical URL
    pub url: String,
}

impl ListedRepo {
    /// Full repository name in "owner/name" format
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Renders the listing page and extracts repositories from it
pub struct Lister {
    renderer: Box<dyn PageRenderer>,
    url: Url,
    origin: String,
}

impl Lister {
    /// Creates a new lister
    ///
    /// # Arguments
    ///
    /// * `renderer` - The capability used to render the page
    /// * `url` - The full listing URL
    /// * `origin` - Canonical origin used to absolutize repository links
    pub fn new(renderer: Box<dyn PageRenderer>, url: Url, origin: impl Into<String>) -> Self {
        Self {
            renderer,
            url,
            origin: origin.into(),
        }
    }

    /// Renders the page and returns the listed repositories in page order
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ListedRepo>)` - The extracted rows (possibly empty)
    /// * `Err(TrendingError::Render)` - The page could not be rendered
    pub async fn list(&self) -> Result<Vec<ListedRepo>, TrendingError> {
        tracing::info!("Rendering listing page: {}", self.url);
        let html = self.renderer.render(&self.url).await?;

        let repos = parse_trending(&html, &self.origin);
        if repos.is_empty() {
            tracing::warn!("No repositories found on {}", self.url);
        } else {
            tracing::info!("Listed {} repositories", repos.len());
        }

        Ok(repos)
    }
}
