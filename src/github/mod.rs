//! GitHub REST API fetchers
//!
//! This module contains the two enrichment calls made per repository:
//! - Repository metadata (description, language, stars, topics)
//! - Raw README text, reduced to a short summary
//!
//! Both collapse every failure (missing token, non-success status,
//! transport or decode error) into "no data". Callers only ever branch on
//! presence, never on the kind of failure.

mod details;
mod readme;

pub use details::{DetailFetcher, RepoDetails};
pub use readme::{summarize, ReadmeSummarizer, DEFAULT_SUMMARY_CHARS};

use crate::config::GithubConfig;
use reqwest::{header, Client, Response, StatusCode};
use thiserror::Error;

/// Pinned REST API version
const API_VERSION: &str = "2022-11-28";

/// Reasons an API call produced no data
///
/// Never leaves this module; each fetcher maps it to its "absent" value.
#[derive(Debug, Error)]
pub(crate) enum FetchFailure {
    #[error("no API token configured")]
    MissingToken,

    #[error("HTTP status {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Authenticated access to the GitHub REST API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl GithubClient {
    /// Creates a new API client
    ///
    /// # Arguments
    ///
    /// * `client` - The shared HTTP client
    /// * `config` - API root and optional bearer token
    pub fn new(client: Client, config: &GithubConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// Returns true if requests will be attempted at all
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Sends an authenticated GET and rejects non-success responses
    pub(crate) async fn get(&self, path: &str, accept: &str) -> Result<Response, FetchFailure> {
        let token = self.token.as_deref().ok_or(FetchFailure::MissingToken)?;

        let response = self
            .client
            .get(format!("{}{}", self.api_base, path))
            .bearer_auth(token)
            .header(header::ACCEPT, accept)
            .header("X-GitHub-Api-Version", API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status));
        }

        Ok(response)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::GithubClient;
    use crate::config::{GithubConfig, HttpConfig};
    use crate::http::build_http_client;

    pub fn client(api_base: &str, token: Option<&str>) -> GithubClient {
        let config = GithubConfig {
            api_base: api_base.to_string(),
            token: token.map(str::to_string),
        };
        GithubClient::new(build_http_client(&HttpConfig::default()).unwrap(), &config)
    }
}
