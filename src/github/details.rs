use crate::github::{FetchFailure, GithubClient};
use serde::Deserialize;

const JSON_ACCEPT: &str = "application/vnd.github+json";

/// Repository metadata from `GET /repos/{owner}/{name}`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoDetails {
    pub description: Option<String>,

    /// Primary language
    pub language: Option<String>,

    #[serde(rename = "stargazers_count")]
    pub star_count: u64,

    #[serde(default)]
    pub topics: Vec<String>,
}

impl RepoDetails {
    /// Treats blank strings the same as `null`
    fn normalized(mut self) -> Self {
        self.description = self.description.filter(|d| !d.trim().is_empty());
        self.language = self.language.filter(|l| !l.trim().is_empty());
        self
    }
}

/// Fetches structured repository metadata
#[derive(Clone)]
pub struct DetailFetcher {
    api: GithubClient,
}

impl DetailFetcher {
    pub fn new(api: GithubClient) -> Self {
        Self { api }
    }

    /// Fetches metadata for `owner/name`
    ///
    /// Returns `None` without sending a request when no token is
    /// configured, and `None` for any failed request.
    pub async fn fetch_details(&self, owner: &str, name: &str) -> Option<RepoDetails> {
        self.try_fetch(owner, name)
            .await
            .map_err(|failure| {
                tracing::debug!("No details for {}/{}: {}", owner, name, failure);
            })
            .ok()
    }

    async fn try_fetch(&self, owner: &str, name: &str) -> Result<RepoDetails, FetchFailure> {
        let path = format!("/repos/{}/{}", owner, name);
        let response = self.api.get(&path, JSON_ACCEPT).await?;
        let details: RepoDetails = response.json().await?;
        Ok(details.normalized())
    }
}
