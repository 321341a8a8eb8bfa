use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Main configuration structure for Trending-Digest
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub github: GithubConfig,
    pub enrich: EnrichConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Trending window requested from the listing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Since {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Since {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Which capability produces the rendered listing document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Plain HTTP fetch; the listing page is server-rendered
    #[default]
    Http,
    /// Headless Chrome/Chromium with `--dump-dom`
    Chrome,
}

/// Listing page configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Trending page URL, without the `since` query
    #[serde(rename = "trending-url")]
    pub trending_url: String,

    /// Canonical origin prefixed to the relative repository links
    #[serde(rename = "site-origin")]
    pub site_origin: String,

    pub since: Since,

    pub renderer: RendererKind,

    /// Upper bound on a headless browser render (seconds)
    #[serde(rename = "render-timeout-secs")]
    pub render_timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            trending_url: "https://github.com/trending".to_string(),
            site_origin: "https://github.com".to_string(),
            since: Since::Daily,
            renderer: RendererKind::Http,
            render_timeout_secs: 60,
        }
    }
}

impl SourceConfig {
    /// Builds the full listing URL, e.g. `https://github.com/trending?since=daily`
    pub fn listing_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.trending_url)?;
        url.query_pairs_mut().append_pair("since", self.since.as_str());
        Ok(url)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }
}

/// GitHub REST API configuration
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    /// API root, e.g. `https://api.github.com`
    #[serde(rename = "api-base")]
    pub api_base: String,

    /// Bearer token; enrichment degrades to listing-only data without it
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            token: None,
        }
    }
}

impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_base", &self.api_base)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Enrichment behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnrichConfig {
    /// Whether to call the REST API at all
    pub enabled: bool,

    /// Pause between consecutive repositories (milliseconds)
    #[serde(rename = "delay-ms")]
    pub delay_ms: u64,

    /// Character budget of README-derived summaries
    #[serde(rename = "summary-chars")]
    pub summary_chars: usize,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_ms: 200,
            summary_chars: 200,
        }
    }
}

impl EnrichConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: format!("trending-digest/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON file that is overwritten on every run
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("public/data.json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_listing_url() {
        let source = SourceConfig::default();
        let url = source.listing_url().unwrap();
        assert_eq!(url.as_str(), "https://github.com/trending?since=daily");
    }

    #[test]
    fn test_listing_url_with_weekly_window() {
        let source = SourceConfig {
            since: Since::Weekly,
            ..SourceConfig::default()
        };
        let url = source.listing_url().unwrap();
        assert_eq!(url.query(), Some("since=weekly"));
    }

    #[test]
    fn test_token_is_redacted_in_debug_output() {
        let github = GithubConfig {
            token: Some("ghp_secret".to_string()),
            ..GithubConfig::default()
        };
        let debug = format!("{:?}", github);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
