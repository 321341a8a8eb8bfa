use crate::github::{FetchFailure, GithubClient};

/// Raw-text content negotiation for the readme endpoint
const RAW_ACCEPT: &str = "application/vnd.github.raw";

/// Character budget of a README-derived summary
pub const DEFAULT_SUMMARY_CHARS: usize = 200;

/// Number of informative lines joined into a summary
const SUMMARY_LINES: usize = 2;

/// Derives a short plain-text summary from README markdown
///
/// # Algorithm
///
/// 1. Split into lines and trim each
/// 2. Drop empty lines, image embeds (`![`), headings (`#`) and badge
///    links (`[!`)
/// 3. Join the first two surviving lines with a single space
/// 4. Keep the first `max_chars` characters (hard cut, no word boundary)
///
/// # Example
///
/// ```
/// use trending_digest::github::summarize;
///
/// let readme = "# demo\n[![ci](badge.svg)](ci)\n\nA fast demo tool.\nWorks offline.\n";
/// assert_eq!(summarize(readme, 200), "A fast demo tool. Works offline.");
/// ```
pub fn summarize(readme: &str, max_chars: usize) -> String {
    readme
        .lines()
        .map(str::trim)
        .filter(|line| is_informative(line))
        .take(SUMMARY_LINES)
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .take(max_chars)
        .collect()
}

fn is_informative(line: &str) -> bool {
    !line.is_empty() && !line.starts_with("![") && !line.starts_with('#') && !line.starts_with("[!")
}

/// Fetches README text and reduces it to a summary
#[derive(Clone)]
pub struct ReadmeSummarizer {
    api: GithubClient,
    max_chars: usize,
}

impl ReadmeSummarizer {
    pub fn new(api: GithubClient) -> Self {
        Self::with_max_chars(api, DEFAULT_SUMMARY_CHARS)
    }

    pub fn with_max_chars(api: GithubClient, max_chars: usize) -> Self {
        Self { api, max_chars }
    }

    /// Fetches the README of `owner/name` and summarizes it
    ///
    /// Returns an empty string on any failure.
    pub async fn fetch_summary(&self, owner: &str, name: &str) -> String {
        match self.try_fetch(owner, name).await {
            Ok(readme) => summarize(&readme, self.max_chars),
            Err(failure) => {
                tracing::debug!("No readme for {}/{}: {}", owner, name, failure);
                String::new()
            }
        }
    }

    async fn try_fetch(&self, owner: &str, name: &str) -> Result<String, FetchFailure> {
        let path = format!("/repos/{}/{}/readme", owner, name);
        let response = self.api.get(&path, RAW_ACCEPT).await?;
        Ok(response.text().await?)
    }
}
