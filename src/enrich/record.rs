//! Output record shape and field resolution

use crate::github::RepoDetails;
use crate::lister::ListedRepo;
use serde::{Deserialize, Serialize};

/// Description used when neither the API nor the README yields one
pub const PLACEHOLDER_DESC: &str = "No description";

/// Language used when details are absent or carry no language
pub const UNKNOWN_LANG: &str = "Unknown";

/// Star display used when details are absent
pub const UNKNOWN_STARS: &str = "Unknown stars";

/// One persisted repository entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// "owner/name"
    pub name: String,
    pub url: String,
    /// Never empty
    pub desc: String,
    pub lang: String,
    /// Display string such as "42 stars"
    pub stars: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// Where a record's description came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescSource {
    Details,
    Readme,
    Placeholder,
}

/// Builds a record from the listing plus whatever enrichment succeeded
///
/// Description priority: details description, then a non-empty summary,
/// then `PLACEHOLDER_DESC`. Language, stars and topics come from details
/// when present and fall back to sentinels otherwise.
pub fn build_record(
    repo: &ListedRepo,
    details: Option<&RepoDetails>,
    summary: &str,
) -> (OutputRecord, DescSource) {
    let (desc, source) = match details.and_then(|d| d.description.as_deref()) {
        Some(description) => (description.to_string(), DescSource::Details),
        None if !summary.is_empty() => (summary.to_string(), DescSource::Readme),
        None => (PLACEHOLDER_DESC.to_string(), DescSource::Placeholder),
    };

    let lang = details
        .and_then(|d| d.language.clone())
        .unwrap_or_else(|| UNKNOWN_LANG.to_string());

    let stars = details
        .map(|d| format_stars(d.star_count))
        .unwrap_or_else(|| UNKNOWN_STARS.to_string());

    let topics = details.map(|d| d.topics.clone()).unwrap_or_default();

    let record = OutputRecord {
        name: repo.full_name(),
        url: repo.url.clone(),
        desc,
        lang,
        stars,
        topics,
    };

    (record, source)
}

fn format_stars(count: u64) -> String {
    format!("{} stars", count)
}
