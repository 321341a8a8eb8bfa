//! Enrichment of listed repositories
//!
//! This module turns the listing into output records, one repository at a
//! time and in listing order:
//! - Fetch repository details
//! - Fall back to a README summary when details carry no description
//! - Normalize into `OutputRecord`, filling sentinels for missing data
//! - Pause for a fixed delay before the next repository
//!
//! A repository whose enrichment fails entirely still produces a record.

mod record;

pub use record::{
    build_record, DescSource, OutputRecord, PLACEHOLDER_DESC, UNKNOWN_LANG, UNKNOWN_STARS,
};

use crate::github::{DetailFetcher, ReadmeSummarizer, RepoDetails};
use crate::lister::ListedRepo;
use async_trait::async_trait;
use std::time::Duration;

/// Source of structured repository metadata
#[async_trait]
pub trait DetailSource: Send + Sync {
    /// Returns `None` on any failure
    async fn fetch_details(&self, owner: &str, name: &str) -> Option<RepoDetails>;
}

/// Source of fallback description text
#[async_trait]
pub trait SummarySource: Send + Sync {
    /// Returns an empty string on any failure
    async fn fetch_summary(&self, owner: &str, name: &str) -> String;
}

#[async_trait]
impl DetailSource for DetailFetcher {
    async fn fetch_details(&self, owner: &str, name: &str) -> Option<RepoDetails> {
        DetailFetcher::fetch_details(self, owner, name).await
    }
}

#[async_trait]
impl SummarySource for ReadmeSummarizer {
    async fn fetch_summary(&self, owner: &str, name: &str) -> String {
        ReadmeSummarizer::fetch_summary(self, owner, name).await
    }
}

/// Source that never has data; used when enrichment is switched off
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnrichment;

#[async_trait]
impl DetailSource for NoEnrichment {
    async fn fetch_details(&self, _owner: &str, _name: &str) -> Option<RepoDetails> {
        None
    }
}

#[async_trait]
impl SummarySource for NoEnrichment {
    async fn fetch_summary(&self, _owner: &str, _name: &str) -> String {
        String::new()
    }
}

/// Per-run tally of where descriptions came from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichStats {
    pub from_details: usize,
    pub from_readme: usize,
    pub placeholder: usize,
}

impl EnrichStats {
    fn record(&mut self, source: DescSource) {
        match source {
            DescSource::Details => self.from_details += 1,
            DescSource::Readme => self.from_readme += 1,
            DescSource::Placeholder => self.placeholder += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.from_details + self.from_readme + self.placeholder
    }
}

/// Sequential, paced enrichment of a listing
pub struct Enricher<D, S> {
    details: D,
    summaries: S,
    delay: Duration,
}

impl<D: DetailSource, S: SummarySource> Enricher<D, S> {
    /// Creates a new enricher
    ///
    /// # Arguments
    ///
    /// * `details` - Metadata source, consulted for every repository
    /// * `summaries` - Fallback source, consulted only when needed
    /// * `delay` - Pause between consecutive repositories
    pub fn new(details: D, summaries: S, delay: Duration) -> Self {
        Self {
            details,
            summaries,
            delay,
        }
    }

    /// Enriches every listed repository, preserving order and length
    pub async fn enrich(&self, listed: &[ListedRepo]) -> Vec<OutputRecord> {
        self.enrich_with_stats(listed).await.0
    }

    /// Like [`Enricher::enrich`], also reporting where descriptions came from
    pub async fn enrich_with_stats(
        &self,
        listed: &[ListedRepo],
    ) -> (Vec<OutputRecord>, EnrichStats) {
        let mut records = Vec::with_capacity(listed.len());
        let mut stats = EnrichStats::default();

        for (index, repo) in listed.iter().enumerate() {
            let (record, source) = self.enrich_one(repo).await;
            tracing::info!(
                "[{}/{}] {} ({:?})",
                index + 1,
                listed.len(),
                record.name,
                source
            );
            stats.record(source);
            records.push(record);

            // Pacing only; nothing waits after the final repository
            if index + 1 < listed.len() && !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        (records, stats)
    }

    /// Enriches a single repository
    pub async fn enrich_one(&self, repo: &ListedRepo) -> (OutputRecord, DescSource) {
        let details = self.details.fetch_details(&repo.owner, &repo.name).await;

        let needs_summary = details.as_ref().map_or(true, |d| d.description.is_none());
        let summary = if needs_summary {
            self.summaries.fetch_summary(&repo.owner, &repo.name).await
        } else {
            String::new()
        };

        build_record(repo, details.as_ref(), &summary)
    }
}
