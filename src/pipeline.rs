//! Run orchestration: list, enrich, write
//!
//! The stages run strictly one after another. The listing is complete
//! before enrichment starts, and the file is written once at the end.

use crate::config::{Config, RendererKind};
use crate::enrich::{DetailSource, EnrichStats, Enricher, NoEnrichment, SummarySource};
use crate::github::{DetailFetcher, GithubClient, ReadmeSummarizer};
use crate::http::build_http_client;
use crate::lister::{ChromeRenderer, HttpRenderer, ListedRepo, Lister, PageRenderer};
use crate::output::write_records;
use crate::TrendingError;
use reqwest::Client;
use std::path::{Path, PathBuf};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Repositories found on the listing page
    pub listed: usize,

    pub stats: EnrichStats,

    /// File that was written
    pub output: PathBuf,
}

/// Builds the lister described by the source configuration
pub fn build_lister(config: &Config, client: Client) -> Result<Lister, TrendingError> {
    let renderer: Box<dyn PageRenderer> = match config.source.renderer {
        RendererKind::Http => Box::new(HttpRenderer::new(client)),
        RendererKind::Chrome => Box::new(ChromeRenderer::discover(config.source.render_timeout())?),
    };

    Ok(Lister::new(
        renderer,
        config.source.listing_url()?,
        config.source.site_origin.as_str(),
    ))
}

/// Renders the listing page only; nothing is enriched or written
pub async fn list_only(config: &Config) -> Result<Vec<ListedRepo>, TrendingError> {
    let client = build_http_client(&config.http)?;
    build_lister(config, client)?.list().await
}

/// Runs the whole pipeline described by `config`
///
/// # Returns
///
/// * `Ok(RunReport)` - The output file was written
/// * `Err(TrendingError)` - Rendering or writing failed; enrichment
///   failures never abort a run
pub async fn run(config: &Config) -> Result<RunReport, TrendingError> {
    let client = build_http_client(&config.http)?;
    let lister = build_lister(config, client.clone())?;
    let delay = config.enrich.delay();

    if !config.enrich.enabled {
        tracing::info!("Enrichment disabled; records will carry listing data only");
        let enricher = Enricher::new(NoEnrichment, NoEnrichment, std::time::Duration::ZERO);
        return execute(&lister, &enricher, &config.output.path).await;
    }

    let api = GithubClient::new(client, &config.github);
    if !api.has_token() {
        tracing::warn!("No GitHub token configured; details and summaries will be unavailable");
    }

    let enricher = Enricher::new(
        DetailFetcher::new(api.clone()),
        ReadmeSummarizer::with_max_chars(api, config.enrich.summary_chars),
        delay,
    );
    execute(&lister, &enricher, &config.output.path).await
}

/// Runs the three stages with the given components
pub async fn execute<D, S>(
    lister: &Lister,
    enricher: &Enricher<D, S>,
    output_path: &Path,
) -> Result<RunReport, TrendingError>
where
    D: DetailSource,
    S: SummarySource,
{
    let listed = lister.list().await?;

    let (records, stats) = enricher.enrich_with_stats(&listed).await;
    tracing::info!(
        "Enriched {} repositories: {} from details, {} from readme, {} placeholder",
        stats.total(),
        stats.from_details,
        stats.from_readme,
        stats.placeholder
    );

    write_records(&records, output_path)?;
    tracing::info!("Wrote {}", output_path.display());

    Ok(RunReport {
        listed: listed.len(),
        stats,
        output: output_path.to_path_buf(),
    })
}
