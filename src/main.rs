//! Trending-Digest main entry point
//!
//! This is the command-line interface for the trending digest.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use trending_digest::config::{load_config, validate, Config, RendererKind, Since};
use trending_digest::pipeline;

/// Trending-Digest: a daily digest of trending repositories
///
/// Renders the trending listing, enriches every repository through the
/// GitHub REST API (falling back to a README summary), and writes the
/// result to a JSON file.
#[derive(Parser, Debug)]
#[command(name = "trending-digest")]
#[command(version)]
#[command(about = "A daily digest of trending repositories", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Output JSON file (overrides config)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// GitHub API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Trending window (overrides config)
    #[arg(long, value_enum)]
    since: Option<Since>,

    /// Page render capability (overrides config)
    #[arg(long, value_enum)]
    renderer: Option<RendererKind>,

    /// Pause between repositories in milliseconds (overrides config)
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Skip all API calls; every record uses placeholder values
    #[arg(long)]
    no_enrich: bool,

    /// List the trending repositories and exit without writing
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;
    tracing::debug!("Effective configuration: {:?}", config);

    if cli.dry_run {
        return handle_dry_run(&config).await;
    }

    let report = pipeline::run(&config)
        .await
        .context("Trending digest run failed")?;

    if !cli.quiet {
        println!("Scraped {} repositories.", report.listed);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("trending_digest=info,warn"),
            1 => EnvFilter::new("trending_digest=debug,info"),
            2 => EnvFilter::new("trending_digest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    // A blank GITHUB_TOKEN is treated as unset
    if let Some(token) = cli.token.as_deref().filter(|t| !t.trim().is_empty()) {
        config.github.token = Some(token.to_string());
    }
    if let Some(since) = cli.since {
        config.source.since = since;
    }
    if let Some(renderer) = cli.renderer {
        config.source.renderer = renderer;
    }
    if let Some(delay_ms) = cli.delay_ms {
        config.enrich.delay_ms = delay_ms;
    }
    if cli.no_enrich {
        config.enrich.enabled = false;
    }

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: lists repositories without enriching or writing
async fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let repos = pipeline::list_only(config)
        .await
        .context("Failed to list trending repositories")?;

    for repo in &repos {
        println!("{:<40} {}", repo.full_name(), repo.url);
    }
    println!("\n{} repositories listed", repos.len());

    Ok(())
}
