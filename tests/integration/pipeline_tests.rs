//! Integration tests for the trending pipeline
//!
//! These tests use wiremock to serve both the listing page and the REST
//! API, and run list → enrich → write end-to-end.

use serde_json::json;
use tempfile::TempDir;
use trending_digest::config::Config;
use trending_digest::output::read_records;
use trending_digest::{pipeline, OutputRecord, TrendingError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TRENDING_PAGE: &str = r#"<html><body>
<div class="Box">
  <article class="Box-row">
    <h2 class="h3 lh-condensed"><a href="/octo/demo">octo / demo</a></h2>
  </article>
  <article class="Box-row">
    <h2 class="h3 lh-condensed"><a href="/octo/bare">octo / bare</a></h2>
  </article>
  <article class="Box-row">
    <h2 class="h3 lh-condensed">sponsored</h2>
  </article>
  <article class="Box-row">
    <h2 class="h3 lh-condensed"><a href="/octo/ghost">octo / ghost</a></h2>
  </article>
</div>
</body></html>"#;

/// Creates a test configuration pointing every endpoint at the mock server
fn create_test_config(server: &MockServer, output_dir: &TempDir, token: Option<&str>) -> Config {
    let mut config = Config::default();
    config.source.trending_url = format!("{}/trending", server.uri());
    config.source.site_origin = "https://github.com".to_string();
    config.github.api_base = server.uri();
    config.github.token = token.map(str::to_string);
    config.enrich.delay_ms = 0;
    config.output.path = output_dir.path().join("data.json");
    config
}

async fn mount_trending_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(TRENDING_PAGE)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

fn record(name: &str, desc: &str, lang: &str, stars: &str, topics: &[&str]) -> OutputRecord {
    OutputRecord {
        name: name.to_string(),
        url: format!("https://github.com/{}", name),
        desc: desc.to_string(),
        lang: lang.to_string(),
        stars: stars.to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_full_run_with_token() {
    let server = MockServer::start().await;
    mount_trending_page(&server).await;

    // Details with description: readme must not be requested
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "description": "Demo tool",
            "language": "Go",
            "stargazers_count": 42,
            "topics": ["cli"]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/demo/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_string("unused"))
        .expect(0)
        .mount(&server)
        .await;

    // Details missing: readme summary is used
    Mock::given(method("GET"))
        .and(path("/repos/octo/bare"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/bare/readme"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("# bare\n[![ci](x.svg)](ci)\n\nA fast demo tool.\n"),
        )
        .expect(1)
        .mount(&server)
        .await;

    // Everything fails: placeholder
    Mock::given(method("GET"))
        .and(path("/repos/octo/ghost"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octo/ghost/readme"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&server, &output_dir, Some("test-token"));

    let report = pipeline::run(&config).await.expect("Run failed");

    assert_eq!(report.listed, 3);
    assert_eq!(report.stats.from_details, 1);
    assert_eq!(report.stats.from_readme, 1);
    assert_eq!(report.stats.placeholder, 1);

    let records = read_records(&config.output.path).expect("Failed to read output");
    assert_eq!(
        records,
        vec![
            record("octo/demo", "Demo tool", "Go", "42 stars", &["cli"]),
            record("octo/bare", "A fast demo tool.", "Unknown", "Unknown stars", &[]),
            record("octo/ghost", "No description", "Unknown", "Unknown stars", &[]),
        ]
    );
}

#[tokio::test]
async fn test_run_without_token_degrades_to_sentinels() {
    let server = MockServer::start().await;
    mount_trending_page(&server).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/demo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&server, &output_dir, None);

    let report = pipeline::run(&config).await.expect("Run failed");
    assert_eq!(report.stats.placeholder, 3);

    let records = read_records(&config.output.path).expect("Failed to read output");
    assert_eq!(records.len(), 3);
    assert!(records
        .iter()
        .all(|r| r.desc == "No description" && r.lang == "Unknown" && r.stars == "Unknown stars"));
}

#[tokio::test]
async fn test_run_with_enrichment_disabled() {
    let server = MockServer::start().await;
    mount_trending_page(&server).await;

    Mock::given(method("GET"))
        .and(path("/repos/octo/demo"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&server, &output_dir, Some("test-token"));
    config.enrich.enabled = false;

    let report = pipeline::run(&config).await.expect("Run failed");
    assert_eq!(report.listed, 3);
    assert_eq!(report.output, config.output.path);
    assert_eq!(report.stats.placeholder, 3);

    let records = read_records(&config.output.path).expect("Failed to read output");
    assert_eq!(
        records,
        vec![
            record("octo/demo", "No description", "Unknown", "Unknown stars", &[]),
            record("octo/bare", "No description", "Unknown", "Unknown stars", &[]),
            record("octo/ghost", "No description", "Unknown", "Unknown stars", &[]),
        ]
    );
}

#[tokio::test]
async fn test_render_failure_aborts_without_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&server, &output_dir, Some("test-token"));

    let result = pipeline::run(&config).await;

    assert!(matches!(result, Err(TrendingError::Render { .. })));
    assert!(!config.output.path.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_io_error() {
    let server = MockServer::start().await;
    mount_trending_page(&server).await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = create_test_config(&server, &output_dir, None);
    config.output.path = output_dir.path().join("missing").join("data.json");

    let result = pipeline::run(&config).await;
    assert!(matches!(result, Err(TrendingError::Io(_))));
}

#[tokio::test]
async fn test_list_only_does_not_write() {
    let server = MockServer::start().await;
    mount_trending_page(&server).await;

    let output_dir = TempDir::new().expect("Failed to create temp dir");
    let config = create_test_config(&server, &output_dir, None);

    let repos = pipeline::list_only(&config).await.expect("Listing failed");

    let names: Vec<_> = repos.iter().map(|r| r.full_name()).collect();
    assert_eq!(names, vec!["octo/demo", "octo/bare", "octo/ghost"]);
    assert!(!config.output.path.exists());
}
