//! Trending page parser
//!
//! Extracts repository identifiers from the rendered listing document.
//! Each trending row is an `<article class="Box-row">` whose heading link
//! points at `/<owner>/<name>`.

use crate::lister::ListedRepo;
use scraper::{Html, Selector};

/// Structural marker of one trending row
const ROW_SELECTOR: &str = "article.Box-row";

/// Repository link inside a row
const LINK_SELECTOR: &str = "h2 a";

/// Parses the rendered listing and extracts one `ListedRepo` per row
///
/// # Extraction Rules
///
/// - Rows are visited in document order
/// - The row's `h2 a` `href` is split on `/`; the second and third
///   segments become `owner` and `name`
/// - `url` is `origin` concatenated with the relative link
/// - Rows without a link, or whose link does not yield a non-empty owner
///   and name, are dropped
///
/// # Arguments
///
/// * `html` - The rendered document
/// * `origin` - Canonical site origin, e.g. `https://github.com`
///
/// # Example
///
/// ```
/// use trending_digest::lister::parse_trending;
///
/// let html = r#"<article class="Box-row"><h2><a href="/octo/demo">octo / demo</a></h2></article>"#;
/// let repos = parse_trending(html, "https://github.com");
/// assert_eq!(repos[0].url, "https://github.com/octo/demo");
/// ```
pub fn parse_trending(html: &str, origin: &str) -> Vec<ListedRepo> {
    let document = Html::parse_document(html);

    let (Ok(row_selector), Ok(link_selector)) =
        (Selector::parse(ROW_SELECTOR), Selector::parse(LINK_SELECTOR))
    else {
        return Vec::new();
    };

    let origin = origin.trim_end_matches('/');
    let mut repos = Vec::new();

    for (index, row) in document.select(&row_selector).enumerate() {
        let href = row
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
            .map(str::trim);

        let Some(href) = href else {
            tracing::debug!("Row {} has no repository link, skipping", index);
            continue;
        };

        match split_repo_link(href) {
            Some((owner, name)) => repos.push(ListedRepo {
                owner: owner.to_string(),
                name: name.to_string(),
                url: format!("{}{}", origin, href),
            }),
            None => tracing::debug!("Row {} has malformed link '{}', skipping", index, href),
        }
    }

    repos
}

/// Splits `/<owner>/<name>` into its two non-empty segments
fn split_repo_link(href: &str) -> Option<(&str, &str)> {
    let mut segments = href.split('/').skip(1);
    let owner = segments.next().filter(|s| !s.is_empty())?;
    let name = segments.next().filter(|s| !s.is_empty())?;
    Some((owner, name))
}
