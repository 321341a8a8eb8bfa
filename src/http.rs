//! Shared HTTP client construction
//!
//! One `reqwest::Client` is built per run and cloned into the renderer and
//! the API fetchers, so every external call carries the same user agent and
//! the same bounded timeouts.

use crate::config::HttpConfig;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The HTTP client configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use trending_digest::config::HttpConfig;
/// use trending_digest::http::build_http_client;
///
/// let client = build_http_client(&HttpConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &HttpConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&HttpConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_http_client_with_custom_agent() {
        let config = HttpConfig {
            user_agent: "TestDigest/1.0 (+https://example.com)".to_string(),
            ..HttpConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }
}
