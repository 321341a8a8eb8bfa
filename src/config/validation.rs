use crate::config::types::{
    Config, EnrichConfig, GithubConfig, HttpConfig, OutputConfig, SourceConfig,
};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_source_config(&config.source)?;
    validate_github_config(&config.github)?;
    validate_enrich_config(&config.enrich)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates listing page configuration
fn validate_source_config(config: &SourceConfig) -> Result<(), ConfigError> {
    validate_http_url("trending-url", &config.trending_url)?;
    validate_http_url("site-origin", &config.site_origin)?;

    if config.render_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "render-timeout-secs must be >= 1, got {}",
            config.render_timeout_secs
        )));
    }

    Ok(())
}

/// Validates GitHub API configuration
fn validate_github_config(config: &GithubConfig) -> Result<(), ConfigError> {
    validate_http_url("api-base", &config.api_base)?;

    // An empty token would send a bare "Bearer " header
    if config.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "token cannot be empty when set".to_string(),
        ));
    }

    Ok(())
}

fn validate_enrich_config(config: &EnrichConfig) -> Result<(), ConfigError> {
    if config.summary_chars < 1 {
        return Err(ConfigError::Validation(format!(
            "summary-chars must be >= 1, got {}",
            config.summary_chars
        )));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that a URL parses and uses an HTTP(S) scheme
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid {} '{}': {}", field, value, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "{} '{}' must use an http or https scheme",
            field, value
        )));
    }

    Ok(())
}
