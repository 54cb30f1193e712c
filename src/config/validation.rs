//! Configuration validation.
//!
//! Semantic checks on an already-parsed [`AppConfig`]. Parsing problems are
//! caught by the loader; this module rejects configurations that parse but
//! cannot work.

use crate::config::loader::ConfigError;
use crate::config::schema::AppConfig;

/// Validate a loaded configuration.
///
/// Sink URLs must be http or https. An API key without an API URL is a
/// warning rather than an error: the key is simply unused.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(url) = &config.sinks.webhook_url {
        check_scheme(url, "WEBHOOK_URL")?;
    }
    if let Some(url) = &config.sinks.api_url {
        check_scheme(url, "LEADS_API_URL")?;
    }

    if config.sinks.api_key.is_some() && config.sinks.api_url.is_none() {
        tracing::warn!("LEADS_API_KEY is set but LEADS_API_URL is not; the key will not be used");
    }

    if config.rate_limit.enabled && config.rate_limit.window_secs == 0 {
        return Err(ConfigError::ZeroRateLimitWindow);
    }

    Ok(())
}

fn check_scheme(url: &url::Url, var: &'static str) -> Result<(), ConfigError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(ConfigError::UnsupportedScheme {
            var,
            scheme: scheme.to_string(),
        }),
    }
}
