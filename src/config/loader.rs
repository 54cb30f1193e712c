//! Configuration loading from the process environment.

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {source}")]
    InvalidUrl {
        var: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} is not a valid number: {source}")]
    InvalidNumber {
        var: &'static str,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },

    #[error("rate limit window must be non-zero when rate limiting is enabled")]
    ZeroRateLimitWindow,
}

/// Load configuration from the process environment.
///
/// Recognized variables: `BIND_ADDRESS`, `PORT`, `WEBHOOK_URL`,
/// `LEADS_API_URL`, `LEADS_API_KEY`, `ALLOWED_ORIGINS`, `RATE_LIMIT_MAX`,
/// `RATE_LIMIT_WINDOW_SECS`, `METRICS_ADDRESS`. Unset variables fall back to
/// the schema defaults; blank values are treated as unset.
pub fn load_from_env() -> Result<AppConfig, ConfigError> {
    load_from(|var| std::env::var(var).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Tests supply a closure over a map instead of mutating process-global
/// environment state.
pub fn load_from<F>(get: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |var: &str| get(var).filter(|v| !v.trim().is_empty());
    let mut config = AppConfig::default();

    if let Some(addr) = get("BIND_ADDRESS") {
        config.listener.bind_address = addr;
    } else if let Some(port) = get("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|source| ConfigError::InvalidNumber { var: "PORT", source })?;
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }

    config.sinks.webhook_url = parse_url(&get, "WEBHOOK_URL")?;
    config.sinks.api_url = parse_url(&get, "LEADS_API_URL")?;
    config.sinks.api_key = get("LEADS_API_KEY");

    if let Some(origins) = get("ALLOWED_ORIGINS") {
        config.cors.allowed_origins = origins
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
    }

    if let Some(max) = get("RATE_LIMIT_MAX") {
        config.rate_limit.max_requests = max.parse().map_err(|source| {
            ConfigError::InvalidNumber { var: "RATE_LIMIT_MAX", source }
        })?;
    }
    if let Some(window) = get("RATE_LIMIT_WINDOW_SECS") {
        config.rate_limit.window_secs = window.parse().map_err(|source| {
            ConfigError::InvalidNumber { var: "RATE_LIMIT_WINDOW_SECS", source }
        })?;
    }

    if let Some(addr) = get("METRICS_ADDRESS") {
        config.observability.metrics_address = addr;
        config.observability.metrics_enabled = true;
    }

    Ok(config)
}

fn parse_url<F>(get: &F, var: &'static str) -> Result<Option<Url>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get(var) {
        Some(raw) => {
            let url = Url::parse(raw.trim())
                .map_err(|source| ConfigError::InvalidUrl { var, source })?;
            Ok(Some(url))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = load_from(lookup(&[])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:3000");
        assert!(config.sinks.webhook_url.is_none());
        assert!(config.sinks.api_url.is_none());
        assert_eq!(config.rate_limit.max_requests, 10);
        assert_eq!(config.rate_limit.window_secs, 900);
    }

    #[test]
    fn port_shorthand_builds_bind_address() {
        let config = load_from(lookup(&[("PORT", "8081")])).unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8081");
    }

    #[test]
    fn bind_address_wins_over_port() {
        let config =
            load_from(lookup(&[("BIND_ADDRESS", "127.0.0.1:9000"), ("PORT", "8081")])).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:9000");
    }

    #[test]
    fn sink_urls_are_parsed() {
        let config = load_from(lookup(&[
            ("WEBHOOK_URL", "https://hooks.example.com/abc"),
            ("LEADS_API_URL", "https://api.example.com/leads"),
            ("LEADS_API_KEY", "secret"),
        ]))
        .unwrap();
        assert_eq!(
            config.sinks.webhook_url.unwrap().as_str(),
            "https://hooks.example.com/abc"
        );
        assert_eq!(config.sinks.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = load_from(lookup(&[("WEBHOOK_URL", "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { var: "WEBHOOK_URL", .. }));
    }

    #[test]
    fn blank_values_are_treated_as_unset() {
        let config = load_from(lookup(&[("WEBHOOK_URL", "  "), ("LEADS_API_KEY", "")])).unwrap();
        assert!(config.sinks.webhook_url.is_none());
        assert!(config.sinks.api_key.is_none());
    }

    #[test]
    fn allowed_origins_are_split_and_trimmed() {
        let config = load_from(lookup(&[(
            "ALLOWED_ORIGINS",
            "https://example.com, https://www.example.com ,",
        )]))
        .unwrap();
        assert_eq!(
            config.cors.allowed_origins,
            vec!["https://example.com", "https://www.example.com"]
        );
    }
}
