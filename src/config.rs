//! Client configuration.
//!
//! The backend base URL is configured externally, either on the command line
//! or through the environment (a `.env` file is honored by the binary).

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the backend base URL.
pub const API_URL_VAR: &str = "EMPLEADOS_API_URL";

/// Environment variable holding an optional request timeout, in whole seconds (at least 1).
pub const TIMEOUT_VAR: &str = "EMPLEADOS_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("invalid EMPLEADOS_TIMEOUT_SECS value {0:?}")]
    InvalidTimeout(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}

/// Settings for connecting to the Empleado API.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Base URL the endpoint paths are joined to (e.g. `http://localhost:5000/api/`).
    pub api_url: String,

    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Settings {
    /// Create settings for an HTTP(S) base URL.
    pub fn new(api_url: impl Into<String>) -> Result<Self, ConfigError> {
        let api_url = api_url.into();
        let parsed = Url::parse(&api_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: api_url,
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }
        Ok(Self {
            api_url,
            timeout: None,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup(API_URL_VAR)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing(API_URL_VAR))?;
        let mut settings = Self::new(api_url)?;

        if let Some(raw) = lookup(TIMEOUT_VAR).filter(|v| !v.is_empty()) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            settings = settings.with_timeout(Duration::from_secs(secs));
        }

        Ok(settings)
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
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_from_lookup_reads_url_and_timeout() {
        let settings = Settings::from_lookup(lookup(&[
            (API_URL_VAR, "http://localhost:5000/api/"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(settings.api_url, "http://localhost:5000/api/");
        assert_eq!(settings.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_timeout_is_optional() {
        let settings =
            Settings::from_lookup(lookup(&[(API_URL_VAR, "https://api.example.com")])).unwrap();
        assert_eq!(settings.timeout, None);
    }

    #[test]
    fn test_missing_url_is_an_error() {
        assert_eq!(
            Settings::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(API_URL_VAR))
        );
        assert_eq!(
            Settings::from_lookup(lookup(&[(API_URL_VAR, "")])),
            Err(ConfigError::Missing(API_URL_VAR))
        );
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            Settings::new("not a url"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            Settings::new("ftp://files.example.com/"),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert_eq!(
            Settings::from_lookup(lookup(&[
                (API_URL_VAR, "http://localhost"),
                (TIMEOUT_VAR, "soon"),
            ])),
            Err(ConfigError::InvalidTimeout("soon".to_string()))
        );
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        assert_eq!(
            Settings::from_lookup(lookup(&[
                (API_URL_VAR, "http://localhost"),
                (TIMEOUT_VAR, "0"),
            ])),
            Err(ConfigError::InvalidTimeout("0".to_string()))
        );
    }
}
