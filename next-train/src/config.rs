//! Runtime configuration.
//!
//! All settings come from environment variables; there is no config file.

use std::path::PathBuf;

use crate::mbta::MbtaConfig;

/// Environment variable holding the MBTA API key.
pub const API_KEY_VAR: &str = "MBTA_API_KEY";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "MBTA_BASE_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const TIMEOUT_VAR: &str = "MBTA_TIMEOUT_SECS";
/// Environment variable pointing at a fixture directory to serve instead of the live API.
pub const MOCK_DIR_VAR: &str = "MBTA_MOCK_DIR";

/// Error returned for an unusable environment value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}={value:?}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Live API client settings
    pub mbta: MbtaConfig,
    /// Serve fixtures from this directory instead of calling the API
    pub mock_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let mut mbta = MbtaConfig::new();

        if let Some(key) = get(API_KEY_VAR) {
            if !key.chars().all(|c| c.is_ascii_graphic() || c == ' ') {
                return Err(ConfigError {
                    var: API_KEY_VAR,
                    value: key,
                    reason: "must be printable ASCII".to_string(),
                });
            }
            mbta = mbta.with_api_key(key);
        }

        if let Some(url) = get(BASE_URL_VAR) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError {
                    var: BASE_URL_VAR,
                    value: url,
                    reason: "expected an http or https URL".to_string(),
                });
            }
            mbta = mbta.with_base_url(url);
        }

        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = match raw.trim().parse::<u64>() {
                Ok(0) => {
                    return Err(ConfigError {
                        var: TIMEOUT_VAR,
                        value: raw,
                        reason: "must be at least 1".to_string(),
                    });
                }
                Ok(secs) => secs,
                Err(e) => {
                    return Err(ConfigError {
                        var: TIMEOUT_VAR,
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            };
            mbta = mbta.with_timeout(secs);
        }

        Ok(Self {
            mbta,
            mock_dir: get(MOCK_DIR_VAR).map(PathBuf::from),
        })
    }
}
