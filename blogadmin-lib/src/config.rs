//! Client configuration read from the environment

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "BLOGADMIN_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "BLOGADMIN_TIMEOUT_SECS";

static API_BASE_URL: OnceLock<Result<String, ConfigError>> = OnceLock::new();

/// Returns the API base URL, reading the environment on first use only.
///
/// A `.env` file in the working directory is honoured. Later changes to the
/// environment are not observed.
pub fn api_base_url() -> Result<&'static str, ConfigError> {
    API_BASE_URL
        .get_or_init(|| {
            let _ = dotenvy::dotenv();
            let raw = env::var(API_URL_VAR).map_err(|_| ConfigError::Missing(API_URL_VAR))?;
            validate_base_url(&raw)
        })
        .as_deref()
        .map_err(Clone::clone)
}

/// Settings for building an [`AdminClient`](crate::AdminClient).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL every endpoint is appended to.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    /// Creates a configuration for the given base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: validate_base_url(base_url.as_ref())?,
            timeout: None,
        })
    }

    /// Builds the configuration from `BLOGADMIN_API_URL` and
    /// `BLOGADMIN_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = api_base_url()?.to_string();
        let timeout = match env::var(TIMEOUT_VAR) {
            Ok(value) => Some(parse_timeout(&value)?),
            Err(_) => None,
        };
        Ok(Self { base_url, timeout })
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn validate_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| ConfigError::InvalidValue {
            var: TIMEOUT_VAR,
            value: value.to_string(),
        })
}
