//! # Client Configuration
//!
//! The terminal talks to exactly one ledger service. Everything tunable is read
//! from the environment (after loading `.env`, see `main.rs`):
//!
//! | Variable | Default |
//! |---|---|
//! | `LEDGER_API_URL` | `http://localhost:8080` |
//! | `LEDGER_POLL_INTERVAL_MS` | `5000` |
//! | `LEDGER_REQUEST_TIMEOUT_MS` | `10000` |
//! | `LEDGER_MINE_TIMEOUT_MS` | `60000` |

use crate::core::error::{AppError, Result};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5_000;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
/// Proof-of-work runs inside the mine request, so it gets a longer budget.
pub const DEFAULT_MINE_TIMEOUT_MS: u64 = 60_000;

/// Ledger terminal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the ledger service, without trailing slash.
    pub api_base_url: String,
    /// Interval between background view refreshes.
    pub poll_interval: Duration,
    /// Timeout for view, transaction and search requests.
    pub request_timeout: Duration,
    /// Timeout for mining requests.
    pub mine_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
            mine_timeout: Duration::from_millis(DEFAULT_MINE_TIMEOUT_MS),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = match lookup("LEDGER_API_URL") {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            api_base_url,
            poll_interval: millis(&lookup, "LEDGER_POLL_INTERVAL_MS", DEFAULT_POLL_INTERVAL_MS)?,
            request_timeout: millis(&lookup, "LEDGER_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?,
            mine_timeout: millis(&lookup, "LEDGER_MINE_TIMEOUT_MS", DEFAULT_MINE_TIMEOUT_MS)?,
        })
    }

    /// Builder-style override of the base URL.
    pub fn with_base_url(mut self, url: &str) -> Result<Self> {
        self.api_base_url = normalize_base_url(url)?;
        Ok(self)
    }
}

fn millis<F>(lookup: &F, key: &str, default: u64) -> Result<Duration>
where
    F: Fn(&str) -> Option<String>,
{
    let value = match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|e| AppError::Config(format!("{} must be an integer: {}", key, e)))?,
        None => default,
    };

    if value == 0 {
        return Err(AppError::Config(format!("{} must be positive", key)));
    }

    Ok(Duration::from_millis(value))
}

/// Trim whitespace and trailing slashes; require an http(s) scheme.
fn normalize_base_url(raw: &str) -> Result<String> {
    let url = raw.trim().trim_end_matches('/');

    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| {
            AppError::Config(format!(
                "LEDGER_API_URL must start with http:// or https://, got '{}'",
                raw
            ))
        })?;

    if host.is_empty() {
        return Err(AppError::Config("LEDGER_API_URL is missing a host".to_string()));
    }

    Ok(url.to_string())
}
