//! # Common Error Types
//!
//! Consolidated error handling for the ledger terminal.
//!
//! ## Error Categories
//!
//! - **Api**: the ledger service could not be reached or answered with an
//!   unexpected HTTP status (connection refused, timeout, 5xx)
//! - **Decode**: the service answered but the body was not the expected JSON
//! - **Validation**: local input rejection, no request was issued
//! - **Config**: invalid environment configuration
//!
//! Application-level declines (the service refusing to mine an empty pool) are
//! *not* errors; they travel as [`crate::core::service::MineOutcome::Declined`].
//!
//! ## Usage Pattern
//!
//! ```rust
//! use ledger_terminal::core::error::AppError;
//!
//! fn require_text(text: &str) -> Result<&str, AppError> {
//!     let trimmed = text.trim();
//!     if trimmed.is_empty() {
//!         return Err(AppError::Validation("Transaction text is required".to_string()));
//!     }
//!     Ok(trimmed)
//! }
//!
//! assert!(require_text("   ").is_err());
//! ```

use thiserror::Error;

/// Application-wide error type.
///
/// ```rust
/// use ledger_terminal::core::error::AppError;
///
/// let api_err = AppError::Api("Connection refused".to_string());
/// let cfg_err = AppError::Config("LEDGER_POLL_INTERVAL_MS must be positive".to_string());
///
/// assert_eq!(api_err.to_string(), "API error: Connection refused");
/// assert_eq!(cfg_err.to_string(), "Configuration error: LEDGER_POLL_INTERVAL_MS must be positive");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Network failure, timeout or unexpected HTTP status.
    #[error("API error: {0}")]
    Api(String),

    /// Response body did not decode into the expected DTO.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Input validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else if err.is_timeout() {
            AppError::Api(format!("Request timed out: {}", err))
        } else {
            AppError::Api(format!("Network error: {}", err))
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(err.to_string())
    }
}
