//! # Core Abstractions
//!
//! Foundational types used throughout the ledger terminal:
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: The [`LedgerService`] transport trait and its result types
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ledger_terminal::config::AppConfig;
//! use ledger_terminal::core::service::LedgerService;
//! use ledger_terminal::services::api::ApiClient;
//!
//! // In production: the HTTP client
//! let api: Arc<dyn LedgerService> = Arc::new(ApiClient::new(&AppConfig::default()));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, Result};
pub use service::{LedgerService, MineOutcome, TransactionReceipt};
