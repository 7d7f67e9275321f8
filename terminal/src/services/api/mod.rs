//! # Ledger API Client Module
//!
//! HTTP client for the remote ledger service. Every network, status or decode
//! failure is normalized into [`crate::core::error::AppError`]; nothing here
//! touches application state.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient struct, LedgerService impl
//! ├── chain.rs         - Chain endpoints (GET /view, POST /mine)
//! ├── transactions.rs  - Pending pool endpoint (POST /tx)
//! └── search.rs        - Search endpoint (GET /search)
//! ```

pub mod chain;
pub mod client;
pub mod search;
pub mod transactions;

pub use client::ApiClient;
