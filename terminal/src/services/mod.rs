//! # Services Module
//!
//! External service integrations for the ledger terminal.
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │           Ledger Terminal           │
//! │  ┌──────────────────┐               │
//! │  │  ApiClient       │               │
//! │  │  (api/)          │               │
//! │  └────────┬─────────┘               │
//! └───────────┼─────────────────────────┘
//!             │ HTTP/JSON
//!             ▼
//! ┌─────────────────────────────────────┐
//! │  Ledger Service                     │
//! │  GET  /view     POST /tx            │
//! │  POST /mine     GET  /search?q=     │
//! └─────────────────────────────────────┘
//! ```

pub mod api;

pub use api::ApiClient;
