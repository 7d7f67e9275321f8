//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the ledger service over its REST API.
//!
//! ## Module Organization
//!
//! - [`ledger`] - Blocks, chain view, transaction submission, mining and search
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /tx
//! Content-Type: application/json
//!
//! { "data": "Alice pays Bob 5" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "ok": true, "added": "Alice pays Bob 5", "pendingSize": 1 }
//! ```

pub mod ledger;

pub use ledger::*;
