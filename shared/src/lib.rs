//! # Shared Ledger Data Transfer Objects
//!
//! This library defines the contract between the ledger terminal and the remote
//! ledger service. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the ledger HTTP API
//!   - **[`dto::ledger`]**: Blocks, chain view, transactions, mining and search
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_hash`]**: Shorten a hex hash for display
//!   - **[`utils::truncate_hash`]**: Shorten with the default prefix/suffix
//!
//! ## Wire Format
//!
//! The ledger service speaks camelCase JSON (`prevHash`, `merkleRoot`, `pendingTx`,
//! `blockIndex`), so every DTO carries `#[serde(rename_all = "camelCase")]`.
//! Collections the service may omit or send as `null` decode as empty vectors.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::ledger::ViewResponse;
//!
//! let body = r#"{"displayName":"Demo","blocks":[],"pendingTx":["Alice pays Bob 5"]}"#;
//! let view: ViewResponse = serde_json::from_str(body).unwrap();
//! assert_eq!(view.pending_tx.len(), 1);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
