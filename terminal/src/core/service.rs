//! # Service Traits
//!
//! The [`LedgerService`] trait is the seam between the sync state machine and the
//! network. Production code uses [`crate::services::api::ApiClient`]; tests inject
//! scripted implementations.

use crate::app::state::ViewSnapshot;
use crate::core::error::Result;
use async_trait::async_trait;
use shared::{Block, SearchHit};

/// Confirmation returned by a successful `POST /tx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    /// Transaction text as recorded by the service.
    pub added: String,
    /// Pending pool size after the insert, when the service reports it.
    pub pending_size: Option<usize>,
}

/// Result of a mining request that reached the service.
///
/// A decline is a successful round trip carrying the service's refusal; it is
/// kept apart from transport errors so callers can tell "server said no" from
/// "server unreachable".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MineOutcome {
    /// A new block was mined and appended.
    Mined(Block),
    /// The service refused, with its own message.
    Declined(String),
}

/// The four remote ledger operations.
///
/// Implementations must never panic on network or decode failures; every such
/// failure comes back as an [`crate::core::error::AppError`].
#[async_trait]
pub trait LedgerService: Send + Sync {
    /// `GET /view`: full chain, pending pool and display name.
    async fn fetch_view(&self) -> Result<ViewSnapshot>;

    /// `POST /tx`: queue a transaction in the pending pool.
    async fn submit_transaction(&self, text: &str) -> Result<TransactionReceipt>;

    /// `POST /mine`: mine the pending pool into a new block.
    async fn trigger_mining(&self) -> Result<MineOutcome>;

    /// `GET /search?q=`: blocks whose data contains `query`.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>>;
}
