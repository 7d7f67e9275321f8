//! # Application State Types
//!
//! The server-owned view ([`ViewState`]) and the operator-owned interaction
//! state ([`InteractionState`]). Ledger content only ever arrives as a whole
//! [`ViewSnapshot`] from the service; nothing here is edited field by field.

use chrono::{DateTime, Local};
use shared::{Block, SearchHit, ViewResponse};

/// Display name used until the service reports its own.
pub const DEFAULT_DISPLAY_NAME: &str = "Ledger";

/// One complete `GET /view` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub display_name: String,
    /// Blocks in the order the service returned them.
    pub blocks: Vec<Block>,
    pub pending_transactions: Vec<String>,
    /// Proof-of-work difficulty, when the service reports it.
    pub difficulty: Option<u32>,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            blocks: Vec::new(),
            pending_transactions: Vec::new(),
            difficulty: None,
        }
    }
}

impl From<ViewResponse> for ViewSnapshot {
    fn from(view: ViewResponse) -> Self {
        Self {
            display_name: view
                .display_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DISPLAY_NAME.to_string()),
            blocks: view.blocks,
            pending_transactions: view.pending_tx,
            difficulty: view.difficulty,
        }
    }
}

/// Outcome of the most recent view refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Connectivity {
    #[default]
    Reachable,
    Unreachable,
}

impl Connectivity {
    pub fn is_reachable(self) -> bool {
        self == Connectivity::Reachable
    }
}

/// Everything the store holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub snapshot: ViewSnapshot,
    pub connectivity: Connectivity,
    /// True until the first refresh of the session resolves, either way.
    pub loading: bool,
    /// Wall-clock time of the last successful refresh.
    pub last_synced: Option<DateTime<Local>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Operator-side state: drafts, status line, search results, mining flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    /// Transaction input text.
    pub tx_draft: String,
    /// Search input text.
    pub search_draft: String,
    /// Current status or error line.
    pub status_message: Option<String>,
    /// Results of the latest search, replaced wholesale.
    pub search_results: Vec<SearchHit>,
    /// A mine request is in flight. Only [`crate::app::MiningGuard`] writes this.
    pub mining: bool,
}
