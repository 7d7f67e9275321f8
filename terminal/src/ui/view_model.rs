//! # View Model
//!
//! Pure projection from session state to what one frame draws. No I/O, no
//! locks, no egui types: every rendering decision lives here so it can be
//! tested without a window.

use crate::app::state::{InteractionState, ViewState};
use shared::{truncate_hash, Block, SearchHit};

pub const NO_BLOCKS: &str = "No blocks yet.";
pub const LOADING_BANNER: &str = "Loading blockchain…";

/// Everything one frame renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    /// Shown while the first refresh is outstanding.
    pub loading_banner: Option<&'static str>,
    /// Shown while the last refresh failed.
    pub offline_banner: Option<String>,
    pub pending_label: String,
    pub difficulty_label: Option<String>,
    pub last_synced_label: Option<String>,
    /// Blocks in received order.
    pub blocks: Vec<BlockCard>,
    pub empty_chain: Option<&'static str>,
    pub mine_button: MineButton,
    pub status_message: Option<String>,
    pub search_hits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MineButton {
    pub label: &'static str,
    pub enabled: bool,
}

/// One rendered block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCard {
    /// Stable render key (the block index).
    pub key: u64,
    pub title: String,
    pub timestamp: String,
    pub hash: String,
    pub short_hash: String,
    pub prev_hash: String,
    pub nonce: String,
    pub merkle_root: String,
    pub data: Vec<String>,
}

impl BlockCard {
    fn from_block(block: &Block) -> Self {
        Self {
            key: block.index,
            title: format!("Block #{}", block.index),
            timestamp: format_timestamp(&block.timestamp),
            hash: block.hash.clone(),
            short_hash: truncate_hash(&block.hash),
            prev_hash: if block.prev_hash.is_empty() {
                "(genesis)".to_string()
            } else {
                block.prev_hash.clone()
            },
            nonce: block.nonce.to_string(),
            merkle_root: block.merkle_root.clone(),
            data: block.data.clone(),
        }
    }
}

impl ViewModel {
    pub fn project(view: &ViewState, input: &InteractionState, api_base_url: &str) -> Self {
        let snapshot = &view.snapshot;

        Self {
            title: snapshot.display_name.clone(),
            loading_banner: view.loading.then_some(LOADING_BANNER),
            offline_banner: (!view.connectivity.is_reachable())
                .then(|| format!("Backend not reachable at {}. Make sure the ledger service is running.", api_base_url)),
            pending_label: format!("Pending: {}", snapshot.pending_transactions.len()),
            difficulty_label: snapshot.difficulty.map(|d| format!("Difficulty: {}", d)),
            last_synced_label: view
                .last_synced
                .map(|t| format!("Last sync: {}", t.format("%H:%M:%S"))),
            blocks: snapshot.blocks.iter().map(BlockCard::from_block).collect(),
            empty_chain: snapshot.blocks.is_empty().then_some(NO_BLOCKS),
            mine_button: if input.mining {
                MineButton {
                    label: "Mining…",
                    enabled: false,
                }
            } else {
                MineButton {
                    label: "Mine",
                    enabled: true,
                }
            },
            status_message: input.status_message.clone(),
            search_hits: input.search_results.iter().map(format_hit).collect(),
        }
    }
}

fn format_hit(hit: &SearchHit) -> String {
    format!("In block #{}: {}", hit.block_index, hit.matches.join(", "))
}

/// RFC 3339 timestamps render as `YYYY-MM-DD HH:MM:SS +HH:MM`; anything else verbatim.
fn format_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S %:z").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
