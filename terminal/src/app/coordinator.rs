//! # Mutation Coordinator
//!
//! Sequences operator mutations (submit transaction, mine) against the shared
//! state and always reconciles with the service afterwards. Ledger content is
//! never applied optimistically: the pending count and block list only change
//! when a refresh brings back the service's own view.
//!
//! ## Mining Exclusion
//!
//! [`MiningGuard`] is the only writer of `InteractionState::mining`. Acquiring
//! it is a check-and-set under the state's write lock, so a second
//! `mine_block()` while one is in flight is rejected here, not just by a
//! disabled button. The guard clears the flag in `Drop`, which covers every
//! exit: success, decline, transport error, a panicking transport future and
//! cancellation of the task itself.

use crate::app::state::{Connectivity, InteractionState};
use crate::app::store::ViewStore;
use crate::app::tasks::refresh_view;
use crate::core::service::{LedgerService, MineOutcome};
use crate::utils::validation;
use futures::FutureExt;
use parking_lot::RwLock;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

pub const MSG_TX_FAILED: &str = "Could not add transaction (server offline?)";
pub const MSG_MINING: &str = "Mining… please wait";
pub const MSG_MINE_FAILED: &str = "Mining failed (server offline?)";

/// Result of [`MutationCoordinator::add_transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Draft was empty after trimming; nothing was sent.
    Skipped,
    /// Service accepted the transaction.
    Added(String),
    /// Transport failure; draft kept for retry.
    Failed,
}

/// Result of [`MutationCoordinator::mine_block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MineAttempt {
    /// Another mine request was already in flight; nothing was sent.
    Rejected,
    /// New block with this index.
    Mined(u64),
    /// Service refused, with its reason.
    Declined(String),
    /// Transport failure.
    Failed,
}

/// Scoped ownership of the in-flight mining flag.
#[derive(Debug)]
pub struct MiningGuard {
    interaction: Arc<RwLock<InteractionState>>,
}

impl MiningGuard {
    /// Set the flag if it is clear. `None` means a request is already in flight.
    pub fn acquire(interaction: &Arc<RwLock<InteractionState>>) -> Option<Self> {
        let mut state = interaction.write();
        if state.mining {
            return None;
        }
        state.mining = true;
        Some(Self {
            interaction: Arc::clone(interaction),
        })
    }
}

impl Drop for MiningGuard {
    fn drop(&mut self) {
        self.interaction.write().mining = false;
    }
}

/// Operator mutations plus the forced refresh that follows each one.
#[derive(Clone)]
pub struct MutationCoordinator {
    service: Arc<dyn LedgerService>,
    store: ViewStore,
    interaction: Arc<RwLock<InteractionState>>,
}

impl MutationCoordinator {
    pub fn new(
        service: Arc<dyn LedgerService>,
        store: ViewStore,
        interaction: Arc<RwLock<InteractionState>>,
    ) -> Self {
        Self {
            service,
            store,
            interaction,
        }
    }

    /// Submit `draft` to the pending pool, then refresh.
    ///
    /// Empty or whitespace-only drafts are ignored without a request, a
    /// refresh or any state change.
    pub async fn add_transaction(&self, draft: &str) -> SubmitAttempt {
        let text = match validation::validate_transaction_text(draft) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring empty transaction draft");
                return SubmitAttempt::Skipped;
            }
        };

        let attempt = match self.service.submit_transaction(text).await {
            Ok(receipt) => {
                tracing::info!(pending_size = ?receipt.pending_size, "Transaction added");
                let mut state = self.interaction.write();
                state.status_message = Some(format!("Added: {}", receipt.added));
                // Text typed while the request was in flight stays.
                if state.tx_draft.trim() == text {
                    state.tx_draft.clear();
                }
                SubmitAttempt::Added(receipt.added)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Transaction submit failed, keeping draft");
                self.set_status(MSG_TX_FAILED);
                SubmitAttempt::Failed
            }
        };

        self.refresh().await;
        attempt
    }

    /// Mine the pending pool, then refresh.
    ///
    /// Rejected immediately, with no request and no message change, while
    /// another mine request is in flight.
    pub async fn mine_block(&self) -> MineAttempt {
        let Some(guard) = MiningGuard::acquire(&self.interaction) else {
            tracing::debug!("Mine request rejected: already in flight");
            return MineAttempt::Rejected;
        };

        self.set_status(MSG_MINING);
        let started = std::time::Instant::now();

        let result = AssertUnwindSafe(self.service.trigger_mining())
            .catch_unwind()
            .await;

        let attempt = match result {
            Ok(Ok(MineOutcome::Mined(block))) => {
                self.set_status(&format!("Mined block #{}", block.index));
                MineAttempt::Mined(block.index)
            }
            Ok(Ok(MineOutcome::Declined(reason))) => {
                self.set_status(&reason);
                MineAttempt::Declined(reason)
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Mine request failed");
                self.set_status(MSG_MINE_FAILED);
                MineAttempt::Failed
            }
            Err(_) => {
                tracing::error!("Mine request panicked");
                self.set_status(MSG_MINE_FAILED);
                MineAttempt::Failed
            }
        };

        tracing::info!(
            attempt = ?attempt,
            duration_ms = started.elapsed().as_millis(),
            "Mine request resolved"
        );

        drop(guard);
        self.refresh().await;
        attempt
    }

    /// One view reconciliation, same as a poll tick. Does not touch the poll timer.
    pub async fn refresh(&self) -> Connectivity {
        refresh_view(self.service.as_ref(), &self.store).await
    }

    fn set_status(&self, message: &str) {
        self.interaction.write().status_message = Some(message.to_string());
    }
}
