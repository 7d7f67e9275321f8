//! # View Refresh
//!
//! A single reconciliation step: fetch the view and write the outcome to the
//! store. On failure the previous snapshot stays in place; stale data is
//! preferred over a blank screen.

use crate::app::state::Connectivity;
use crate::app::store::ViewStore;
use crate::core::service::LedgerService;

/// Fetch the view once and record the result.
///
/// Returns the connectivity this refresh observed. Never fails: transport
/// errors end here as [`Connectivity::Unreachable`].
pub async fn refresh_view(service: &dyn LedgerService, store: &ViewStore) -> Connectivity {
    let connectivity = match service.fetch_view().await {
        Ok(snapshot) => {
            tracing::debug!(
                block_count = snapshot.blocks.len(),
                pending_count = snapshot.pending_transactions.len(),
                "View refreshed"
            );
            store.replace(snapshot);
            Connectivity::Reachable
        }
        Err(e) => {
            if store.connectivity().is_reachable() {
                tracing::warn!(error = %e, "Ledger service unreachable, keeping last known view");
            } else {
                tracing::debug!(error = %e, "Ledger service still unreachable");
            }
            Connectivity::Unreachable
        }
    };

    store.set_connectivity(connectivity);
    store.mark_loaded();
    connectivity
}
