//! # Search Executor
//!
//! Query/response cycle on top of the transport, independent of polling.
//! Results are replaced wholesale on every call; a failed search shows no
//! results rather than an inline error or stale matches from an older query.
//!
//! Every call takes a new generation number. A response is written only if
//! no later call has started since, so the list always belongs to the most
//! recent query, including a blank one that cleared it.

use crate::app::state::InteractionState;
use crate::core::service::LedgerService;
use crate::utils::validation;
use parking_lot::RwLock;
use shared::SearchHit;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Result of [`SearchExecutor::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAttempt {
    /// Blank query; results cleared locally without a request.
    Cleared,
    /// Search returned this many hits.
    Found(usize),
    /// Transport failure; results cleared.
    Failed,
    /// A newer search started before this one resolved; its response was dropped.
    Superseded,
}

#[derive(Clone)]
pub struct SearchExecutor {
    service: Arc<dyn LedgerService>,
    interaction: Arc<RwLock<InteractionState>>,
    generation: Arc<AtomicU64>,
}

impl SearchExecutor {
    pub fn new(service: Arc<dyn LedgerService>, interaction: Arc<RwLock<InteractionState>>) -> Self {
        Self {
            service,
            interaction,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run `query` and replace the result list. Never touches the search draft.
    pub async fn search(&self, query: &str) -> SearchAttempt {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(query) = validation::normalize_query(query) else {
            self.interaction.write().search_results.clear();
            return SearchAttempt::Cleared;
        };

        match self.service.search(query).await {
            Ok(hits) => {
                let count = hits.len();
                if !self.publish(generation, hits) {
                    tracing::debug!(query = %query, "Dropping superseded search response");
                    return SearchAttempt::Superseded;
                }
                tracing::debug!(query = %query, hit_count = count, "Search results updated");
                SearchAttempt::Found(count)
            }
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Search failed, clearing results");
                if !self.publish(generation, Vec::new()) {
                    return SearchAttempt::Superseded;
                }
                SearchAttempt::Failed
            }
        }
    }

    /// Replace the results if `generation` is still the latest call.
    /// Check and write share one lock so a newer call cannot slip in between.
    fn publish(&self, generation: u64, hits: Vec<SearchHit>) -> bool {
        let mut state = self.interaction.write();
        if self.generation.load(Ordering::SeqCst) != generation {
            return false;
        }
        state.search_results = hits;
        true
    }
}
