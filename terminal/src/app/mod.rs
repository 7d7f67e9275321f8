//! # Application Session
//!
//! The [`App`] struct is one client session: it owns the view store, the poll
//! scheduler, the mutation coordinator and the search executor, and turns UI
//! clicks into tasks on the tokio runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Main Thread (egui)                       │
//! │  ui::render() ── reads ──► ViewModel::project(view, input)  │
//! │       │ clicks                                              │
//! │  ┌────▼─────────────────────────────────────────────────┐   │
//! │  │  App (session)                                       │   │
//! │  │  - handle_add_click()    - handle_mine_click()       │   │
//! │  │  - handle_search_click() - handle_refresh_click()    │   │
//! │  └────┬─────────────────────────────────────────────────┘   │
//! └───────┼─────────────────────────────────────────────────────┘
//!         │ tokio::spawn
//! ┌───────▼─────────────────────────────────────────────────────┐
//! │                  Tokio Runtime                              │
//! │  PollScheduler ──┐                                          │
//! │                  ├──► LedgerService (HTTP) ──► ViewStore    │
//! │  MutationCoordinator ─┘           SearchExecutor            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! - [`ViewStore`]: server-owned snapshot, connectivity, loading. Written by
//!   the poller and the coordinator, whole-snapshot replacement only.
//! - `Arc<RwLock<InteractionState>>`: drafts, status line, search results,
//!   mining flag.
//!
//! Locks are `parking_lot` and are never held across an `.await`.
//!
//! ## Lifecycle
//!
//! ```rust,no_run
//! use ledger_terminal::app::App;
//! use ledger_terminal::config::AppConfig;
//!
//! # let runtime = tokio::runtime::Runtime::new().unwrap();
//! let app = App::new(AppConfig::default(), runtime.handle().clone());
//! app.start();      // immediate refresh, then every poll interval
//! // ... render frames ...
//! app.shutdown();   // also happens on drop
//! ```

mod coordinator;
mod poller;
mod search;
pub mod state;
mod store;
mod tasks;

#[cfg(test)]
pub(crate) mod testing;

pub use coordinator::{MineAttempt, MiningGuard, MutationCoordinator, SubmitAttempt};
pub use poller::PollScheduler;
pub use search::{SearchAttempt, SearchExecutor};
pub use state::*;
pub use store::ViewStore;
pub use tasks::refresh_view;

use crate::config::AppConfig;
use crate::core::service::LedgerService;
use crate::services::api::ApiClient;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// One mounted client session.
pub struct App {
    /// Configuration the session was built from.
    pub config: AppConfig,
    /// Server-owned view state.
    pub store: ViewStore,
    /// Operator-owned state.
    pub interaction: Arc<RwLock<InteractionState>>,
    coordinator: MutationCoordinator,
    search: SearchExecutor,
    poller: PollScheduler,
    runtime: Handle,
}

impl App {
    /// Session talking HTTP to the configured ledger service.
    pub fn new(config: AppConfig, runtime: Handle) -> Self {
        let service: Arc<dyn LedgerService> = Arc::new(ApiClient::new(&config));
        Self::with_service(config, service, runtime)
    }

    /// Session over any [`LedgerService`].
    pub fn with_service(config: AppConfig, service: Arc<dyn LedgerService>, runtime: Handle) -> Self {
        let store = ViewStore::new();
        let interaction = Arc::new(RwLock::new(InteractionState::default()));

        let coordinator =
            MutationCoordinator::new(Arc::clone(&service), store.clone(), Arc::clone(&interaction));
        let search = SearchExecutor::new(Arc::clone(&service), Arc::clone(&interaction));
        let poller = PollScheduler::new(service, store.clone(), config.poll_interval, runtime.clone());

        tracing::info!(
            api_base_url = %config.api_base_url,
            poll_interval_ms = config.poll_interval.as_millis(),
            "Session initialized"
        );

        Self {
            config,
            store,
            interaction,
            coordinator,
            search,
            poller,
            runtime,
        }
    }

    /// Begin background polling (immediate refresh first).
    pub fn start(&self) {
        self.poller.start();
    }

    /// Stop background polling. Idempotent.
    pub fn shutdown(&self) {
        self.poller.stop();
    }

    /// Copy of the view state for rendering.
    pub fn view(&self) -> ViewState {
        self.store.view()
    }

    /// Copy of the interaction state for rendering.
    pub fn interaction_snapshot(&self) -> InteractionState {
        self.interaction.read().clone()
    }

    pub fn set_tx_draft(&self, text: String) {
        self.interaction.write().tx_draft = text;
    }

    pub fn set_search_draft(&self, text: String) {
        self.interaction.write().search_draft = text;
    }

    // ========== GUI Action Methods ==========

    /// Submit the current transaction draft.
    pub fn handle_add_click(&self) -> JoinHandle<SubmitAttempt> {
        let draft = self.interaction.read().tx_draft.clone();
        tasks::actions::spawn_add_transaction(&self.runtime, self.coordinator.clone(), draft)
    }

    /// Request mining. Rejected by the coordinator while a request is in flight.
    pub fn handle_mine_click(&self) -> JoinHandle<MineAttempt> {
        tasks::actions::spawn_mine(&self.runtime, self.coordinator.clone())
    }

    /// Search with the current search draft.
    pub fn handle_search_click(&self) -> JoinHandle<SearchAttempt> {
        let query = self.interaction.read().search_draft.clone();
        tasks::actions::spawn_search(&self.runtime, self.search.clone(), query)
    }

    /// One out-of-band refresh; the poll timer keeps its own schedule.
    pub fn handle_refresh_click(&self) -> JoinHandle<Connectivity> {
        tasks::actions::spawn_refresh(&self.runtime, self.coordinator.clone())
    }
}
