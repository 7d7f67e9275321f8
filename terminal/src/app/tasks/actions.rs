//! # Operator Action Tasks
//!
//! The egui thread must never await the network. Each button click becomes a
//! task on the tokio runtime; results land in shared state, which the next
//! frame picks up. Handles are returned so tests can await completion.

use crate::app::coordinator::{MineAttempt, MutationCoordinator, SubmitAttempt};
use crate::app::search::{SearchAttempt, SearchExecutor};
use crate::app::state::Connectivity;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub(crate) fn spawn_add_transaction(
    runtime: &Handle,
    coordinator: MutationCoordinator,
    draft: String,
) -> JoinHandle<SubmitAttempt> {
    runtime.spawn(async move {
        let attempt = coordinator.add_transaction(&draft).await;
        tracing::debug!(attempt = ?attempt, "Add transaction task finished");
        attempt
    })
}

pub(crate) fn spawn_mine(runtime: &Handle, coordinator: MutationCoordinator) -> JoinHandle<MineAttempt> {
    runtime.spawn(async move { coordinator.mine_block().await })
}

pub(crate) fn spawn_search(
    runtime: &Handle,
    executor: SearchExecutor,
    query: String,
) -> JoinHandle<SearchAttempt> {
    runtime.spawn(async move { executor.search(&query).await })
}

pub(crate) fn spawn_refresh(runtime: &Handle, coordinator: MutationCoordinator) -> JoinHandle<Connectivity> {
    runtime.spawn(async move { coordinator.refresh().await })
}
