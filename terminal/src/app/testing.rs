//! Scripted in-memory [`LedgerService`] for state machine tests.

use crate::app::state::ViewSnapshot;
use crate::core::error::{AppError, Result};
use crate::core::service::{LedgerService, MineOutcome, TransactionReceipt};
use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{Block, SearchHit};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// Scripted reply for `trigger_mining`.
#[derive(Debug, Clone)]
pub enum MineScript {
    Reply(Result<MineOutcome>),
    Panic,
}

/// Mock ledger. Each operation pops its next scripted reply; `fetch_view`
/// falls back to a sticky default once its queue is empty.
#[derive(Default)]
pub struct MockLedger {
    views: Mutex<VecDeque<Result<ViewSnapshot>>>,
    default_view: Mutex<Option<Result<ViewSnapshot>>>,
    tx_replies: Mutex<VecDeque<Result<TransactionReceipt>>>,
    mine_replies: Mutex<VecDeque<MineScript>>,
    search_replies: Mutex<VecDeque<Result<Vec<SearchHit>>>>,

    /// Ordered log of transport events, e.g. `["tx", "tx:done", "view"]`.
    pub calls: Mutex<Vec<String>>,
    pub submitted: Mutex<Vec<String>>,
    pub queries: Mutex<Vec<String>>,

    mine_outstanding: AtomicUsize,
    pub max_mine_outstanding: AtomicUsize,
    mine_gate: Mutex<Option<Arc<Notify>>>,
    pub mine_started: Notify,
    search_gate: Mutex<Option<Arc<Notify>>>,
    pub search_started: Notify,
}

impl MockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_view(&self, reply: Result<ViewSnapshot>) {
        self.views.lock().push_back(reply);
    }

    /// Reply used whenever the view queue is empty.
    pub fn set_default_view(&self, reply: Result<ViewSnapshot>) {
        *self.default_view.lock() = Some(reply);
    }

    pub fn push_tx(&self, reply: Result<TransactionReceipt>) {
        self.tx_replies.lock().push_back(reply);
    }

    pub fn push_mine(&self, script: MineScript) {
        self.mine_replies.lock().push_back(script);
    }

    pub fn push_search(&self, reply: Result<Vec<SearchHit>>) {
        self.search_replies.lock().push_back(reply);
    }

    /// Make every mine call wait until the returned gate is notified.
    pub fn hold_mining(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.mine_gate.lock() = Some(gate.clone());
        gate
    }

    /// Make only the next search call wait until the returned gate is notified.
    pub fn hold_next_search(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.search_gate.lock() = Some(gate.clone());
        gate
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.lock().iter().filter(|c| c.as_str() == op).count()
    }

    pub fn log(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    fn record(&self, op: &str) {
        self.calls.lock().push(op.to_string());
    }
}

#[async_trait]
impl LedgerService for MockLedger {
    async fn fetch_view(&self) -> Result<ViewSnapshot> {
        self.record("view");
        let next = self.views.lock().pop_front();
        next.or_else(|| self.default_view.lock().clone())
            .unwrap_or_else(|| Err(AppError::Api("no view scripted".to_string())))
    }

    async fn submit_transaction(&self, text: &str) -> Result<TransactionReceipt> {
        self.record("tx");
        self.submitted.lock().push(text.to_string());
        let reply = self
            .tx_replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Api("no tx reply scripted".to_string())));
        self.record("tx:done");
        reply
    }

    async fn trigger_mining(&self) -> Result<MineOutcome> {
        self.record("mine");
        let outstanding = self.mine_outstanding.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_mine_outstanding.fetch_max(outstanding, Ordering::SeqCst);
        self.mine_started.notify_one();

        let gate = self.mine_gate.lock().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        self.mine_outstanding.fetch_sub(1, Ordering::SeqCst);
        let script = self
            .mine_replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| MineScript::Reply(Err(AppError::Api("no mine reply scripted".to_string()))));
        self.record("mine:done");

        match script {
            MineScript::Reply(reply) => reply,
            MineScript::Panic => panic!("scripted transport panic"),
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.record("search");
        self.queries.lock().push(query.to_string());
        let reply = self
            .search_replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Api("no search reply scripted".to_string())));
        self.search_started.notify_one();

        let gate = self.search_gate.lock().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        reply
    }
}

pub fn sample_block(index: u64, data: &[&str]) -> Block {
    Block {
        index,
        timestamp: "2024-05-01T10:00:00Z".to_string(),
        data: data.iter().map(|d| d.to_string()).collect(),
        prev_hash: if index == 0 { String::new() } else { format!("{:064x}", index - 1) },
        hash: format!("{:064x}", index),
        nonce: 1_000 + index as i64,
        merkle_root: format!("root-{}", index),
    }
}

/// Snapshot with `block_count` blocks (indices `0..block_count`) and the given pending pool.
pub fn sample_snapshot(name: &str, block_count: u64, pending: &[&str]) -> ViewSnapshot {
    ViewSnapshot {
        display_name: name.to_string(),
        blocks: (0..block_count).map(|i| sample_block(i, &["tx"])).collect(),
        pending_transactions: pending.iter().map(|p| p.to_string()).collect(),
        difficulty: Some(4),
    }
}
