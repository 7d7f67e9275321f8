//! # API Client
//!
//! HTTP client for the ledger service.

use crate::app::state::ViewSnapshot;
use crate::config::AppConfig;
use crate::core::error::Result;
use crate::core::service::{LedgerService, MineOutcome, TransactionReceipt};
use reqwest::Client;
use shared::SearchHit;
use std::time::Duration;

/// HTTP client for the ledger service.
///
/// Holds one pooled `reqwest::Client` for the session. View, transaction and
/// search calls use the configured request timeout; mining overrides it per
/// request since proof-of-work runs inside the call.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    pub(crate) mine_timeout: Duration,
}

impl ApiClient {
    /// Create a client for the configured base URL.
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build HTTP client with timeout, using defaults");
                Client::new()
            });

        Self {
            client,
            base_url: config.api_base_url.clone(),
            mine_timeout: config.mine_timeout,
        }
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `/view`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl LedgerService for ApiClient {
    async fn fetch_view(&self) -> Result<ViewSnapshot> {
        crate::services::api::chain::fetch_view(self).await
    }

    async fn submit_transaction(&self, text: &str) -> Result<TransactionReceipt> {
        crate::services::api::transactions::submit_transaction(self, text).await
    }

    async fn trigger_mining(&self) -> Result<MineOutcome> {
        crate::services::api::chain::trigger_mining(self).await
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        crate::services::api::search::search(self, query).await
    }
}
