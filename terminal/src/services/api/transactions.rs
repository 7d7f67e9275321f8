//! # Transaction Endpoint
//!
//! `POST /tx` queues a transaction in the service's pending pool.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use crate::core::service::TransactionReceipt;
use shared::{TransactionRequest, TransactionResponse};

/// Submit transaction text to the pending pool.
#[tracing::instrument(skip(client), fields(base_url = %client.base_url(), len = text.len()))]
pub async fn submit_transaction(client: &ApiClient, text: &str) -> Result<TransactionReceipt> {
    let start = std::time::Instant::now();
    let request = TransactionRequest {
        data: text.to_string(),
    };

    let response = client
        .client
        .post(client.url("/tx"))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Transaction submit network error");
            AppError::from(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "Transaction submit failed with non-success status"
        );
        return Err(AppError::Api(format!("Failed to submit transaction: {}", status)));
    }

    let body = response.json::<TransactionResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "Transaction response parse error");
        AppError::from(e)
    })?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        pending_size = ?body.pending_size,
        "Transaction submitted"
    );

    Ok(TransactionReceipt {
        added: body.added,
        pending_size: body.pending_size,
    })
}
