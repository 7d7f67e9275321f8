//! # Chain Endpoints
//!
//! `GET /view` and `POST /mine`.

use super::client::ApiClient;
use crate::app::state::ViewSnapshot;
use crate::core::error::{AppError, Result};
use crate::core::service::MineOutcome;
use reqwest::StatusCode;
use shared::{ErrorResponse, MineResponse, ViewResponse};

/// Message used when the service declines without saying why.
const MINING_FAILED: &str = "Mining failed";

/// Fetch the full chain view.
#[tracing::instrument(skip(client), fields(base_url = %client.base_url()))]
pub async fn fetch_view(client: &ApiClient) -> Result<ViewSnapshot> {
    let start = std::time::Instant::now();
    let url = client.url("/view");

    let response = client.client.get(&url).send().await.map_err(|e| {
        tracing::warn!(error = %e, duration_ms = start.elapsed().as_millis(), "View fetch network error");
        AppError::from(e)
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis(),
            "View fetch failed with non-success status"
        );
        return Err(AppError::Api(format!("Failed to fetch view: {}", status)));
    }

    let view = response.json::<ViewResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "View response parse error");
        AppError::from(e)
    })?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        block_count = view.blocks.len(),
        pending_count = view.pending_tx.len(),
        "View fetched successfully"
    );

    Ok(ViewSnapshot::from(view))
}

/// Ask the service to mine its pending pool.
///
/// A reachable service that refuses (`ok: false`, or a 400/409/422 with an
/// error body) yields [`MineOutcome::Declined`]; only network failures,
/// server errors and undecodable success bodies are `Err`.
#[tracing::instrument(skip(client), fields(base_url = %client.base_url()))]
pub async fn trigger_mining(client: &ApiClient) -> Result<MineOutcome> {
    let start = std::time::Instant::now();
    let url = client.url("/mine");

    let response = client
        .client
        .post(&url)
        .timeout(client.mine_timeout)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, duration_ms = start.elapsed().as_millis(), "Mine request network error");
            AppError::from(e)
        })?;

    let status = response.status();
    let body = response.text().await.map_err(AppError::from)?;
    let duration_ms = start.elapsed().as_millis();

    if status.is_success() {
        let mined = serde_json::from_str::<MineResponse>(&body).map_err(|e| {
            tracing::error!(error = %e, "Mine response parse error");
            AppError::from(e)
        })?;
        let outcome = mine_outcome(mined);
        match &outcome {
            MineOutcome::Mined(block) => {
                tracing::info!(index = block.index, nonce = block.nonce, duration_ms, "Block mined")
            }
            MineOutcome::Declined(reason) => {
                tracing::info!(reason = %reason, duration_ms, "Mining declined by service")
            }
        }
        return Ok(outcome);
    }

    if is_decline_status(status) {
        let reason = decline_reason(&body);
        tracing::info!(status = status.as_u16(), reason = %reason, duration_ms, "Mining declined by service");
        return Ok(MineOutcome::Declined(reason));
    }

    tracing::warn!(status = status.as_u16(), duration_ms, "Mine request failed with non-success status");
    Err(AppError::Api(format!("Mining request failed: {}", status)))
}

fn mine_outcome(response: MineResponse) -> MineOutcome {
    match (response.ok, response.block) {
        (true, Some(block)) => MineOutcome::Mined(block),
        _ => MineOutcome::Declined(
            response
                .error
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| MINING_FAILED.to_string()),
        ),
    }
}

fn is_decline_status(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST | StatusCode::CONFLICT | StatusCode::UNPROCESSABLE_ENTITY
    )
}

/// Pull a human message out of a decline body: JSON `{error}` first, then plain text.
fn decline_reason(body: &str) -> String {
    if let Ok(mined) = serde_json::from_str::<MineResponse>(body) {
        if let Some(error) = mined.error.filter(|e| !e.trim().is_empty()) {
            return error;
        }
    }
    if let Ok(err) = serde_json::from_str::<ErrorResponse>(body) {
        if !err.error.trim().is_empty() {
            return err.error;
        }
    }

    let text = body.trim();
    if text.is_empty() {
        MINING_FAILED.to_string()
    } else {
        text.to_string()
    }
}
