//! # Search Endpoint
//!
//! `GET /search?q=` finds blocks whose data contains the query.

use super::client::ApiClient;
use crate::core::error::{AppError, Result};
use shared::{SearchHit, SearchResponse};

/// Search block data. The query is percent-encoded by `reqwest`.
#[tracing::instrument(skip(client), fields(base_url = %client.base_url()))]
pub async fn search(client: &ApiClient, query: &str) -> Result<Vec<SearchHit>> {
    let start = std::time::Instant::now();

    let response = client
        .client
        .get(client.url("/search"))
        .query(&[("q", query)])
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Search network error");
            AppError::from(e)
        })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Search failed with non-success status");
        return Err(AppError::Api(format!("Search failed: {}", status)));
    }

    let body = response.json::<SearchResponse>().await.map_err(|e| {
        tracing::error!(error = %e, "Search response parse error");
        AppError::from(e)
    })?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis(),
        hit_count = body.results.len(),
        "Search completed"
    );

    Ok(body.results)
}
