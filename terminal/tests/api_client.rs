//! HTTP transport tests: `ApiClient` against a stub ledger service on a
//! loopback port.

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use ledger_terminal::config::AppConfig;
use ledger_terminal::core::{AppError, LedgerService, MineOutcome};
use ledger_terminal::services::ApiClient;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `router` on 127.0.0.1 and return its base URL.
async fn spawn_stub(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn client_for(base_url: &str) -> ApiClient {
    let config = AppConfig::default().with_base_url(base_url).unwrap();
    ApiClient::new(&config)
}

fn view_body() -> Value {
    json!({
        "displayName": "Demo Chain",
        "difficulty": 3,
        "pendingTx": ["Carol pays Dan 1"],
        "blocks": [
            {
                "index": 0,
                "timestamp": "2024-05-01T10:00:00Z",
                "data": ["genesis"],
                "prevHash": "",
                "hash": "000abc",
                "nonce": 0,
                "merkleRoot": "m0"
            },
            {
                "index": 1,
                "timestamp": "2024-05-01T10:01:00Z",
                "data": ["Alice pays Bob 5", "21i-1579"],
                "prevHash": "000abc",
                "hash": "000def",
                "nonce": 912,
                "merkleRoot": "m1"
            }
        ]
    })
}

#[tokio::test]
async fn test_fetch_view_decodes_snapshot() {
    let url = spawn_stub(Router::new().route("/view", get(|| async { Json(view_body()) }))).await;

    let snapshot = client_for(&url).fetch_view().await.unwrap();

    assert_eq!(snapshot.display_name, "Demo Chain");
    assert_eq!(snapshot.difficulty, Some(3));
    assert_eq!(snapshot.pending_transactions, vec!["Carol pays Dan 1"]);
    assert_eq!(snapshot.blocks.len(), 2);
    assert_eq!(snapshot.blocks[1].prev_hash, "000abc");
    assert_eq!(snapshot.blocks[1].data, vec!["Alice pays Bob 5", "21i-1579"]);
}

#[tokio::test]
async fn test_fetch_view_tolerates_null_collections() {
    let router = Router::new().route(
        "/view",
        get(|| async { Json(json!({ "displayName": "", "blocks": null, "pendingTx": null })) }),
    );
    let url = spawn_stub(router).await;

    let snapshot = client_for(&url).fetch_view().await.unwrap();

    assert!(snapshot.blocks.is_empty());
    assert!(snapshot.pending_transactions.is_empty());
    assert_eq!(snapshot.display_name, "Ledger");
}

#[tokio::test]
async fn test_fetch_view_server_error_is_api_error() {
    let router = Router::new().route(
        "/view",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let url = spawn_stub(router).await;

    let err = client_for(&url).fetch_view().await.unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
}

#[tokio::test]
async fn test_fetch_view_non_json_is_decode_error() {
    let router = Router::new().route("/view", get(|| async { "<html>not json</html>" }));
    let url = spawn_stub(router).await;

    let err = client_for(&url).fetch_view().await.unwrap_err();

    assert!(matches!(err, AppError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_api_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{}", addr)).fetch_view().await.unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
}

#[tokio::test]
async fn test_submit_transaction_posts_data_field() {
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let router = Router::new().route(
        "/tx",
        post(move |Json(body): Json<Value>| {
            let recorder = recorder.clone();
            async move {
                let added = body["data"].as_str().unwrap_or_default().to_string();
                recorder.lock().push(body);
                Json(json!({ "ok": true, "added": added, "pendingSize": 1 }))
            }
        }),
    );
    let url = spawn_stub(router).await;

    let receipt = client_for(&url).submit_transaction("Alice pays Bob 5").await.unwrap();

    assert_eq!(receipt.added, "Alice pays Bob 5");
    assert_eq!(receipt.pending_size, Some(1));
    assert_eq!(seen.lock().as_slice(), [json!({ "data": "Alice pays Bob 5" })]);
}

#[tokio::test]
async fn test_submit_transaction_rejected_is_error() {
    let router = Router::new().route(
        "/tx",
        post(|| async { (StatusCode::BAD_REQUEST, "empty transaction") }),
    );
    let url = spawn_stub(router).await;

    let err = client_for(&url).submit_transaction("x").await.unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
}

#[tokio::test]
async fn test_mine_success_returns_block() {
    let router = Router::new().route(
        "/mine",
        post(|| async {
            Json(json!({
                "ok": true,
                "block": {
                    "index": 2,
                    "timestamp": "2024-05-01T10:02:00Z",
                    "data": ["Carol pays Dan 1"],
                    "prevHash": "000def",
                    "hash": "000fed",
                    "nonce": 77,
                    "merkleRoot": "m2"
                }
            }))
        }),
    );
    let url = spawn_stub(router).await;

    match client_for(&url).trigger_mining().await.unwrap() {
        MineOutcome::Mined(block) => {
            assert_eq!(block.index, 2);
            assert_eq!(block.nonce, 77);
        }
        other => panic!("expected mined block, got {:?}", other),
    }
}

#[tokio::test]
async fn test_mine_ok_false_is_declined_with_server_text() {
    let router = Router::new().route(
        "/mine",
        post(|| async { Json(json!({ "ok": false, "error": "no pending transactions" })) }),
    );
    let url = spawn_stub(router).await;

    let outcome = client_for(&url).trigger_mining().await.unwrap();

    assert_eq!(outcome, MineOutcome::Declined("no pending transactions".to_string()));
}

#[tokio::test]
async fn test_mine_plain_text_400_is_declined() {
    let router = Router::new().route(
        "/mine",
        post(|| async { (StatusCode::BAD_REQUEST, "no pending transactions\n") }),
    );
    let url = spawn_stub(router).await;

    let outcome = client_for(&url).trigger_mining().await.unwrap();

    assert_eq!(outcome, MineOutcome::Declined("no pending transactions".to_string()));
}

#[tokio::test]
async fn test_mine_server_error_is_api_error() {
    let router = Router::new().route(
        "/mine",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "crashed") }),
    );
    let url = spawn_stub(router).await;

    let err = client_for(&url).trigger_mining().await.unwrap_err();

    assert!(matches!(err, AppError::Api(_)));
}

#[tokio::test]
async fn test_mine_uses_its_own_timeout() {
    let router = Router::new().route(
        "/mine",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({ "ok": false }))
        }),
    );
    let url = spawn_stub(router).await;
    let mut config = AppConfig::default().with_base_url(&url).unwrap();
    config.mine_timeout = Duration::from_millis(200);

    let err = ApiClient::new(&config).trigger_mining().await.unwrap_err();

    match err {
        AppError::Api(message) => assert!(message.contains("timed out"), "{}", message),
        other => panic!("expected timeout, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_encodes_query_and_returns_hits() {
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let recorder = seen.clone();
    let router = Router::new().route(
        "/search",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorder = recorder.clone();
            async move {
                let q = params.get("q").cloned().unwrap_or_default();
                recorder.lock().push(q.clone());
                Json(json!({
                    "query": q,
                    "results": [
                        { "blockIndex": 1, "matches": ["Alice pays Bob 5 & tip"], "hash": "000def" }
                    ]
                }))
            }
        }),
    );
    let url = spawn_stub(router).await;

    let hits = client_for(&url).search("Bob 5 & tip").await.unwrap();

    assert_eq!(seen.lock().as_slice(), ["Bob 5 & tip"]);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].block_index, 1);
    assert_eq!(hits[0].hash.as_deref(), Some("000def"));
}

#[tokio::test]
async fn test_search_null_results_is_empty() {
    let router = Router::new().route(
        "/search",
        get(|| async { Json(json!({ "query": "nobody", "results": null })) }),
    );
    let url = spawn_stub(router).await;

    let hits = client_for(&url).search("nobody").await.unwrap();

    assert!(hits.is_empty());
}
