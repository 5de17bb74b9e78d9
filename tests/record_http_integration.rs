//! Integration tests for the record emitter over real HTTP.
//!
//! These tests start axum servers on ephemeral ports and verify:
//! 1. The HTTP emitter round-trips against the app's own record endpoint
//! 2. Transient failures are retried and permanent ones are not
//! 3. Validation failures never reach the network

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::json;

use lotus_guess::adapters::http::app_router;
use lotus_guess::adapters::random::ScriptedRandom;
use lotus_guess::adapters::record::{HttpRecordEmitter, HttpRecordEmitterConfig};
use lotus_guess::bootstrap::Services;
use lotus_guess::config::AppConfig;
use lotus_guess::domain::foundation::Timestamp;
use lotus_guess::ports::{EmitError, RecordEmitter, RecordRequest};

// =============================================================================
// Test Infrastructure
// =============================================================================

async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

async fn spawn_app(record_id: usize) -> SocketAddr {
    let services = Services::with_random(
        &AppConfig::default(),
        Box::new(ScriptedRandom::new(vec![])),
        Box::new(ScriptedRandom::new(vec![record_id])),
    )
    .unwrap();
    spawn(app_router(services.result_state())).await
}

/// Answers 503 for the first `failures` calls, then issues a record.
async fn spawn_flaky(failures: usize) -> (SocketAddr, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let router = Router::new().route(
        "/api/records",
        post(move || {
            let counter = counter.clone();
            async move {
                let call = counter.fetch_add(1, Ordering::SeqCst);
                if call < failures {
                    (StatusCode::SERVICE_UNAVAILABLE, Json(json!({"success": false})))
                } else {
                    (
                        StatusCode::OK,
                        Json(json!({"success": true, "externalRef": "remote-1"})),
                    )
                }
            }
        }),
    );
    (spawn(router).await, calls)
}

fn emitter(addr: SocketAddr, max_retries: u32) -> HttpRecordEmitter {
    let config = HttpRecordEmitterConfig::new(format!("http://{}/api/records", addr))
        .with_timeout(Duration::from_secs(2))
        .with_max_retries(max_retries)
        .with_backoff(Duration::from_millis(10));
    HttpRecordEmitter::new(config).unwrap()
}

fn request() -> RecordRequest {
    RecordRequest {
        question: "Should I go out today?".to_string(),
        answer: "Yes".to_string(),
        option_label: "Rose".to_string(),
        option_glyph: "🌹".to_string(),
        option_description: "Love and passion".to_string(),
        user_ref: "0xabc".to_string(),
        timestamp: Timestamp::from_unix_secs(1705314600).unwrap(),
    }
}

// =============================================================================
// Round trip against the app
// =============================================================================

#[tokio::test]
async fn emitter_records_against_the_app_endpoint() {
    let addr = spawn_app(4242).await;

    let receipt = emitter(addr, 0).emit(&request()).await.unwrap();

    assert_eq!(
        receipt.external_ref,
        "http://localhost:3000/api/nft-metadata/4242"
    );
    assert!(receipt
        .rendered_image_ref
        .unwrap()
        .contains("/api/result-image?"));

    let metadata: serde_json::Value = reqwest::get(format!("http://{}/api/nft-metadata/4242", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(metadata["name"], "LotusGuess Decision: Yes");
    assert_eq!(metadata["attributes"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn app_rejection_surfaces_as_rejected() {
    let addr = spawn_app(1).await;

    // Bypass local validation to see the server's 400 answer.
    let response = reqwest::Client::new()
        .post(format!("http://{}/api/records", addr))
        .json(&json!({"question": "Tea?", "answer": "Yes", "optionLabel": "Rose"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required fields: userRef");
}

#[tokio::test]
async fn served_card_is_svg() {
    let addr = spawn_app(1).await;

    let response = reqwest::get(format!(
        "http://{}/api/result-image?question=Tea%3F&answer=Later&flower=%F0%9F%8C%B7%20Tulip&description=Perfect%20love&date=2024-01-15",
        addr
    ))
    .await
    .unwrap();

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "image/svg+xml"
    );
    let svg = response.text().await.unwrap();
    assert!(svg.contains(">Later</text>"));
    assert!(svg.contains("Tulip - Perfect love"));
}

// =============================================================================
// Retries
// =============================================================================

#[tokio::test]
async fn transient_failures_are_retried() {
    let (addr, calls) = spawn_flaky(2).await;

    let receipt = emitter(addr, 2).emit(&request()).await.unwrap();

    assert_eq!(receipt.external_ref, "remote-1");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn retries_are_bounded() {
    let (addr, calls) = spawn_flaky(10).await;

    let err = emitter(addr, 2).emit(&request()).await.unwrap_err();

    assert!(matches!(err, EmitError::UnexpectedStatus { status: 503, .. }));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn validation_failure_sends_nothing() {
    let (addr, calls) = spawn_flaky(0).await;
    let mut req = request();
    req.option_label.clear();

    let err = emitter(addr, 2).emit(&req).await.unwrap_err();

    assert!(matches!(err, EmitError::Validation(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn slow_service_times_out() {
    let router = Router::new().route(
        "/api/records",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"success": true, "externalRef": "late"}))
        }),
    );
    let addr = spawn(router).await;
    let config = HttpRecordEmitterConfig::new(format!("http://{}/api/records", addr))
        .with_timeout(Duration::from_millis(200))
        .with_max_retries(0);

    let err = HttpRecordEmitter::new(config)
        .unwrap()
        .emit(&request())
        .await
        .unwrap_err();

    assert!(matches!(err, EmitError::Timeout { .. }));
}
