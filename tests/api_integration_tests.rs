//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use reaper_cache::{api::create_router, AppState, Cache};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_app(ttl: Duration) -> Router {
    let cache = Cache::new(ttl).unwrap();
    create_router(AppState::new(cache))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put(key: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/entries/{}", key))
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// == PUT Endpoint Tests ==

#[tokio::test]
async fn test_put_endpoint_success() {
    let app = create_test_app(Duration::from_secs(30));

    let response = app.oneshot(put("test_key", "test_value")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["key"], "test_key");
    assert_eq!(json["size"], 10);
    assert!(json["message"].as_str().unwrap().contains("test_key"));
}

#[tokio::test]
async fn test_put_empty_body() {
    let app = create_test_app(Duration::from_secs(30));

    let response = app.clone().oneshot(put("empty", Body::empty())).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/entries/empty")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_returns_exact_bytes() {
    let app = create_test_app(Duration::from_secs(30));
    let payload: Vec<u8> = vec![0, 159, 146, 150, 255, 1, 2, 3];

    let set_response = app
        .clone()
        .oneshot(put("binary", payload.clone()))
        .await
        .unwrap();
    assert_eq!(set_response.status(), StatusCode::OK);

    let get_response = app.oneshot(get("/entries/binary")).await.unwrap();

    assert_eq!(get_response.status(), StatusCode::OK);
    assert_eq!(
        get_response.headers()["content-type"],
        "application/octet-stream"
    );
    let bytes = axum::body::to_bytes(get_response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(bytes.to_vec(), payload);
}

#[tokio::test]
async fn test_put_replaces_value() {
    let app = create_test_app(Duration::from_secs(30));

    app.clone().oneshot(put("k", "A")).await.unwrap();
    app.clone().oneshot(put("k", "B")).await.unwrap();

    let response = app.oneshot(get("/entries/k")).await.unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"B");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app(Duration::from_secs(30));

    let response = app.oneshot(get("/entries/nonexistent_key")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["error"], "Key not found: nonexistent_key");
}

// == STATS Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint() {
    let app = create_test_app(Duration::from_secs(30));

    app.clone().oneshot(put("stats_key", "stats_value")).await.unwrap();
    app.clone().oneshot(get("/entries/stats_key")).await.unwrap(); // hit
    app.clone().oneshot(get("/entries/nonexistent")).await.unwrap(); // miss

    let response = app.oneshot(get("/stats")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;

    assert_eq!(json["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["reaped"].as_u64().unwrap(), 0);
    assert_eq!(json["total_entries"].as_u64().unwrap(), 1);
    assert_eq!(json["ttl_ms"].as_u64().unwrap(), 30_000);
    assert!(json.get("hit_rate").is_some());
}

// == HEALTH Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(Duration::from_secs(30));

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}

// == Reaper Expiration via API Tests ==

#[tokio::test]
async fn test_reaper_expiration_via_api() {
    let app = create_test_app(Duration::from_millis(100));

    let set_response = app.clone().oneshot(put("ttl_test", "expires_soon")).await.unwrap();
    assert_eq!(set_response.status(), StatusCode::OK);

    let get_response = app.clone().oneshot(get("/entries/ttl_test")).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(250)).await;

    let get_response = app.clone().oneshot(get("/entries/ttl_test")).await.unwrap();
    assert_eq!(get_response.status(), StatusCode::NOT_FOUND);

    let stats = body_to_json(app.oneshot(get("/stats")).await.unwrap().into_body()).await;
    assert_eq!(stats["reaped"].as_u64().unwrap(), 1);
}

// == Live Server Tests ==

#[tokio::test]
async fn test_live_server_round_trip() {
    let app = create_test_app(Duration::from_secs(30));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = reqwest::Client::new();
    let base = format!("http://{}", addr);

    let put_response = client
        .put(format!("{}/entries/pokemon%2F25", base))
        .body("pikachu")
        .send()
        .await
        .unwrap();
    assert_eq!(put_response.status(), reqwest::StatusCode::OK);
    let put_json: Value = put_response.json().await.unwrap();
    assert_eq!(put_json["key"], "pokemon/25");

    let get_response = client
        .get(format!("{}/entries/pokemon%2F25", base))
        .send()
        .await
        .unwrap();
    assert_eq!(get_response.status(), reqwest::StatusCode::OK);
    assert_eq!(&get_response.bytes().await.unwrap()[..], b"pikachu");

    server.abort();
}
