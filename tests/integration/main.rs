//! Integration tests for the media server HTTP surface.
//!
//! Router-level tests drive the full middleware stack in-process with
//! `tower::ServiceExt::oneshot`; the `live_` tests bind a real socket.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::{routing::get, Router};
use chrono::DateTime;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tower::ServiceExt;

use media_server::api::{app, create_router};
use media_server::error::ApiError;
use media_server::server;

async fn send(router: Router, method: Method, uri: &str) -> Response {
    router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn allow_origin(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok())
}

#[tokio::test]
async fn health_returns_status_timestamp_and_version() {
    let response = send(create_router(), Method::GET, "/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some("*"));
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], "0.0.1");
    let ts = body["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(ts).is_ok(), "bad timestamp {ts}");
    assert_eq!(body.as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn health_timestamps_do_not_go_backwards() {
    let mut previous = None;

    for _ in 0..5 {
        let body = json_body(send(create_router(), Method::GET, "/api/health").await).await;
        let ts = DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
        if let Some(prev) = previous {
            assert!(ts >= prev, "{ts} < {prev}");
        }
        previous = Some(ts);
    }
}

#[tokio::test]
async fn media_returns_planned_endpoints() {
    let response = send(create_router(), Method::GET, "/api/media").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some("*"));
    assert_eq!(
        json_body(response).await,
        json!({
            "message": "Media API endpoints will be implemented here",
            "endpoints": [
                "GET /api/media",
                "GET /api/media/:id",
                "GET /api/media/:id/stream",
                "POST /api/media/scan"
            ]
        })
    );
}

#[tokio::test]
async fn unknown_paths_return_not_found_body() {
    for uri in ["/api/unknown", "/api/media/123", "/api/media/123/stream", "/health"] {
        let response = send(create_router(), Method::GET, uri).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(allow_origin(&response), Some("*"), "{uri}");
        assert_eq!(json_body(response).await, json!({"error": "Not Found"}));
    }
}

#[tokio::test]
async fn planned_scan_route_is_not_routed() {
    let response = send(create_router(), Method::POST, "/api/media/scan").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({"error": "Not Found"}));
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_not_found_body() {
    let response = send(create_router(), Method::PUT, "/api/health").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await, json!({"error": "Not Found"}));
}

#[tokio::test]
async fn preflight_is_answered_without_a_handler() {
    let response = create_router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/does-not-exist")
                .header(header::ORIGIN, "http://localhost:5173")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(allow_origin(&response), Some("*"));
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
}

#[tokio::test]
async fn handler_error_becomes_internal_server_error() {
    let router = app(Router::new().route(
        "/fails",
        get(|| async { Err::<(), _>(ApiError::internal("storage offline")) }),
    ));

    let response = send(router, Method::GET, "/fails").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(allow_origin(&response), Some("*"));
    assert_eq!(
        json_body(response).await,
        json!({"error": "Internal Server Error"})
    );
}

#[tokio::test]
async fn handler_panic_becomes_internal_server_error() {
    async fn explode() -> &'static str {
        panic!("handler blew up")
    }

    let router = app(Router::new().route("/panics", get(explode)));

    let response = send(router, Method::GET, "/panics").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(allow_origin(&response), Some("*"));
    assert_eq!(
        json_body(response).await,
        json!({"error": "Internal Server Error"})
    );
}

#[tokio::test]
async fn live_server_serves_on_bound_port_and_shuts_down() {
    let listener = server::bind(0).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(listener, async move {
        stop_rx.await.ok();
    }));

    let client = reqwest::Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{port}/api/health"))
        .header("Origin", "http://example.com")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    let response = client
        .get(format!("http://127.0.0.1:{port}/api/unknown"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

    drop(client);
    stop_tx.send(()).unwrap();
    handle.await.unwrap().unwrap();
}
