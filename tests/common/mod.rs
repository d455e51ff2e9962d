//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use api_gateway::config::GatewayConfig;
use api_gateway::status::store::MemoryStatusStore;
use api_gateway::{HttpServer, Shutdown};

/// Start the gateway on an ephemeral port, backed by an in-memory store.
///
/// Returns the bound address and the shutdown handle; trigger it to stop
/// the server at the end of a test.
pub async fn start_gateway(upstream: &str, timeout_secs: u64) -> (SocketAddr, Shutdown) {
    let mut config = GatewayConfig::default();
    config.upstream.base_url = upstream.to_string();
    config.upstream.timeout_secs = timeout_secs;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(&config, Arc::new(MemoryStatusStore::default()));

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// An address nothing is listening on.
#[allow(dead_code)]
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start a mock upstream exposing the routes the forwarding tests exercise.
#[allow(dead_code)]
pub async fn start_mock_upstream() -> SocketAddr {
    let app = Router::new()
        .route("/api/v1/auth/verify-otp", any(echo))
        .route("/api/v1/inspect", any(inspect))
        .route("/api/v1/fail", any(fail))
        .route("/api/v1/naked", get(naked))
        .route("/api/v1/slow", get(slow));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Respond with the request body, mirroring its content type.
async fn echo(request: Request<Body>) -> Response<Body> {
    let content_type = request.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = axum::body::to_bytes(request.into_body(), 1024 * 1024)
        .await
        .unwrap();

    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder.body(Body::from(bytes)).unwrap()
}

/// Report what the upstream actually received.
async fn inspect(request: Request<Body>) -> Json<serde_json::Value> {
    let header_str = |name: &str| {
        request
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };
    let x_custom: Vec<String> = request
        .headers()
        .get_all("x-custom")
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect();

    Json(json!({
        "method": request.method().to_string(),
        "query": request.uri().query().unwrap_or(""),
        "host": header_str("host"),
        "authorization": header_str("authorization"),
        "x_custom": x_custom,
    }))
}

async fn fail() -> impl IntoResponse {
    (
        StatusCode::IM_A_TEAPOT,
        [(header::CONTENT_TYPE, "text/plain")],
        "backend says no",
    )
}

/// A response with no content-type header at all.
async fn naked() -> Response<Body> {
    Response::builder()
        .status(StatusCode::OK)
        .body(Body::from("raw-bytes"))
        .unwrap()
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "late"
}
