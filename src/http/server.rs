//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with local and proxy routes
//! - Wire up middleware (tracing, permissive CORS)
//! - Bind the server to a listener and serve until shutdown
//! - Dispatch proxy traffic to the forwarder
//!
//! # Design Decisions
//! - The router holds no state of its own; handlers receive the shared
//!   forwarder and store through axum State
//! - Local routes terminate here; everything under /api/v1 is forwarded;
//!   everything else falls through to the not-found envelope
//! - CORS allows all origins, methods, and headers on every route, a
//!   development-gateway boundary choice

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::{Path, State},
    http::Request,
    response::IntoResponse,
    routing::{any, get, post},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::proxy::Forwarder;
use crate::status::handlers;
use crate::status::store::StatusStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub forwarder: Forwarder,
    pub store: Arc<dyn StatusStore>,
}

/// HTTP server for the gateway.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Assemble the server from validated configuration and a record store.
    pub fn new(config: &GatewayConfig, store: Arc<dyn StatusStore>) -> Self {
        let forwarder = Forwarder::new(
            config.upstream.base_url.clone(),
            Duration::from_secs(config.upstream.timeout_secs),
        );
        let state = AppState { forwarder, store };

        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router: local routes, proxy wildcard, fallback.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/api/", get(root))
            .route(
                "/api/status",
                post(handlers::create_status_check).get(handlers::list_status_checks),
            )
            .route("/api/v1/{*path}", any(proxy_handler))
            .fallback(not_found)
            .with_state(state)
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// `GET /api/`: gateway banner naming the configured upstream.
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "API Gateway",
        "upstream": state.forwarder.base_url(),
    }))
}

/// Wildcard handler for proxy traffic.
async fn proxy_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    request: Request<Body>,
) -> impl IntoResponse {
    state.forwarder.forward(&path, request).await
}

/// Fallback for paths outside both prefixes.
async fn not_found() -> GatewayError {
    GatewayError::NotFound
}
