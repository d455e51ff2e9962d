//! Gateway error taxonomy.
//!
//! # Responsibilities
//! - Name each failure branch distinctly (unreachable, timeout, transport, storage)
//! - Convert every request-scoped failure into a structured JSON response
//! - Keep failures inside the request boundary (never crash the process)
//!
//! # Design Decisions
//! - One envelope shape for all branches: `error` plus `hint` or `details`
//! - Connection refused gets its own 503 so "upstream is down" is
//!   recognizable at a glance
//! - Configuration errors are startup-fatal and never reach this type

use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application error types.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The outbound connection to the upstream could not be established.
    #[error("upstream backend not available")]
    UpstreamUnreachable { upstream: String },

    /// The outbound call exceeded the forwarding ceiling.
    #[error("upstream timeout after {0:?}")]
    UpstreamTimeout(Duration),

    /// Any other transport fault while talking to the upstream.
    #[error("proxy error: {0}")]
    UpstreamTransport(String),

    /// The record store could not be reached.
    #[error("storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),

    /// Path matches neither the local nor the proxy prefix.
    #[error("not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, GatewayError>;

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::UpstreamUnreachable { upstream } => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "upstream backend not available",
                    "hint": format!("ensure the backend at {upstream} is running"),
                }),
            ),
            GatewayError::UpstreamTimeout(ceiling) => (
                StatusCode::GATEWAY_TIMEOUT,
                json!({
                    "error": "upstream timeout",
                    "details": format!("no response within {}s", ceiling.as_secs()),
                }),
            ),
            GatewayError::UpstreamTransport(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "proxy error", "details": details }),
            ),
            GatewayError::Storage(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "storage unavailable", "details": e.to_string() }),
            ),
            GatewayError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "not found" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
