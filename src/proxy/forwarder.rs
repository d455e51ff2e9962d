//! Request forwarding to the configured upstream.
//!
//! # Responsibilities
//! - Rebuild the inbound request against the upstream base URL
//! - Preserve method, query string, headers (minus Host), and body
//! - Bound the outbound call, send through body read, by a fixed ceiling
//! - Relay the upstream response verbatim, or translate transport failure
//!   into a structured gateway error
//!
//! # Design Decisions
//! - Forward once, report the outcome: no retries, no circuit breaking
//! - Host is dropped so the outbound call targets the upstream's own
//!   virtual host; every other header passes through untouched
//! - A bodiless request goes out with an empty body, never a fabricated
//!   empty payload
//! - Upstream headers are copied as-is, without recomputation, even when
//!   they disagree with the body length

use std::time::Duration;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, Response, Uri};
use http_body_util::BodyExt;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};

use crate::error::{GatewayError, Result};

/// Path segment identifying traffic to be forwarded.
pub const PROXY_PREFIX: &str = "/api/v1";

/// Shared outbound client plus the fixed upstream configuration.
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct Forwarder {
    client: Client<HttpConnector, Body>,
    base_url: String,
    timeout: Duration,
}

impl Forwarder {
    /// Create a forwarder for the given upstream base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// The configured upstream base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Forward one request to `<base>/api/v1/<suffix>` and relay the outcome.
    ///
    /// Exactly one response is produced per call; failure branches map to
    /// [`GatewayError`] and become structured JSON envelopes at the handler
    /// boundary.
    pub async fn forward(&self, suffix: &str, request: Request<Body>) -> Result<Response<Body>> {
        let (parts, body) = request.into_parts();

        tracing::debug!(
            method = %parts.method,
            path = %parts.uri.path(),
            "forwarding request"
        );

        let target = target_url(&self.base_url, suffix, parts.uri.query());
        let uri: Uri = target
            .parse()
            .map_err(|e| GatewayError::UpstreamTransport(format!("invalid target url: {e}")))?;

        let body_bytes = body
            .collect()
            .await
            .map_err(|e| GatewayError::UpstreamTransport(format!("failed to read request body: {e}")))?
            .to_bytes();

        let mut builder = Request::builder().method(parts.method.clone()).uri(uri);
        if let Some(headers) = builder.headers_mut() {
            for (name, value) in parts.headers.iter() {
                if name == header::HOST {
                    continue;
                }
                headers.append(name.clone(), value.clone());
            }
        }

        let outbound = builder
            .body(if body_bytes.is_empty() {
                Body::empty()
            } else {
                Body::from(body_bytes)
            })
            .map_err(|e| GatewayError::UpstreamTransport(e.to_string()))?;

        match tokio::time::timeout(self.timeout, self.send(outbound)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!(
                    upstream = %self.base_url,
                    timeout_secs = self.timeout.as_secs(),
                    "upstream call timed out"
                );
                Err(GatewayError::UpstreamTimeout(self.timeout))
            }
        }
    }

    /// Issue the outbound call and buffer the upstream response.
    async fn send(&self, request: Request<Body>) -> Result<Response<Body>> {
        let response = self.client.request(request).await.map_err(|e| {
            if e.is_connect() {
                tracing::error!(upstream = %self.base_url, error = %e, "upstream connection failed");
                GatewayError::UpstreamUnreachable {
                    upstream: self.base_url.clone(),
                }
            } else {
                tracing::error!(upstream = %self.base_url, error = %e, "proxy error");
                GatewayError::UpstreamTransport(e.to_string())
            }
        })?;

        let (mut parts, body) = response.into_parts();
        let bytes = body
            .collect()
            .await
            .map_err(|e| {
                tracing::error!(upstream = %self.base_url, error = %e, "failed to read upstream body");
                GatewayError::UpstreamTransport(e.to_string())
            })?
            .to_bytes();

        // Media type falls back to structured data when upstream names none.
        if !parts.headers.contains_key(header::CONTENT_TYPE) {
            parts.headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }

        Ok(Response::from_parts(parts, Body::from(bytes)))
    }
}

/// Build the outbound URL: prefix reattached against the upstream base,
/// query string appended verbatim when non-empty.
fn target_url(base: &str, suffix: &str, query: Option<&str>) -> String {
    let mut target = format!("{base}{PROXY_PREFIX}/{suffix}");
    match query {
        Some(q) if !q.is_empty() => {
            target.push('?');
            target.push_str(q);
        }
        _ => {}
    }
    target
}
