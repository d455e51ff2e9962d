//! HTTP API Gateway
//!
//! Sits in front of a single backend service: traffic under `/api/v1` is
//! relayed verbatim to the configured upstream, while a small set of local
//! status-check routes is answered directly from the gateway's own store.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 API GATEWAY                   │
//!                    │                                               │
//!   Client Request   │  ┌─────────┐      ┌────────────────────┐     │
//!   ─────────────────┼─▶│  http   │─────▶│ /api/status        │     │
//!                    │  │ server  │      │   → status store   │     │
//!                    │  └────┬────┘      └────────────────────┘     │
//!                    │       │                                      │
//!                    │       │  /api/v1/* ┌────────────────────┐    │      Upstream
//!                    │       └───────────▶│  proxy::Forwarder  │────┼────▶ Backend
//!                    │                    └────────────────────┘    │
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │          Cross-Cutting Concerns        │  │
//!                    │  │  config · observability · lifecycle    │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod proxy;
pub mod status;

// Cross-cutting concerns
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
