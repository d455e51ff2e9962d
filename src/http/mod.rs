//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, route dispatch)
//!     → local route: status handlers + record store
//!     → /api/v1/*: proxy::Forwarder → upstream
//!     → anything else: not-found envelope
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
