//! Forwarding proxy subsystem.
//!
//! # Data Flow
//! ```text
//! /api/v1/{*path} request
//!     → forwarder.rs (rebuild against upstream base URL)
//!     → shared hyper client (bounded by timeout)
//!     → relay upstream response verbatim
//!       or synthesize a gateway error envelope
//! ```
//!
//! # Design Decisions
//! - Stateless per call: a pure function of the request plus fixed config
//! - Exactly one upstream call and one response per inbound request
//! - Resilience policy (retries, breaking) belongs to a higher layer

pub mod forwarder;

pub use forwarder::{Forwarder, PROXY_PREFIX};
