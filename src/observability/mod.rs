//! Observability subsystem.
//!
//! Structured logging only; the forwarding path logs outcome per request and
//! tower-http's TraceLayer covers request/response spans.

pub mod logging;
