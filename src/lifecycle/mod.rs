//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Connect store → prepare schema → bind listener → serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → stop accepting → drain connections → close pool
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then store, listener last
//! - Ordered shutdown: drain the serve loop, then release the pool

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
