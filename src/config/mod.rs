//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (read & parse variables)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!     → shared with the server and store at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Optional fields have defaults; the upstream and storage URLs do not
//! - Validation separates syntactic (loader) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::ConfigError;
pub use schema::GatewayConfig;
pub use schema::ListenerConfig;
pub use schema::StorageConfig;
pub use schema::UpstreamConfig;
