//! Configuration schema definitions.
//!
//! All types derive Serde traits so the schema can be dumped or loaded as
//! structured data; at runtime values come from the process environment.

use serde::{Deserialize, Serialize};

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Upstream backend the proxy prefix forwards to.
    pub upstream: UpstreamConfig,

    /// Record store settings.
    pub storage: StorageConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8001").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8001".to_string(),
        }
    }
}

/// Upstream backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the backend (e.g., "http://localhost:8002").
    /// No usable default; startup fails if it is not supplied.
    pub base_url: String,

    /// Ceiling for one outbound call, send through body read, in seconds.
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: 30,
        }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StorageConfig {
    /// PostgreSQL connection string.
    /// No usable default; startup fails if it is not supplied.
    pub url: String,

    /// Schema the status_checks table lives in.
    pub namespace: String,

    /// Maximum connections held by the pool.
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            namespace: "gateway".to_string(),
            max_connections: 5,
        }
    }
}
