//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and the loader handle syntactic)
//! - Validate the upstream base URL parses and carries an http scheme
//! - Validate value ranges (timeouts > 0, bind address well-formed)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: GatewayConfig -> Result<(), Vec<ValidationError>>
//! - Runs before the config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::GatewayConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a loaded configuration.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError {
            field: "listener.bind_address",
            message: format!("not a socket address: {:?}", config.listener.bind_address),
        });
    }

    match Url::parse(&config.upstream.base_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError {
            field: "upstream.base_url",
            message: format!("unsupported scheme {:?}", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError {
            field: "upstream.base_url",
            message: e.to_string(),
        }),
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ValidationError {
            field: "upstream.timeout_secs",
            message: "must be greater than zero".to_string(),
        });
    }

    if config.storage.url.is_empty() {
        errors.push(ValidationError {
            field: "storage.url",
            message: "must not be empty".to_string(),
        });
    }

    if config.storage.namespace.is_empty()
        || !config
            .storage
            .namespace
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        errors.push(ValidationError {
            field: "storage.namespace",
            message: format!(
                "must be a bare identifier, got {:?}",
                config.storage.namespace
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
