//! Configuration loading from the process environment.

use std::env;

use crate::config::schema::GatewayConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// A required environment variable is absent.
    Missing(&'static str),
    /// An environment variable is present but unparseable.
    Invalid { name: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "missing environment variable {}", name),
            ConfigError::Invalid { name, value } => {
                write!(f, "invalid value {:?} for {}", value, name)
            }
            ConfigError::Validation(errors) => {
                write!(f, "validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from the environment.
///
/// `UPSTREAM_URL` and `DATABASE_URL` are required; everything else falls back
/// to schema defaults.
pub fn load_from_env() -> Result<GatewayConfig, ConfigError> {
    let mut config = GatewayConfig::default();

    config.upstream.base_url =
        env::var("UPSTREAM_URL").map_err(|_| ConfigError::Missing("UPSTREAM_URL"))?;
    config.storage.url =
        env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

    if let Ok(namespace) = env::var("DATABASE_SCHEMA") {
        config.storage.namespace = namespace;
    }
    if let Ok(address) = env::var("BIND_ADDRESS") {
        config.listener.bind_address = address;
    }
    if let Ok(secs) = env::var("UPSTREAM_TIMEOUT_SECS") {
        config.upstream.timeout_secs = secs.parse().map_err(|_| ConfigError::Invalid {
            name: "UPSTREAM_TIMEOUT_SECS",
            value: secs.clone(),
        })?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl GatewayConfig {
    /// Convenience wrapper around [`load_from_env`].
    pub fn from_env() -> Result<Self, ConfigError> {
        load_from_env()
    }
}
