//! Status-check record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted status-check record. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StatusCheck {
    /// Opaque unique identifier, generated at creation.
    pub id: String,

    /// Caller-supplied client name.
    pub client_name: String,

    /// Assigned server-side at insert time.
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    /// Build a fresh record with a generated id and the current time.
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            client_name: client_name.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Creation payload accepted on the create route.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}
