//! Handlers for the local status routes.
//!
//! These terminate at the record store; no request here ever reaches the
//! upstream.

use axum::{extract::State, Json};

use crate::error::Result;
use crate::http::server::AppState;
use crate::status::model::{StatusCheck, StatusCheckCreate};
use crate::status::store::LIST_CAP;

/// `POST /api/status`: persist a new record and return it.
pub async fn create_status_check(
    State(state): State<AppState>,
    Json(input): Json<StatusCheckCreate>,
) -> Result<Json<StatusCheck>> {
    let check = StatusCheck::new(input.client_name);
    state.store.insert(&check).await?;

    tracing::debug!(id = %check.id, client_name = %check.client_name, "status check recorded");
    Ok(Json(check))
}

/// `GET /api/status`: all records in insertion order, capped.
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>> {
    let checks = state.store.list(LIST_CAP).await?;
    Ok(Json(checks))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::proxy::Forwarder;
    use crate::status::store::MemoryStatusStore;

    fn test_state() -> AppState {
        AppState {
            forwarder: Forwarder::new("http://127.0.0.1:1", Duration::from_secs(1)),
            store: Arc::new(MemoryStatusStore::default()),
        }
    }

    #[tokio::test]
    async fn create_returns_persisted_record() {
        let state = test_state();
        let Json(check) = create_status_check(
            State(state.clone()),
            Json(StatusCheckCreate {
                client_name: "acme".into(),
            }),
        )
        .await
        .unwrap();

        assert!(!check.id.is_empty());
        assert_eq!(check.client_name, "acme");

        let Json(listed) = list_status_checks(State(state)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, check.id);
    }

    #[tokio::test]
    async fn list_is_idempotent_without_writes() {
        let state = test_state();
        for name in ["a", "b"] {
            create_status_check(
                State(state.clone()),
                Json(StatusCheckCreate {
                    client_name: name.into(),
                }),
            )
            .await
            .unwrap();
        }

        let Json(first) = list_status_checks(State(state.clone())).await.unwrap();
        let Json(second) = list_status_checks(State(state)).await.unwrap();
        assert_eq!(first, second);
    }
}
