//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize shared resources in dependency order (store, then listener)
//! - Wire the shutdown signal into the serve loop
//! - Release resources on exit, whatever triggered the shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Traffic is only accepted once the store is reachable and prepared

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

use crate::config::GatewayConfig;
use crate::http::HttpServer;
use crate::lifecycle::{signals, Shutdown};
use crate::status::store::PgStatusStore;

/// Bring the gateway up, serve until shutdown, then release resources.
pub async fn run(config: GatewayConfig) -> Result<(), Box<dyn std::error::Error>> {
    let pool = PgPoolOptions::new()
        .max_connections(config.storage.max_connections)
        .connect(&config.storage.url)
        .await?;

    let store = PgStatusStore::new(pool.clone(), &config.storage.namespace);
    store.ensure_schema().await?;
    tracing::info!(namespace = %config.storage.namespace, "record store ready");

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        upstream = %config.upstream.base_url,
        "listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_handler(shutdown);

    let server = HttpServer::new(&config, Arc::new(store));
    server.run(listener, server_shutdown).await?;

    // The serve loop has drained; close outbound resources before exit.
    pool.close().await;
    tracing::info!("storage pool closed");

    Ok(())
}
