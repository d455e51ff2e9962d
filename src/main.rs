use api_gateway::config::GatewayConfig;
use api_gateway::{lifecycle, observability};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    observability::logging::init();

    tracing::info!("api-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let config = GatewayConfig::from_env()?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        "configuration loaded"
    );

    lifecycle::startup::run(config).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
