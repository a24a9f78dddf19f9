use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use broker::{BrokerConfig, SessionBroker};
use gateway::{AppState, router};

const BIND_ADDR: &str = "127.0.0.1:8000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging Setup
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .compact()
        .init();

    info!("Session broker gateway initializing...");

    // Fail fast: without the secret key there is nothing to broker.
    let config = BrokerConfig::from_env()?;
    info!(model = %config.model, tool = config.tool.name, "Configuration loaded");

    let state = AppState {
        broker: Arc::new(SessionBroker::new(config)),
    };

    let app = router(state);

    let listener = TcpListener::bind(BIND_ADDR).await?;
    info!("Gateway listening on {BIND_ADDR}...");

    axum::serve(listener, app).await?;
    Ok(())
}
