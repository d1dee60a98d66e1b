//! Data Server binary.

use data_server::{config::Config, create_app, create_state, init_tracing, shutdown_signal};
use data_store::SqlDataStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.log_level);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Data Server");

    // Connect and verify the store before serving anything
    let store = SqlDataStore::connect(&config.database_url, config.max_connections)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Failed to connect to database"))?;

    // Create application state
    let state = create_state(config.clone(), store.clone());

    // Create application router
    let app = create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.server_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
