use std::sync::Arc;

use anyhow::Context;
use itemstore_api::config::ApiConfig;
use itemstore_core::ItemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();
    itemstore_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let store = if config.seed_sample_data {
        ItemStore::sample()
    } else {
        ItemStore::new()
    };
    tracing::info!(items = store.len()?, "item store ready");

    let app = itemstore_api::app::build_app(Arc::new(store));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {bind_address}"))?;

    tracing::info!("listening on http://{}", listener.local_addr()?);
    tracing::info!("endpoints:");
    tracing::info!("  GET    /                 - health check");
    tracing::info!("  GET    /api/data         - list items");
    tracing::info!("  GET    /api/data/:id     - get item");
    tracing::info!("  POST   /api/data         - create item");
    tracing::info!("  PUT    /api/data/:id     - update item");
    tracing::info!("  DELETE /api/data/:id     - delete item");
    tracing::info!("  GET    /api/search?query - search items");
    tracing::info!("  GET    /api/stats        - statistics");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
