use anyhow::Context;
use api::{setup_config, setup_db, setup_router};
use utils::migrate;

/// Loads configuration, creates missing tables and serves until shutdown.
pub async fn run() -> anyhow::Result<()> {
    let config = setup_config().context("invalid configuration")?;

    let conn = setup_db(&config.db_url)
        .await
        .context("database connection failed")?;
    migrate(&conn).await.context("migration failed")?;

    tracing::info!(policy = %config.score_policy, require_email = config.require_email, "configuration loaded");

    let listener = tokio::net::TcpListener::bind(config.get_server_url())
        .await
        .with_context(|| format!("failed to bind {}", config.get_server_url()))?;
    tracing::info!("listening on http://{}", listener.local_addr()?);

    let router = setup_router(config, conn);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
