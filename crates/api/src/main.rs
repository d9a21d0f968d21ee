mod auth;
mod config;
mod error;
mod mailer;
mod routes;
mod state;

use std::sync::Arc;

use jaipurtv_core::backend::{BackendAdapter, GitHubBackend};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (dev convenience)
    let _ = dotenvy::dotenv();

    // Load configuration; missing repository settings are startup-fatal.
    let config = config::AppConfig::from_env().map_err(|e| {
        anyhow::anyhow!("Failed to load config: {e}. Are GITHUB_TOKEN and GITHUB_REPO set?")
    })?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    tracing::info!("Starting JaipurTV content API server");

    // The server fronts the hosted-file backend: every write is a commit.
    let adapter: Arc<dyn BackendAdapter> = Arc::new(
        GitHubBackend::new(config.github.clone())
            .map_err(|e| anyhow::anyhow!("Failed to construct content backend: {e}"))?,
    );
    tracing::info!(repo = %config.github.repo, branch = %config.github.branch, "content backend ready");

    // Editors are verified against a local JSON user list.
    let gate = auth::AuthGate::load(&config.admin_users_path)
        .map_err(|e| anyhow::anyhow!("Failed to load admin users: {e}"))?;

    let mailer = mailer::ContactMailer::new(config.mailer.clone());

    // Build application state and router
    let state = state::AppState::new(adapter, gate, mailer, config.clone());
    let app = routes::build_router(state);

    // Start server
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for SIGINT (Ctrl+C) or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => { tracing::info!("Received Ctrl+C, shutting down..."); }
        _ = terminate => { tracing::info!("Received SIGTERM, shutting down..."); }
    }
}
