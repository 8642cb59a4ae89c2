//! Session-redirect server entry point.
//!
//! Initialises tracing, loads configuration from `SESSION_REDIRECT_*`
//! environment variables and serves the redirect endpoint over plain HTTP.

use anyhow::{Context, Result};
use session_redirect::{ServerConfig, router};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context(
        "failed to load config from SESSION_REDIRECT_* env vars \
         (SESSION_REDIRECT_COOKIE_NAME and SESSION_REDIRECT_COOKIE_DOMAIN are required)",
    )?;

    tracing::info!(
        listen_addr = %config.listen_addr,
        cookie_name = %config.redirect.cookie_name,
        cookie_domain = %config.redirect.cookie_domain,
        login_redirect = config.redirect.login_url.is_some(),
        "configuration loaded",
    );

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!("session redirect ready on http://{}", config.listen_addr);

    axum::serve(listener, router(config.redirect))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("session redirect shut down");
    Ok(())
}

/// Wait for Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
