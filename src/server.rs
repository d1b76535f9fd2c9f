//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream API client, the router and its middleware, then runs
//! the Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::infrastructure::http::SonorxClient;
use crate::middleware::rate_limit;
use crate::routes::app_router;
use crate::state::AppState;
use crate::web::session::SessionCookie;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Remote API client
/// - Session cookie settings
/// - Login rate limiter (when enabled)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The API base URL is invalid
/// - The rate limit settings are zero
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let api = SonorxClient::new(&config.api_base_url)?;
    tracing::info!("Remote API login endpoint: {}", api.login_url());

    let session = SessionCookie::new(
        config.session_cookie_name.clone(),
        config.session_cookie_secure,
    );
    let state = AppState::new(Arc::new(api), session);

    let login_limiter = if config.login_rate_limit {
        Some(rate_limit::login_layer(
            config.login_rate_refill_secs,
            config.login_rate_burst,
        )?)
    } else {
        None
    };

    let app = app_router(state, login_limiter);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
