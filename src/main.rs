//! Poke Tourney - Pokemon tournament registration API
//!
//! Serves the tournament API with a cached Pokemon lookup.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use poke_tourney::api::{create_router, AppState};
use poke_tourney::config::Config;
use poke_tourney::lookup::PokeApiClient;
use poke_tourney::tasks::spawn_cleanup_task;

/// Main entry point for the tournament API server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the lookup client, cache and registry
/// 4. Start the optional background cache sweep
/// 5. Serve HTTP until SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poke_tourney=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pokemon Tournament API");

    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}ms, cache_max_size={}, cleanup_interval={}s, host={}, port={}",
        config.cache_ttl_ms,
        config.cache_max_size,
        config.cache_cleanup_interval,
        config.host,
        config.port
    );

    let client = PokeApiClient::new(
        &config.pokeapi_base_url,
        Duration::from_millis(config.pokeapi_timeout_ms),
    )
    .context("failed to build lookup client")?;
    let state = AppState::from_config(&config, Arc::new(client));
    info!("Lookup cache initialized");

    let cleanup_handle = (config.cache_cleanup_interval > 0).then(|| {
        spawn_cleanup_task(
            state.lookup.cache().clone(),
            config.cache_cleanup_interval,
        )
    });

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the sweep.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cache cleanup task aborted");
    }
}
