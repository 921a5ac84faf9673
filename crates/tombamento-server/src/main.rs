//! Tombamento Server binary
//!
//! Listens on the fixed address from `ServerConfig::default()` and saves the
//! data file once more on SIGINT/SIGTERM before exiting.

use anyhow::{Context, Result};
use std::sync::Arc;
use tombamento_server::config::ServerConfig;
use tombamento_server::services::Registry;
use tombamento_server::{router, AppState, ENDPOINTS};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    // Set up panic hook to log crashes
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()));
        tracing::error!("PANIC at {:?}: {}", location, info);
        default_hook(info);
    }));

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("[FATAL] Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    info!("Starting Tombamento Server v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run_server(ServerConfig::default()).await {
        error!("Server failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: ServerConfig) -> Result<()> {
    let state = AppState::open(&config).await;
    let registry = state.registry.clone();
    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_address))?;

    let snapshot = registry.snapshot().await;
    info!("Server listening on http://{}", config.bind_address);
    info!(
        "Tombamentos: {}, Detalhes: {}",
        snapshot.tombamentos.len(),
        snapshot.detalhes.len()
    );
    info!("Data file: {}", config.data_file.display());
    for endpoint in ENDPOINTS {
        info!("  {}", endpoint);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(registry))
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM, after the store has been saved.
async fn shutdown_signal(registry: Arc<Registry>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for ctrl-c: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Saving data before shutdown...");
    registry.persist().await;
}
