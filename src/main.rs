use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use flyschool_web::cache::start_cache_maintenance;
use flyschool_web::config::Config;
use flyschool_web::models::OfferCatalog;
use flyschool_web::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flyschool_web=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = match &config.offers_path {
        Some(path) => {
            info!("Loading offer catalog from {}", path.display());
            OfferCatalog::load(path)
                .with_context(|| format!("Failed to load offers from {}", path.display()))?
        }
        None => {
            info!("OFFERS_PATH not set, using built-in offer catalog");
            OfferCatalog::default()
        }
    };
    info!("Loaded {} offers", catalog.len());

    let state = AppState::new(config, catalog);
    tokio::spawn(start_cache_maintenance(state.cache.clone()));

    let address = state.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
