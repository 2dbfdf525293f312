use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use movie_catalog_api::auth::TokenService;
use movie_catalog_api::config::AppConfig;
use movie_catalog_api::database::{DatabaseManager, MemoryStore, PgStore};
use movie_catalog_api::{app, AppState};

#[derive(Parser)]
#[command(name = "movie-catalog-api")]
#[command(about = "Authenticated movie catalog REST API")]
#[command(version)]
struct Args {
    #[arg(long, help = "Interface to bind (overrides HOST)")]
    host: Option<String>,

    #[arg(long, short, help = "Port to listen on (overrides PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Use the process-local store even if DATABASE_URL is set")]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up SECRET_KEY, DATABASE_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.in_memory {
        config.database.url = None;
    }
    config.validate().context("invalid configuration")?;

    tracing::info!("Starting Movie Catalog API in {:?} mode", config.environment);

    let tokens = TokenService::from_config(&config.security).context("token service")?;

    let pool = match config.database.url {
        Some(_) => Some(
            DatabaseManager::connect(&config.database)
                .await
                .context("failed to connect to database")?,
        ),
        None => None,
    };

    let state = match &pool {
        Some(pool) => {
            let store = Arc::new(PgStore::new(pool.clone()));
            AppState::new(config.clone(), store.clone(), store, tokens)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using the in-memory store; data is lost on exit");
            let store = Arc::new(MemoryStore::new());
            AppState::new(config.clone(), store.clone(), store, tokens)
        }
    };

    let bind_addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Movie Catalog API listening on http://{}", bind_addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        DatabaseManager::close(pool).await;
    }
    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl-c: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
