// src/main.rs
use std::net::SocketAddr;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use techrise_backend::config::{Config, Environment};
use techrise_backend::repository::{InMemoryUserRepository, PgUserRepository, UserRepository};
use techrise_backend::{database, routes, state};

fn init_tracing(environment: Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info")
        } else {
            EnvFilter::new("info,techrise_backend=debug,tower_http=debug")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_tracing(config.environment);

    let repository: Arc<dyn UserRepository> = if config.uses_memory_store() {
        tracing::warn!("DATABASE_URL=memory, users are kept in process memory");
        Arc::new(InMemoryUserRepository::new())
    } else {
        let pool = database::create_pool(&config.database_url, config.max_connections).await;
        let db_pool = match pool {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!(error = %e, "Failed to create database pool");
                std::process::exit(1);
            }
        };
        if let Err(e) = database::run_migrations(&db_pool).await {
            tracing::error!(error = %e, "Failed to run migrations");
            std::process::exit(1);
        }
        Arc::new(PgUserRepository::new(db_pool))
    };

    // Create application state
    let app = routes::create_app(state::AppState::new(repository));

    // Try PORT..PORT+20 to avoid crash when address is in use
    let listener = {
        let mut bound = None;
        for offset in 0u16..=20 {
            let port = config.port.saturating_add(offset);
            let addr = SocketAddr::from((config.host, port));
            match TcpListener::bind(addr).await {
                Ok(l) => {
                    bound = Some((l, addr));
                    break;
                }
                Err(e) => {
                    if offset == 0 {
                        tracing::warn!(%addr, error=%e, "Port in use, trying next");
                    }
                }
            }
        }
        match bound {
            Some((l, addr)) => {
                tracing::info!("Server is running on http://{}", addr);
                tracing::info!("Environment: {}", config.environment.as_str());
                l
            }
            None => {
                tracing::error!(
                    "Failed to bind to any port starting at {} on {}",
                    config.port,
                    config.host
                );
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error=%e, "Server error");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error=%e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error=%e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutting down gracefully...");
}
