use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pantry_api::config::ServerConfig;
use pantry_api::router::build_app_router;
use pantry_api::state::AppState;
use pantry_core::store::MemoryStore;
use pantry_db::PgStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "pantry_api=debug,pantry_core=debug,pantry_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = Arc::new(ServerConfig::from_env());
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Store ---
    let state = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = pantry_db::create_pool(&database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            pantry_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            pantry_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            AppState::new(Arc::clone(&config), Arc::new(PgStore::new(pool)))
        }
        Err(_) => {
            tracing::warn!("DATABASE_URL not set, using in-memory store (data is not persisted)");
            AppState::new(Arc::clone(&config), Arc::new(MemoryStore::seeded()))
        }
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    let draining = Arc::new(Notify::new());
    let signalled = Arc::clone(&draining);
    let mut server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown_signal().await;
                signalled.notify_one();
            })
            .await
    });

    tokio::select! {
        result = &mut server => {
            result.expect("Server task panicked").expect("Server error");
            return;
        }
        () = draining.notified() => {}
    }

    // --- Drain in-flight requests ---
    let drain_timeout = Duration::from_secs(config.shutdown_timeout_secs);
    match tokio::time::timeout(drain_timeout, server).await {
        Ok(result) => {
            result.expect("Server task panicked").expect("Server error");
            tracing::info!("Graceful shutdown complete");
        }
        Err(_) => {
            tracing::warn!(
                timeout_secs = config.shutdown_timeout_secs,
                "Requests still in flight after shutdown timeout, exiting"
            );
        }
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
