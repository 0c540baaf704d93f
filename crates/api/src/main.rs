use std::net::SocketAddr;
use std::sync::Arc;

use shelf_core::ItemCache;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shelf_api::config::AppConfig;
use shelf_api::router::build_app_router;
use shelf_api::state::AppState;
use shelf_cache::{NoopCache, RedisCache};
use shelf_db::SqlItemSource;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    // The source of record is the only correctness-bearing dependency:
    // failing to reach it at startup is fatal.
    let pool = shelf_db::create_pool(&config.database_url())
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connection pool created");

    shelf_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    // --- Cache ---
    // The cache is a latency optimization, never a correctness requirement.
    // If Redis is unreachable at startup the service still comes up and
    // every request is a forced miss.
    let cache: Arc<dyn ItemCache> = match RedisCache::connect(&config.redis_url()).await {
        Ok(cache) => {
            tracing::info!(url = %config.redis_url(), "Connected to Redis");
            Arc::new(cache)
        }
        Err(err) => {
            tracing::warn!(error = %err, "Redis unavailable, serving without a cache");
            Arc::new(NoopCache)
        }
    };

    // --- App state ---
    let state = AppState {
        source: Arc::new(SqlItemSource::new(pool)),
        cache,
        config: Arc::new(config.clone()),
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

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
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
