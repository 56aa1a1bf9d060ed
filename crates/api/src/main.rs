use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kintree_api::config::ServerConfig;
use kintree_api::router::build_app_router;
use kintree_api::state::AppState;
use kintree_db::DbPool;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kintree_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = prepare_database(&database_url).await;

    if config.seed_on_startup {
        let seeded = kintree_db::seed::seed_if_empty(&pool)
            .await
            .expect("Seeding failed");
        if seeded {
            tracing::info!("Inserted starter family into empty database");
        }
    }

    let addr = (config.host.clone(), config.port);
    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    let app = build_app_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    let local_addr = listener.local_addr().expect("Listener has no local address");
    tracing::info!(addr = %local_addr, "kintree-api listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Shutdown complete");
}

/// Connect, probe, and migrate. Any failure aborts startup.
async fn prepare_database(database_url: &str) -> DbPool {
    let pool = kintree_db::create_pool(database_url)
        .await
        .expect("Failed to connect to database");

    kintree_db::health_check(&pool)
        .await
        .expect("Database did not answer the startup probe");

    kintree_db::run_migrations(&pool)
        .await
        .expect("Migrations failed");

    tracing::info!("Database connected and migrated");
    pool
}

/// Resolves when the process receives SIGINT or, on Unix, SIGTERM, so
/// `axum::serve` can drain in-flight requests before exiting.
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
        () = ctrl_c => tracing::info!("Received SIGINT, starting graceful shutdown"),
        () = terminate => tracing::info!("Received SIGTERM, starting graceful shutdown"),
    }
}
