//! # clienteled — clientele daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (TOML file, env var overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use clientele_adapter_http_axum::state::AppState;
use clientele_adapter_storage_sqlite_sqlx::{
    Config as StorageConfig, SqliteCustomerRepository, SqliteLocationRepository,
};
use clientele_app::services::customer_service::CustomerService;
use clientele_app::services::location_service::LocationService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;
    let pool = db.pool().clone();

    // Repositories
    let customer_repo = SqliteCustomerRepository::new(pool.clone());
    let location_repo = SqliteLocationRepository::new(pool.clone());

    // Services
    let customer_service = CustomerService::new(customer_repo);
    let location_service = LocationService::new(
        location_repo,
        SqliteCustomerRepository::new(pool),
    );

    // HTTP
    let state = AppState::new(customer_service, location_service);
    let app = clientele_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    tracing::info!(addr = %bind_addr, "clienteled listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutdown signal received");
}
