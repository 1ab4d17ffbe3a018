use axum::Router;
use axum_helpers::{cors_layer, server::{create_production_app, health_router}};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres::{connect_from_config_with_retry, run_migrations};
use migration::Migrator;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Before any fallible operation
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let db = connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    run_migrations::<Migrator>(&db, config.app.name).await?;

    // - /: banner
    // - /health: liveness with app name/version
    // - /ready: readiness with a database ping
    let root = Router::new()
        .merge(api::root_router())
        .merge(health_router(config.app))
        .merge(api::ready_router(db.clone()));

    let cors = cors_layer(&config.server, &config.environment)?;
    let app = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&db), root, cors);

    info!(
        "Starting accounts API ({:?} graceful shutdown timeout)",
        config.shutdown_timeout
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async move {
        info!("Shutting down: closing database connections");
        match db.close().await {
            Ok(_) => info!("PostgreSQL connection closed successfully"),
            Err(e) => tracing::error!("Error closing PostgreSQL: {}", e),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Accounts API shutdown complete");
    Ok(())
}
