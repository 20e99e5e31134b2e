use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod bootstrap;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);
    info!(
        app = config.app.name,
        version = config.app.version,
        "Starting todo API"
    );

    // Lazy pool: no connection is opened until the readiness probe runs
    let db = database::postgres::connect_from_config(config.database.clone())
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL pool creation failed: {}", e))?;

    // Fatal on failure: never serve without a reachable store and schema
    bootstrap::prepare(&db, &config.retry).await?;

    let state = AppState { config, db };

    // - /health: liveness, no database access
    // - /ready: readiness with a real database probe
    let probes = health_router().merge(api::ready_router(state.db.clone()));
    let app = axum_helpers::create_router::<openapi::ApiDoc>(api::routes(&state), probes).await?;

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: closing database connections");
            close_postgres(state.db, "todos").await;
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Todo API shutdown complete");
    Ok(())
}
