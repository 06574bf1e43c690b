//! `resource-api` binary: serves the cars and dango collections over HTTP.
//!
//! Usage:
//!   resource-api [--listen <addr>] [--buffer-size <n>] [--menu-seed <path>] [--seed-menu]
//!
//! Every flag can also come from the environment, see [`ServerConfig`].

use clap::Parser;
use resource_api::api::{self, AppState};
use resource_api::config::ServerConfig;
use resource_api::lifecycle::{setup_tracing, ResourceSystem};
use resource_api::seed;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ServerConfig::parse();
    info!(?config, "Starting resource-api");

    let system = ResourceSystem::new(config.buffer_size);

    if config.seed_menu {
        let inserted = seed::initialize_menu(&system.menu_client, &config.menu_seed).await?;
        info!(inserted, "Menu seeded at startup");
    }

    let state = AppState::new(
        system.vehicle_client.clone(),
        system.menu_client.clone(),
        config.menu_seed.clone(),
    );
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen).await?;
    info!("Listening on {}", config.listen);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // The router (and its client clones) is gone once serve returns.
    system.shutdown().await.map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => {
            error!("Failed to install CTRL+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
