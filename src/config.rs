//! Server configuration from command-line flags, each backed by an environment variable.

use crate::seed::DEFAULT_MENU_PATH;
use clap::Parser;
use std::path::PathBuf;

/// In-memory cars and dango REST server.
#[derive(Parser, Debug, Clone)]
#[command(name = "resource-api", about = "In-memory cars and dango REST server")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long = "listen", env = "LISTEN_ADDR", default_value = "0.0.0.0:8080")]
    pub listen: String,

    /// Mailbox capacity of each resource actor.
    #[arg(long = "buffer-size", env = "ACTOR_BUFFER_SIZE", default_value_t = 32)]
    pub buffer_size: usize,

    /// JSON fixture used by `POST /api/dango/initialize`.
    #[arg(long = "menu-seed", env = "MENU_SEED_PATH", default_value = DEFAULT_MENU_PATH)]
    pub menu_seed: PathBuf,

    /// Import the menu fixture at startup.
    #[arg(long = "seed-menu", env = "SEED_MENU")]
    pub seed_menu: bool,
}
