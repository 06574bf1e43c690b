//! # Menu Seed
//!
//! Bootstraps the dango menu from a JSON fixture: an array of `MenuItemCreate` bodies.
//! Importing is idempotent. A menu that already has items is left alone and the file is not
//! even read.

use crate::clients::MenuClient;
use crate::menu_actor::MenuItemError;
use crate::model::MenuItemCreate;
use actor_framework::ActorClient;
use std::path::Path;
use tracing::{info, warn};

/// Default location of the fixture, relative to the working directory.
pub const DEFAULT_MENU_PATH: &str = "data/default-menu.json";

/// Reads and parses the fixture at `path`.
pub async fn load_menu(path: &Path) -> Result<Vec<MenuItemCreate>, MenuItemError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
        warn!(path = %path.display(), error = %e, "Cannot read menu fixture");
        MenuItemError::SeedUnavailable(e.to_string())
    })?;

    serde_json::from_str(&raw).map_err(|e| {
        warn!(path = %path.display(), error = %e, "Cannot parse menu fixture");
        MenuItemError::SeedUnavailable(e.to_string())
    })
}

/// Imports the fixture into an empty menu. Returns the number of items inserted.
pub async fn initialize_menu(menu: &MenuClient, path: &Path) -> Result<usize, MenuItemError> {
    if !menu.list().await?.is_empty() {
        info!("Menu already populated, skipping seed");
        return Ok(0);
    }

    let items = load_menu(path).await?;
    menu.seed_menu(items).await
}
