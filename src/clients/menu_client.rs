//! # Menu Client
//!
//! High-level API for the dango menu: create plus the one-time seed import.
use crate::menu_actor::MenuItemError;
use crate::model::{MenuItem, MenuItemCreate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    /// Validates and stores a new menu item, generating a SKU when none is given.
    #[instrument(skip(self))]
    pub async fn create_item(&self, params: MenuItemCreate) -> Result<MenuItem, MenuItemError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Loads `items` unless the menu already has entries. Returns how many were inserted.
    #[instrument(skip(self, items), fields(rows = items.len()))]
    pub async fn seed_menu(&self, items: Vec<MenuItemCreate>) -> Result<usize, MenuItemError> {
        let inserted = self.inner.seed(items).await.map_err(Self::map_error)?;
        info!(inserted, "Menu seed applied");
        Ok(inserted)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuItemError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuItemError::NotFound(id),
            other => other
                .downcast_entity::<MenuItemError>()
                .unwrap_or_else(|e| MenuItemError::ActorCommunicationError(e.to_string())),
        }
    }
}
