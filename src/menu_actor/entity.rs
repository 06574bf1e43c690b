//! [`ActorEntity`] implementation for [`MenuItem`].

use super::error::MenuItemError;
use crate::codes::CodeSequence;
use crate::model::{MenuItem, MenuItemCreate, MenuItemPatch};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = Uuid;
    type Create = MenuItemCreate;
    type Replace = MenuItemCreate;
    type Patch = MenuItemPatch;
    type Context = CodeSequence;
    type Error = MenuItemError;

    fn from_create_params(id: Uuid, params: MenuItemCreate) -> Result<Self, Self::Error> {
        if params.skewer_count <= 0 {
            return Err(MenuItemError::InvalidSkewerCount(params.skewer_count));
        }
        Ok(Self {
            id,
            flavor: params.flavor,
            glaze_type: params.glaze_type,
            skewer_count: params.skewer_count,
            sku: non_empty(params.sku).unwrap_or_default(),
            is_new_arrival: params.is_new_arrival,
            created_date: Utc::now(),
        })
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    async fn on_create(&mut self, skus: &CodeSequence) -> Result<(), Self::Error> {
        if self.sku.is_empty() {
            self.sku = skus.next_code();
        }
        Ok(())
    }

    // No skewer count check here; only creation validates.
    async fn on_replace(
        &mut self,
        replace: MenuItemCreate,
        _ctx: &CodeSequence,
    ) -> Result<(), Self::Error> {
        self.flavor = replace.flavor;
        self.glaze_type = replace.glaze_type;
        self.skewer_count = replace.skewer_count;
        if let Some(sku) = non_empty(replace.sku) {
            self.sku = sku;
        }
        self.is_new_arrival = replace.is_new_arrival;
        Ok(())
    }

    async fn on_patch(
        &mut self,
        patch: MenuItemPatch,
        _ctx: &CodeSequence,
    ) -> Result<(), Self::Error> {
        if let Some(flavor) = non_empty(patch.flavor) {
            self.flavor = flavor;
        }
        if let Some(glaze_type) = non_empty(patch.glaze_type) {
            self.glaze_type = glaze_type;
        }
        if let Some(skewer_count) = patch.skewer_count {
            self.skewer_count = skewer_count;
        }
        if let Some(sku) = non_empty(patch.sku) {
            self.sku = sku;
        }
        if let Some(is_new_arrival) = patch.is_new_arrival {
            self.is_new_arrival = is_new_arrival;
        }
        Ok(())
    }
}
