use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A dango skewer on the menu.
///
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor) through its
/// [`ActorEntity`](actor_framework::ActorEntity) implementation in
/// [`menu_actor::entity`](crate::menu_actor::entity).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: Uuid,
    pub flavor: String,
    pub glaze_type: String,
    pub skewer_count: i32,
    pub sku: String,
    pub is_new_arrival: bool,
    pub created_date: DateTime<Utc>,
}

/// Body of `POST /api/dango` and `PUT /api/dango/{id}`, and one row of the seed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    pub flavor: String,
    pub glaze_type: String,
    pub skewer_count: i32,
    pub is_new_arrival: bool,
    #[serde(default)]
    pub sku: Option<String>,
}

/// Body of `PATCH /api/dango/{id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
    #[serde(default)]
    pub flavor: Option<String>,
    #[serde(default)]
    pub glaze_type: Option<String>,
    #[serde(default)]
    pub skewer_count: Option<i32>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub is_new_arrival: Option<bool>,
}

impl MenuItemCreate {
    pub fn new(flavor: impl Into<String>, glaze_type: impl Into<String>, skewer_count: i32) -> Self {
        Self {
            flavor: flavor.into(),
            glaze_type: glaze_type.into(),
            skewer_count,
            is_new_arrival: false,
            sku: None,
        }
    }
}
