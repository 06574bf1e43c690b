use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car in the garage listing.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Vehicle`](#impl-ActorEntity-for-Vehicle) for details on:
/// - Creation parameters ([`VehicleCreate`])
/// - Full replacement ([`VehicleCreate`] again, same body as create)
/// - Partial updates ([`VehiclePatch`])
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub vin: String,
    pub added_date: DateTime<Utc>,
}

/// Body of `POST /api/cars` and `PUT /api/cars/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCreate {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub vin: Option<String>,
}

/// Body of `PATCH /api/cars/{id}`. Empty strings count as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePatch {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub vin: Option<String>,
}

impl VehicleCreate {
    pub fn new(make: impl Into<String>, model: impl Into<String>, year: i32) -> Self {
        Self {
            make: make.into(),
            model: model.into(),
            year,
            vin: None,
        }
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = Some(vin.into());
        self
    }
}
