//! [`ActorEntity`] implementation for [`Vehicle`].
//!
//! Only creation is validated: the year must fall within `[1886, current year + 1]`.
//! Replace and patch write whatever they are given, and a VIN is only ever overwritten by a
//! non-empty value.

use super::error::VehicleError;
use crate::codes::CodeSequence;
use crate::model::{Vehicle, VehicleCreate, VehiclePatch};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::{Datelike, Local, Utc};
use uuid::Uuid;

/// The first production automobile.
pub const EARLIEST_YEAR: i32 = 1886;

/// Checks a model year against `[EARLIEST_YEAR, current_year + 1]`.
pub fn validate_year(year: i32, current_year: i32) -> Result<(), VehicleError> {
    let max = current_year + 1;
    if year < EARLIEST_YEAR || year > max {
        return Err(VehicleError::InvalidYear { year, max });
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl ActorEntity for Vehicle {
    type Id = Uuid;
    type Create = VehicleCreate;
    type Replace = VehicleCreate;
    type Patch = VehiclePatch;
    type Context = CodeSequence;
    type Error = VehicleError;

    fn from_create_params(id: Uuid, params: VehicleCreate) -> Result<Self, Self::Error> {
        validate_year(params.year, Local::now().year())?;
        Ok(Self {
            id,
            make: params.make,
            model: params.model,
            year: params.year,
            // Filled from the sequence in `on_create` when left empty.
            vin: non_empty(params.vin).unwrap_or_default(),
            added_date: Utc::now(),
        })
    }

    fn id(&self) -> &Uuid {
        &self.id
    }

    async fn on_create(&mut self, vins: &CodeSequence) -> Result<(), Self::Error> {
        if self.vin.is_empty() {
            self.vin = vins.next_code();
        }
        Ok(())
    }

    async fn on_replace(
        &mut self,
        replace: VehicleCreate,
        _ctx: &CodeSequence,
    ) -> Result<(), Self::Error> {
        self.make = replace.make;
        self.model = replace.model;
        self.year = replace.year;
        if let Some(vin) = non_empty(replace.vin) {
            self.vin = vin;
        }
        Ok(())
    }

    async fn on_patch(&mut self, patch: VehiclePatch, _ctx: &CodeSequence) -> Result<(), Self::Error> {
        if let Some(make) = non_empty(patch.make) {
            self.make = make;
        }
        if let Some(model) = non_empty(patch.model) {
            self.model = model;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(vin) = non_empty(patch.vin) {
            self.vin = vin;
        }
        Ok(())
    }
}
