//! # Vehicle Client
//!
//! High-level API for the cars resource. Wraps a `ResourceClient<Vehicle>` and turns framework
//! errors back into [`VehicleError`].
use crate::model::{Vehicle, VehicleCreate};
use crate::vehicle_actor::VehicleError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Vehicle actor.
#[derive(Clone)]
pub struct VehicleClient {
    inner: ResourceClient<Vehicle>,
}

impl VehicleClient {
    pub fn new(inner: ResourceClient<Vehicle>) -> Self {
        Self { inner }
    }

    /// Validates and stores a new vehicle, generating a VIN when none is given.
    #[instrument(skip(self))]
    pub async fn create_vehicle(&self, params: VehicleCreate) -> Result<Vehicle, VehicleError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Vehicle> for VehicleClient {
    type Error = VehicleError;

    fn inner(&self) -> &ResourceClient<Vehicle> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => VehicleError::NotFound(id),
            other => other
                .downcast_entity::<VehicleError>()
                .unwrap_or_else(|e| VehicleError::ActorCommunicationError(e.to_string())),
        }
    }
}
