//! # Vehicle Actor
//!
//! The cars resource: a [`ResourceActor`] over [`Vehicle`] whose context is the VIN
//! [`CodeSequence`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Vehicle`]
//! - [`error`] - [`VehicleError`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use resource_api::clients::VehicleClient;
//! use resource_api::codes::CodeSequence;
//! use resource_api::model::VehicleCreate;
//! use resource_api::vehicle_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = vehicle_actor::new(32);
//!     tokio::spawn(actor.run(CodeSequence::vin()));
//!
//!     let car = VehicleClient::new(client)
//!         .create_vehicle(VehicleCreate::new("Toyota", "Corolla", 2020))
//!         .await?;
//!     assert!(car.vin.starts_with("1M8GDM9A_"));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Vehicle;
use actor_framework::{ResourceActor, ResourceClient};
use uuid::Uuid;

/// Creates a new Vehicle actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Vehicle>, ResourceClient<Vehicle>) {
    ResourceActor::new(buffer_size, Uuid::new_v4)
}
