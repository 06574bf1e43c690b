//! # Menu Actor
//!
//! The dango menu resource: a [`ResourceActor`] over [`MenuItem`] whose context is the SKU
//! [`CodeSequence`](crate::codes::CodeSequence). Menu items are created with a positive skewer
//! count; generated SKUs look like `DNG-2403-1000`.
//!
//! Unlike cars, the menu can be bootstrapped from a fixture file, see [`crate::seed`].

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::MenuItem;
use actor_framework::{ResourceActor, ResourceClient};
use uuid::Uuid;

/// Creates a new menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<MenuItem>, ResourceClient<MenuItem>) {
    ResourceActor::new(buffer_size, Uuid::new_v4)
}
