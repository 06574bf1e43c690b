//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! The shared collection operations (`list`, `get`, `replace`, `patch`, `delete`) come from
//! [`ActorClient`](actor_framework::ActorClient); each wrapper adds its typed `create`.

pub mod menu_client;
pub mod vehicle_client;

pub use menu_client::*;
pub use vehicle_client::*;
