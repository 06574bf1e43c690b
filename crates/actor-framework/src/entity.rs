//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Vehicle, MenuItem, …) implements to be
//! managed by the generic `ResourceActor`. It names the payload types for create, full
//! replacement and partial patching, the injected context, and the error type, and it provides
//! the lifecycle hooks the actor calls for each operation.
//!
//! # Architecture Note
//! The collection rules (identity generation, not-found handling, insertion order, removal)
//! live in the actor and are written *once*. Everything that differs per resource lives here:
//! which fields a create payload carries, which rule rejects it, how a replace treats an empty
//! code, which fields a patch may touch.
//!
//! # Provided Methods
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::capabilities`]
//!
//! The defaults do nothing (or return the standard verb list).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Verbs every resource collection answers to, in the order they are advertised.
pub const CRUD_CAPABILITIES: &[&str] = &["GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "OPTIONS"];

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// Hooks are `async` so an entity may await other actors, and each receives the
/// `Context` handed to [`ResourceActor::run`](crate::ResourceActor::run). The context is
/// owned by the actor task for its whole lifetime, which makes it the place for per-resource
/// process state such as a code sequence.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g. `Uuid`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data for a full replacement of the mutable fields.
    type Replace: Send + Sync + Debug;

    /// The data for a partial update; absent fields are left untouched.
    type Patch: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per resource rather than one per operation. Clients get the concrete value back
    /// by downcasting [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly generated id and the create payload.
    ///
    /// This is where create-time validation happens. Returning `Err` leaves the collection
    /// untouched and nothing from the context is consumed.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The identifier this entity was created with.
    fn id(&self) -> &Self::Id;

    /// Verbs advertised for the collection.
    fn capabilities() -> &'static [&'static str] {
        CRUD_CAPABILITIES
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after a successful `from_create_params`, before the entity is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Overwrite every mutable field from a full payload.
    async fn on_replace(
        &mut self,
        replace: Self::Replace,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Overwrite only the fields present in a partial payload.
    async fn on_patch(&mut self, patch: Self::Patch, ctx: &Self::Context)
        -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the collection.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
