//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: every collection operation except `create`
//! is provided on top of a generic `ResourceClient`, with framework errors mapped to the
//! resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard collection operations.
///
/// Implementors supply the inner [`ResourceClient`] and an error mapping; `create` stays on
/// the concrete client because its payload conversion is resource-specific.
///
/// `get` maps a missing entity to an error (through `map_error`) rather than `Ok(None)`, so
/// every not-found outcome reaches callers the same way.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Every entity in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        let missing = id.to_string();
        self.inner()
            .get(id)
            .await
            .map_err(Self::map_error)?
            .ok_or_else(|| Self::map_error(FrameworkError::NotFound(missing)))
    }

    /// Overwrite all mutable fields of an entity.
    #[tracing::instrument(skip(self))]
    async fn replace(&self, id: T::Id, replace: T::Replace) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().replace(id, replace).await.map_err(Self::map_error)
    }

    /// Overwrite the supplied fields of an entity.
    #[tracing::instrument(skip(self))]
    async fn patch(&self, id: T::Id, patch: T::Patch) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().patch(id, patch).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Verbs the collection answers to.
    fn capabilities(&self) -> &'static [&'static str] {
        T::capabilities()
    }
}
