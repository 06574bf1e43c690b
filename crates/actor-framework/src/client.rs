//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only the sender half of the mailbox, so cloning is cheap and clones can be handed to
/// every request handler. Each call sends one message and awaits the actor's reply.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would demand `T: Clone` on the wrapper, not just on the sender.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn replace(&self, id: T::Id, replace: T::Replace) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Replace {
            id,
            replace,
            respond_to,
        })
        .await
    }

    pub async fn patch(&self, id: T::Id, patch: T::Patch) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Patch {
            id,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    /// Bulk create, applied only when the collection is empty. Returns how many were inserted.
    pub async fn seed(&self, batch: Vec<T::Create>) -> Result<usize, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Seed { batch, respond_to })
            .await
    }

    /// Verbs the collection answers to. Answered locally, the actor is not consulted.
    pub fn capabilities(&self) -> &'static [&'static str] {
        T::capabilities()
    }
}
