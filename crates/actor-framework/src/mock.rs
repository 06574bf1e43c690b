//! # Mock Framework & Testing Guide
//!
//! [`MockClient`] hands out a real [`ResourceClient`] whose requests are answered from a queue
//! of scripted expectations instead of an actor. Use it to test the code *around* a client
//! (error mapping, orchestration, HTTP handlers) without real state.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real collection |
//! | **Use Case** | Logic *around* the client | The entity rules or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Tag { id: u32, name: String }
//! #[derive(Debug)] struct TagCreate { name: String }
//! #[derive(Debug)] struct TagPatch;
//! #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
//!
//! #[async_trait]
//! impl ActorEntity for Tag {
//!     type Id = u32; type Create = TagCreate; type Replace = TagCreate; type Patch = TagPatch;
//!     type Context = (); type Error = TagError;
//!     fn from_create_params(id: u32, p: TagCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: p.name })
//!     }
//!     fn id(&self) -> &u32 { &self.id }
//!     async fn on_replace(&mut self, _: TagCreate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn on_patch(&mut self, _: TagPatch, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Tag>::new();
//!     mock.expect_get(1).return_ok(Some(Tag { id: 1, name: "red".into() }));
//!     mock.expect_delete(1).return_err(FrameworkError::NotFound("1".into()));
//!
//!     let client = mock.client();
//!     assert_eq!(client.get(1).await.unwrap().unwrap().name, "red");
//!     assert!(matches!(client.delete(1).await, Err(FrameworkError::NotFound(_))));
//!     mock.verify();
//! }
//! ```
//!
//! For a lower-level style, [`create_mock_client`] returns the client together with the raw
//! receiver so a test can inspect each [`ResourceRequest`] and answer it by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A scripted reply for the next request of a given kind.
enum Expectation<T: ActorEntity> {
    List(Result<Vec<T>, FrameworkError>),
    Get(Result<Option<T>, FrameworkError>),
    Create(Result<T, FrameworkError>),
    Replace(Result<(), FrameworkError>),
    Patch(Result<(), FrameworkError>),
    Delete(Result<(), FrameworkError>),
    Seed(Result<usize, FrameworkError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order; a request that doesn't match the next expectation
/// panics the background task, and the client call then fails with `ActorDropped`.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = match expectations_clone.lock() {
                    Ok(mut exps) => exps.pop_front(),
                    Err(_) => None,
                };

                match (request, expectation) {
                    (ResourceRequest::List { respond_to }, Some(Expectation::List(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create(r))) => {
                        answer(respond_to, r)
                    }
                    (
                        ResourceRequest::Replace { respond_to, .. },
                        Some(Expectation::Replace(r)),
                    ) => answer(respond_to, r),
                    (ResourceRequest::Patch { respond_to, .. }, Some(Expectation::Patch(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Delete { respond_to, .. }, Some(Expectation::Delete(r))) => {
                        answer(respond_to, r)
                    }
                    (ResourceRequest::Seed { respond_to, .. }, Some(Expectation::Seed(r))) => {
                        answer(respond_to, r)
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(Expectation::List)
    }

    /// Expects a `get` operation. The id is only for readability at the call site.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(Expectation::Get)
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(Expectation::Create)
    }

    /// Expects a `replace` operation.
    pub fn expect_replace(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Replace)
    }

    /// Expects a `patch` operation.
    pub fn expect_patch(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Patch)
    }

    /// Expects a `delete` operation.
    pub fn expect_delete(&mut self, _id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(Expectation::Delete)
    }

    /// Expects a `seed` operation.
    pub fn expect_seed(&mut self) -> ExpectationBuilder<T, usize> {
        self.builder(Expectation::Seed)
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().map(|e| e.len()).unwrap_or(0);
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Finishes an expectation with the reply the mock should send.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        if let Ok(mut exps) = self.expectations.lock() {
            exps.push_back((self.wrap)(response));
        }
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// Each request arriving on the receiver can be pattern-matched and answered through its
/// `respond_to` sender, which lets a test simulate success, failure or delay deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Patch request
pub async fn expect_patch<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Patch {
            id,
            patch,
            respond_to,
        }) => Some((id, patch, respond_to)),
        _ => None,
    }
}
