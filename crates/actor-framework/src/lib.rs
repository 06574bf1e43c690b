//! # Actor Framework
//!
//! Building blocks for in-memory resource collections served by actors. Each collection is
//! owned by exactly one [`ResourceActor`] running in its own Tokio task, and every caller talks
//! to it through a cloneable [`ResourceClient`]. Because the actor handles one message at a
//! time, the collection and any per-resource state (such as a code counter) need no locks and
//! concurrent callers observe the same results as a single caller would.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - payload types, create-time validation, replace and
//!    patch rules, lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - the insertion-ordered store, identity generation,
//!    not-found handling, seeding
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/reply over channels
//!
//! ## The Collection Contract
//!
//! | Operation | Missing id | Notes |
//! |-----------|-----------|-------|
//! | `list` | - | insertion order, deletions keep the rest in place |
//! | `get` | `Ok(None)` | no side effects |
//! | `create` | - | `from_create_params` may reject; nothing is stored then |
//! | `replace` | `NotFound` | every mutable field, via `on_replace` |
//! | `patch` | `NotFound` | supplied fields only, via `on_patch` |
//! | `delete` | `NotFound` | a second delete of the same id is `NotFound` too |
//! | `seed` | - | bulk create, no-op unless the collection is empty |
//! | `capabilities` | - | static verb list, answered without the actor |
//!
//! ## Context Injection
//!
//! The context is passed to [`ResourceActor::run`], not to `new`, and is owned by the actor
//! task afterwards. Hooks receive it by reference.
//!
//! ## Testing
//!
//! The [`mock`] module scripts replies for a real `ResourceClient` so code that uses a client
//! can be tested without spawning an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, CRUD_CAPABILITIES};
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
