//! # System Lifecycle
//!
//! Starting and stopping the resource actors.
//!
//! [`ResourceSystem::new`] creates one [`ResourceActor`](actor_framework::ResourceActor) per
//! resource and injects its [`CodeSequence`](crate::codes::CodeSequence) through `run(context)`.
//! The two resources share nothing, so there is no wiring between them.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None` once the queue is drained
//! 3. **Await completion** - [`ResourceSystem::shutdown`] joins every actor task
//!
//! The HTTP server holds clones of the clients inside its router state; `main` lets the server
//! finish (which drops the router) before calling `shutdown`.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter. Log levels come from
//! `RUST_LOG` and default to `info`:
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per request and mutation
//! RUST_LOG=debug cargo run     # full payloads
//! ```

pub mod resource_system;

pub use actor_framework::tracing::setup_tracing;
pub use resource_system::ResourceSystem;
