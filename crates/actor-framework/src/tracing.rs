//! # Observability & Tracing
//!
//! The actor loop logs every operation with structured fields, so one subscriber set up at
//! startup is enough to follow a request from the HTTP handler to the collection.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Actor started`, `Shutdown` with the final collection size
//! - **Operations**: `List`, `Get`, `Create`, `Replace`, `Patch`, `Delete`, `Seed` at `debug`
//!   with payloads, successful mutations at `info` with the new `size`
//! - **Failures**: `Not found` and failed hooks at `warn` with the entity id and reason
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run          # compact lifecycle and mutations
//! RUST_LOG=debug cargo run         # full payloads
//! RUST_LOG=actor_framework=debug   # only the actor loop
//! ```
//!
//! With `RUST_LOG=info`, creating a car and deleting it twice looks like:
//!
//! ```text
//! INFO Actor started entity_type="Vehicle"
//! INFO POST make="Toyota" model="Corolla" year=2020
//! INFO Created entity_type="Vehicle" id=5c1e... size=1
//! INFO DELETE id=5c1e...
//! INFO Deleted entity_type="Vehicle" id=5c1e... size=0
//! INFO DELETE id=5c1e...
//! WARN Not found entity_type="Vehicle" id=5c1e...
//! ```

use tracing_subscriber::EnvFilter;

/// Initializes the global subscriber.
///
/// Filtering comes from `RUST_LOG`, falling back to `info`. The compact format hides module
/// paths (`with_target(false)`), since every actor line carries `entity_type` instead.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();
}
