//! # Resource API
//!
//! Two independent in-memory CRUD collections served over HTTP: cars (`/api/cars`) and a dango
//! shop menu (`/api/dango`). Both are built on the generic resource actor from
//! [`actor_framework`]; each collection is owned by one tokio task, which serializes every
//! read and write against it.
//!
//! ## Module Tour
//!
//! ### 1. The Entities ([`model`], [`codes`])
//! Plain serde structs for [`Vehicle`](model::Vehicle) and [`MenuItem`](model::MenuItem), their
//! create/replace/patch bodies, and the VIN / SKU [`CodeSequence`](codes::CodeSequence).
//!
//! ### 2. The Implementation ([`vehicle_actor`], [`menu_actor`])
//! [`ActorEntity`](actor_framework::ActorEntity) implementations: create-time validation,
//! code assignment and the replace/patch rules, plus each resource's error type.
//!
//! ### 3. The Interface ([`clients`])
//! [`VehicleClient`](clients::VehicleClient) and [`MenuClient`](clients::MenuClient) wrap the
//! generic `ResourceClient` and hand back typed errors.
//!
//! ### 4. The Orchestrator ([`lifecycle`], [`seed`])
//! [`ResourceSystem`](lifecycle::ResourceSystem) starts and stops the actors;
//! [`seed`] bootstraps the menu from a JSON fixture.
//!
//! ### 5. The Edge ([`api`], [`config`])
//! axum routers, the JSON error envelope and the clap server configuration.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run -- --listen 127.0.0.1:8080 --seed-menu
//! curl -i localhost:8080/api/dango
//! ```

pub mod api;
pub mod clients;
pub mod codes;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod seed;
pub mod vehicle_actor;
