//! statusgate gateway library entry.
//!
//! Wires config, collaborators (Minecraft status API, website probe, host
//! metrics), the status routes and the metrics registry into one axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
pub mod system;
pub mod upstream;
