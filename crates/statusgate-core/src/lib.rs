//! statusgate core: transport-agnostic result shapes and the shared error type.
//!
//! This crate defines what the gateway hands back to callers (Minecraft status
//! pass-through, website up/down, host metrics) and the error surface shared by
//! the gateway and its collaborators. It carries no transport or runtime
//! dependencies so fakes and real collaborators can both build on it.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `StatusGateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod model;

/// Shared result type.
pub use error::{ClientCode, Result, StatusGateError};
pub use model::{McStatus, MemorySnapshot, SysInfo, WebsiteStatus};
