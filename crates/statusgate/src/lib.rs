//! Top-level facade crate for statusgate.
//!
//! Re-exports core types and the gateway library so users can depend on a single crate.

pub mod core {
    pub use statusgate_core::*;
}

pub mod gateway {
    pub use statusgate_gateway::*;
}
