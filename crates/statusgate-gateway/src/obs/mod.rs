//! Lightweight in-process metrics.
//!
//! Stored as atomics in sharded maps, rendered by the `/metrics` handler in
//! Prometheus text format. Request-path code only ever increments.

pub mod metrics;

pub use metrics::GatewayMetrics;
