//! Local host metrics collaborator.
//!
//! Three independent queries, each may fail on its own. `/sysinfo` fans them
//! out and joins them; see `api::sysinfo`.

pub mod host;

use async_trait::async_trait;

use statusgate_core::error::Result;
use statusgate_core::MemorySnapshot;

pub use host::{pick_cpu_temperature, HostMetrics};

#[async_trait]
pub trait SystemMetrics: Send + Sync {
    /// CPU temperature in degrees Celsius.
    async fn cpu_temperature(&self) -> Result<f64>;
    /// Global CPU load, 0..=100.
    async fn cpu_load_percent(&self) -> Result<f64>;
    async fn memory(&self) -> Result<MemorySnapshot>;
}
