use serde::{Deserialize, Serialize};

use crate::error::{Result, StatusGateError};

/// Raw memory counters in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemorySnapshot {
    pub total: u64,
    pub available: u64,
}

impl MemorySnapshot {
    /// Memory actively in use (total minus what the OS reports as available).
    pub fn active(&self) -> u64 {
        self.total.saturating_sub(self.available)
    }

    /// Active over total, in percent. A zero total means the provider returned
    /// garbage and is reported as a metric failure.
    pub fn active_percent(&self) -> Result<f64> {
        if self.total == 0 {
            return Err(StatusGateError::Metric("total memory reported as zero".into()));
        }
        Ok(self.active() as f64 / self.total as f64 * 100.0)
    }
}

/// Host metrics returned by `/sysinfo`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SysInfo {
    /// Degrees Celsius.
    pub cpu_temp: f64,
    /// 0..=100
    pub cpu_load_percent: f64,
    /// 0..=100
    pub ram_percent: f64,
}

impl SysInfo {
    /// Combine the three independently read metrics. All three must have
    /// succeeded; the first failure (in field order) is returned otherwise.
    pub fn from_parts(
        cpu_temp: Result<f64>,
        cpu_load_percent: Result<f64>,
        memory: Result<MemorySnapshot>,
    ) -> Result<Self> {
        let cpu_temp = cpu_temp?;
        let cpu_load_percent = cpu_load_percent?;
        let ram_percent = memory?.active_percent()?;

        Ok(Self {
            cpu_temp,
            cpu_load_percent: cpu_load_percent.clamp(0.0, 100.0),
            ram_percent,
        })
    }
}
