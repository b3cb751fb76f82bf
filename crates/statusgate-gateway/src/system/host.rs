use std::time::Duration;

use async_trait::async_trait;
use sysinfo::{Components, System};

use statusgate_core::error::{Result, StatusGateError};
use statusgate_core::MemorySnapshot;

use super::SystemMetrics;

/// Sensor label fragments that identify a CPU package/die reading.
const CPU_SENSOR_HINTS: [&str; 6] = ["cpu", "package", "tctl", "tdie", "k10temp", "coretemp"];

/// Reads the metrics of the machine the gateway runs on.
///
/// Every call builds a fresh `System`, so nothing is cached between requests.
/// sysinfo reads are blocking and run on tokio's blocking pool.
pub struct HostMetrics {
    cpu_sample_interval: Duration,
}

impl HostMetrics {
    pub fn new(cpu_sample_interval: Duration) -> Self {
        Self {
            cpu_sample_interval: cpu_sample_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }
}

async fn blocking<T, F>(what: &'static str, f: F) -> Result<T>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StatusGateError::Internal(format!("{what} task failed: {e}")))?
}

/// Pick the CPU temperature out of all sensor readings.
///
/// The first reading whose label looks like a CPU wins. Otherwise the mean of
/// every usable reading is returned. Non-finite and non-positive readings are
/// ignored.
pub fn pick_cpu_temperature<'a, I>(readings: I) -> Option<f64>
where
    I: IntoIterator<Item = (&'a str, f32)>,
{
    let usable: Vec<(&str, f32)> = readings
        .into_iter()
        .filter(|(_, t)| t.is_finite() && *t > 0.0)
        .collect();

    let cpu = usable.iter().find(|(label, _)| {
        let label = label.to_ascii_lowercase();
        CPU_SENSOR_HINTS.iter().any(|h| label.contains(h))
    });
    if let Some((_, t)) = cpu {
        return Some(f64::from(*t));
    }

    if usable.is_empty() {
        return None;
    }
    let sum: f64 = usable.iter().map(|(_, t)| f64::from(*t)).sum();
    Some(sum / usable.len() as f64)
}

#[async_trait]
impl SystemMetrics for HostMetrics {
    async fn cpu_temperature(&self) -> Result<f64> {
        blocking("cpu temperature", || {
            let components = Components::new_with_refreshed_list();
            let readings = components
                .list()
                .iter()
                .map(|c| (c.label(), c.temperature()));
            pick_cpu_temperature(readings)
                .ok_or_else(|| StatusGateError::Metric("no readable temperature sensor".into()))
        })
        .await
    }

    async fn cpu_load_percent(&self) -> Result<f64> {
        let interval = self.cpu_sample_interval;
        blocking("cpu load", move || {
            // usage is a delta between two refreshes
            let mut sys = System::new();
            sys.refresh_cpu();
            std::thread::sleep(interval);
            sys.refresh_cpu();

            let usage = sys.global_cpu_info().cpu_usage();
            if !usage.is_finite() {
                return Err(StatusGateError::Metric("cpu usage is not a number".into()));
            }
            Ok(f64::from(usage).clamp(0.0, 100.0))
        })
        .await
    }

    async fn memory(&self) -> Result<MemorySnapshot> {
        blocking("memory", || {
            let mut sys = System::new();
            sys.refresh_memory();
            let snapshot = MemorySnapshot {
                total: sys.total_memory(),
                available: sys.available_memory(),
            };
            if snapshot.total == 0 {
                return Err(StatusGateError::Metric("total memory reported as zero".into()));
            }
            Ok(snapshot)
        })
        .await
    }
}
