use axum::{extract::State, Json};
use futures_util::future::join3;

use statusgate_core::SysInfo;

use super::{observe, ApiError};
use crate::app_state::AppState;

pub const SYSINFO_FAILED: &str = "Failed to fetch system information";

/// `GET /sysinfo`: fan out the three metric reads, join, then fail as a whole
/// if any of them failed.
#[tracing::instrument(name = "sysinfo", skip(state))]
pub async fn sysinfo(State(state): State<AppState>) -> Result<Json<SysInfo>, ApiError> {
    let system = state.system();

    // all three settle before the outcome is decided
    let (cpu_temp, cpu_load, memory) = join3(
        observe(&state, "sysinfo.cpu_temp", system.cpu_temperature()),
        observe(&state, "sysinfo.cpu_load", system.cpu_load_percent()),
        observe(&state, "sysinfo.memory", system.memory()),
    )
    .await;

    for (metric, err) in [
        ("cpu_temp", cpu_temp.as_ref().err()),
        ("cpu_load", cpu_load.as_ref().err()),
        ("memory", memory.as_ref().err()),
    ] {
        if let Some(e) = err {
            tracing::warn!(metric, error = %e, "system metric failed");
        }
    }

    SysInfo::from_parts(cpu_temp, cpu_load, memory)
        .map(Json)
        .map_err(|_| ApiError::internal(SYSINFO_FAILED))
}
