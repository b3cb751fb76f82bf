use axum::{
    extract::{rejection::PathRejection, Path, State},
    Json,
};

use statusgate_core::McStatus;

use super::{observe, ApiError};
use crate::app_state::AppState;

pub const MCSTATUS_FAILED: &str = "Failed to fetch Minecraft server status";

/// `GET /mcstatus/:address`: upstream JSON forwarded as-is.
#[tracing::instrument(name = "mcstatus", skip(state))]
pub async fn mcstatus(
    State(state): State<AppState>,
    address: Result<Path<String>, PathRejection>,
) -> Result<Json<McStatus>, ApiError> {
    let Path(address) = address.map_err(|e| {
        tracing::warn!(error = %e, "mcstatus address rejected");
        ApiError::internal(MCSTATUS_FAILED)
    })?;
    let lookup = state.mcstatus();
    match observe(&state, "mcstatus", lookup.lookup(&address)).await {
        Ok(status) => {
            tracing::debug!(online = ?status.online(), "mcstatus lookup ok");
            Ok(Json(status))
        }
        Err(e) => {
            tracing::warn!(%address, error = %e, code = e.client_code().as_str(), "mcstatus lookup failed");
            Err(ApiError::internal(MCSTATUS_FAILED))
        }
    }
}
