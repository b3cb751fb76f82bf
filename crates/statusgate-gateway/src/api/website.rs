use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use statusgate_core::WebsiteStatus;

use super::{observe, ApiError};
use crate::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct WebsiteQuery {
    pub address: Option<String>,
}

/// `GET /websitestatus?address=<url>`.
///
/// 200 when the site answered exactly 200, 503 for any other answer, both with
/// an empty body. A fetch that produced no answer at all is a 500 whose body
/// carries the transport error text.
#[tracing::instrument(name = "websitestatus", skip(state))]
pub async fn website_status(
    State(state): State<AppState>,
    query: Result<Query<WebsiteQuery>, QueryRejection>,
) -> Result<StatusCode, ApiError> {
    let Query(q) = query.map_err(|e| {
        tracing::warn!(error = %e, "websitestatus query rejected");
        ApiError::internal(e.body_text())
    })?;
    let Some(url) = q.address else {
        tracing::warn!("websitestatus called without address");
        return Err(ApiError::internal("missing address query parameter"));
    };

    let probe = state.website();
    match observe(&state, "website", probe.probe(&url)).await {
        Ok(code) => {
            let status = WebsiteStatus::from_status(code);
            tracing::debug!(%url, code, up = status.is_up(), "website probed");
            if status.is_up() {
                Ok(StatusCode::OK)
            } else {
                Ok(StatusCode::SERVICE_UNAVAILABLE)
            }
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "website probe failed");
            Err(ApiError::internal(e.to_string()))
        }
    }
}
