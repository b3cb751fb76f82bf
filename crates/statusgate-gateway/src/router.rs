//! Axum router wiring.
//!
//! Four status routes plus `/metrics`. Status routes sit behind the request
//! tracking layer; `/metrics` does not count itself.

use axum::{middleware, routing::get, Router};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    let status_routes = Router::new()
        .route("/server-status", get(api::server_status::server_status))
        .route("/mcstatus/:address", get(api::mcstatus::mcstatus))
        .route("/websitestatus", get(api::website::website_status))
        .route("/sysinfo", get(api::sysinfo::sysinfo))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            api::track_requests,
        ));

    Router::new()
        .merge(status_routes)
        .route("/metrics", get(ops::metrics))
        .with_state(state)
}
