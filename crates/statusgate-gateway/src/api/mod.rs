//! Status routes.
//!
//! - `/server-status`       : constant liveness text
//! - `/mcstatus/:address`   : Minecraft status pass-through
//! - `/websitestatus`       : 200/503 reachability of `?address=<url>`
//! - `/sysinfo`             : host cpu temp / cpu load / ram usage
//!
//! Every handler is stateless apart from metrics bookkeeping.

pub mod error;
pub mod mcstatus;
pub mod server_status;
pub mod sysinfo;
pub mod website;

use std::future::Future;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use statusgate_core::error::Result;

use crate::app_state::AppState;
use crate::obs::GatewayMetrics;

pub use error::ApiError;

/// Time one collaborator call and count its failures.
pub(crate) async fn observe<T, F>(state: &AppState, upstream: &'static str, fut: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let started = Instant::now();
    let res = fut.await;
    let metrics = state.metrics();
    metrics
        .upstream_latency
        .observe(&[("upstream", upstream)], started.elapsed());
    if let Err(e) = &res {
        metrics
            .upstream_failures
            .inc(&[("upstream", upstream), ("code", e.client_code().as_str())]);
    }
    res
}

/// Route layer: per-route request counters and in-flight gauge.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    let metrics = state.metrics();
    let in_flight = InFlight::enter(metrics, &route);
    let resp = next.run(req).await;
    drop(in_flight);

    let status = resp.status().as_u16().to_string();
    metrics
        .requests
        .inc(&[("route", route.as_str()), ("status", status.as_str())]);
    resp
}

/// Holds one unit of the in-flight gauge; released on drop, so a request
/// dropped mid-handler (client gone) still decrements.
struct InFlight<'a> {
    metrics: &'a GatewayMetrics,
    route: &'a str,
}

impl<'a> InFlight<'a> {
    fn enter(metrics: &'a GatewayMetrics, route: &'a str) -> Self {
        metrics.in_flight.inc(&[("route", route)]);
        Self { metrics, route }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.metrics.in_flight.dec(&[("route", self.route)]);
    }
}
