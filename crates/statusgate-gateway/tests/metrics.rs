//! Metrics registry and `/metrics` exposition.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::*;
use tower::ServiceExt;

use statusgate_gateway::app_state::Collaborators;
use statusgate_gateway::obs::GatewayMetrics;

#[test]
fn counters_are_keyed_by_sorted_labels() {
    let m = GatewayMetrics::default();
    m.requests.inc(&[("route", "/sysinfo"), ("status", "200")]);
    m.requests.inc(&[("status", "200"), ("route", "/sysinfo")]);
    assert_eq!(m.requests.get(&[("route", "/sysinfo"), ("status", "200")]), 2);
    assert_eq!(m.requests.get(&[("route", "/sysinfo"), ("status", "500")]), 0);
}

#[test]
fn histogram_buckets_are_cumulative() {
    let m = GatewayMetrics::default();
    m.upstream_latency
        .observe(&[("upstream", "mcstatus")], Duration::from_millis(3));
    m.upstream_latency
        .observe(&[("upstream", "mcstatus")], Duration::from_secs(30));

    let out = m.render();
    let name = "statusgate_upstream_latency_micros";
    assert!(out.contains(&format!("{name}_bucket{{upstream=\"mcstatus\",le=\"1000\"}} 0")));
    assert!(out.contains(&format!("{name}_bucket{{upstream=\"mcstatus\",le=\"5000\"}} 1")));
    assert!(out.contains(&format!("{name}_bucket{{upstream=\"mcstatus\",le=\"10000000\"}} 1")));
    assert!(out.contains(&format!("{name}_bucket{{upstream=\"mcstatus\",le=\"+Inf\"}} 2")));
    assert!(out.contains(&format!("{name}_sum{{upstream=\"mcstatus\"}} 30003000")));
    assert!(out.contains(&format!("{name}_count{{upstream=\"mcstatus\"}} 2")));
}

#[test]
fn label_values_are_escaped() {
    let m = GatewayMetrics::default();
    m.upstream_failures
        .inc(&[("upstream", "we\"ird\\name"), ("code", "UPSTREAM")]);
    let out = m.render();
    assert!(out.contains(r#"upstream="we\"ird\\name""#));
}

#[tokio::test]
async fn requests_and_upstream_failures_are_counted() {
    let (app, state) = app_with(collaborators(
        FakeMcStatus::failing(),
        FakeProbe::answering(404),
        FakeSystem::healthy(),
    ));

    get(&app, "/server-status").await;
    get(&app, "/mcstatus/demo.mcstatus.io").await;
    get(&app, "/websitestatus?address=http://x").await;
    get(&app, "/sysinfo").await;

    let m = state.metrics();
    assert_eq!(m.requests.get(&[("route", "/server-status"), ("status", "200")]), 1);
    assert_eq!(m.requests.get(&[("route", "/mcstatus/:address"), ("status", "500")]), 1);
    assert_eq!(m.requests.get(&[("route", "/websitestatus"), ("status", "503")]), 1);
    assert_eq!(m.requests.get(&[("route", "/sysinfo"), ("status", "200")]), 1);
    assert_eq!(m.in_flight.get(&[("route", "/sysinfo")]), 0);

    assert_eq!(
        m.upstream_failures
            .get(&[("upstream", "mcstatus"), ("code", "UPSTREAM")]),
        1
    );
    // a non-200 answer is not a failed fetch
    assert_eq!(
        m.upstream_failures
            .get(&[("upstream", "website"), ("code", "UPSTREAM")]),
        0
    );
    assert_eq!(m.upstream_latency.count(&[("upstream", "website")]), 1);
    assert_eq!(m.upstream_latency.count(&[("upstream", "sysinfo.memory")]), 1);
}

#[tokio::test]
async fn metrics_endpoint_renders_prometheus_text() {
    let (app, _) = app_with(healthy());
    get(&app, "/server-status").await;

    let reply = get(&app, "/metrics").await;
    assert_eq!(reply.status, StatusCode::OK);
    assert!(reply.content_type().starts_with("text/plain; version=0.0.4"));

    let body = reply.text();
    assert!(body.contains("# TYPE statusgate_http_requests_total counter"));
    assert!(body.contains(
        "statusgate_http_requests_total{route=\"/server-status\",status=\"200\"} 1"
    ));
    // scraping does not count itself
    assert!(!body.contains("route=\"/metrics\""));
}

#[tokio::test]
async fn abandoned_request_releases_in_flight() {
    let (app, state) = app_with(Collaborators {
        mcstatus: FakeMcStatus::ok(demo_status()),
        website: Arc::new(StalledWebsite),
        system: FakeSystem::healthy(),
    });

    let pending = app.oneshot(
        Request::builder()
            .uri("/websitestatus?address=http://x")
            .body(Body::empty())
            .unwrap(),
    );
    // client gives up; the handler future is dropped mid-fetch
    let res = tokio::time::timeout(Duration::from_millis(50), pending).await;
    assert!(res.is_err(), "stalled fetch must not complete");

    let m = state.metrics();
    assert_eq!(m.in_flight.get(&[("route", "/websitestatus")]), 0);
    assert_eq!(m.requests.get(&[("route", "/websitestatus"), ("status", "200")]), 0);
}
