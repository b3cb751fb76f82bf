//! Fake collaborators and request helpers shared by the route tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use statusgate_core::error::{Result, StatusGateError};
use statusgate_core::{McStatus, MemorySnapshot};
use statusgate_gateway::app_state::{AppState, Collaborators};
use statusgate_gateway::config::GatewayConfig;
use statusgate_gateway::router::build_router;
use statusgate_gateway::system::SystemMetrics;
use statusgate_gateway::upstream::{McStatusLookup, WebsiteProbe};

pub const GIB: u64 = 1024 * 1024 * 1024;

pub fn demo_status() -> Value {
    serde_json::json!({
        "online": true,
        "host": "demo.mcstatus.io",
        "port": 25565,
        "players": { "online": 0, "max": 20 },
        "version": { "name_raw": "1.19.4", "protocol": 762 }
    })
}

/// Answers every lookup with the same canned body, or fails every lookup.
pub struct FakeMcStatus {
    pub body: Option<Value>,
    pub seen: Mutex<Vec<String>>,
}

impl FakeMcStatus {
    pub fn ok(body: Value) -> Arc<Self> {
        Arc::new(Self { body: Some(body), seen: Mutex::new(Vec::new()) })
    }
    pub fn failing() -> Arc<Self> {
        Arc::new(Self { body: None, seen: Mutex::new(Vec::new()) })
    }
}

#[async_trait]
impl McStatusLookup for FakeMcStatus {
    async fn lookup(&self, address: &str) -> Result<McStatus> {
        self.seen.lock().unwrap().push(address.to_string());
        match &self.body {
            Some(v) => Ok(McStatus::new(v.clone())),
            None => Err(StatusGateError::Upstream("connection refused".into())),
        }
    }
}

/// `Ok(code)` answers with that status, `Err(msg)` fails the fetch.
pub struct FakeProbe {
    pub outcome: std::result::Result<u16, String>,
    pub calls: AtomicUsize,
}

impl FakeProbe {
    pub fn answering(code: u16) -> Arc<Self> {
        Arc::new(Self { outcome: Ok(code), calls: AtomicUsize::new(0) })
    }
    pub fn failing(msg: &str) -> Arc<Self> {
        Arc::new(Self { outcome: Err(msg.to_string()), calls: AtomicUsize::new(0) })
    }
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WebsiteProbe for FakeProbe {
    async fn probe(&self, _url: &str) -> Result<u16> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome
            .clone()
            .map_err(StatusGateError::Upstream)
    }
}

/// Never answers; the fetch stays pending until the request is dropped.
pub struct StalledWebsite;

#[async_trait]
impl WebsiteProbe for StalledWebsite {
    async fn probe(&self, _url: &str) -> Result<u16> {
        std::future::pending().await
    }
}

/// Which of the three metric reads should fail.
#[derive(Default, Clone, Copy)]
pub struct FailOn {
    pub temp: bool,
    pub load: bool,
    pub memory: bool,
}

pub struct FakeSystem {
    pub fail: FailOn,
    pub calls: AtomicUsize,
}

impl FakeSystem {
    pub fn healthy() -> Arc<Self> {
        Self::failing(FailOn::default())
    }
    pub fn failing(fail: FailOn) -> Arc<Self> {
        Arc::new(Self { fail, calls: AtomicUsize::new(0) })
    }
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SystemMetrics for FakeSystem {
    async fn cpu_temperature(&self) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.temp {
            return Err(StatusGateError::Metric("no sensors".into()));
        }
        Ok(48.5)
    }

    async fn cpu_load_percent(&self) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load {
            return Err(StatusGateError::Metric("cpu unavailable".into()));
        }
        Ok(12.5)
    }

    async fn memory(&self) -> Result<MemorySnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.memory {
            return Err(StatusGateError::Metric("meminfo unreadable".into()));
        }
        Ok(MemorySnapshot { total: 16 * GIB, available: 12 * GIB })
    }
}

pub fn collaborators(
    mcstatus: Arc<FakeMcStatus>,
    website: Arc<FakeProbe>,
    system: Arc<FakeSystem>,
) -> Collaborators {
    Collaborators { mcstatus, website, system }
}

pub fn healthy() -> Collaborators {
    collaborators(
        FakeMcStatus::ok(demo_status()),
        FakeProbe::answering(200),
        FakeSystem::healthy(),
    )
}

pub fn app_with(collaborators: Collaborators) -> (Router, AppState) {
    let state = AppState::with_collaborators(GatewayConfig::default(), collaborators);
    (build_router(state.clone()), state)
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).unwrap()
    }
    pub fn content_type(&self) -> &str {
        self.headers
            .get(axum::http::header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap())
            .unwrap_or("")
    }
}

pub async fn get(app: &Router, uri: &str) -> Reply {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Reply { status, headers, body }
}
