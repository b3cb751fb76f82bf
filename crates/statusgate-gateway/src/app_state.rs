//! Shared application state for the statusgate gateway.
//!
//! Built once at startup from `GatewayConfig` and cloned into every handler.
//! Holds the three collaborators behind trait objects plus the metrics
//! registry; nothing here is mutated by the functional routes.

use std::sync::Arc;

use statusgate_core::error::Result;

use crate::config::GatewayConfig;
use crate::obs::GatewayMetrics;
use crate::system::{HostMetrics, SystemMetrics};
use crate::upstream::{self, HttpMcStatusLookup, HttpWebsiteProbe, McStatusLookup, WebsiteProbe};

/// The external collaborators a gateway delegates to.
#[derive(Clone)]
pub struct Collaborators {
    pub mcstatus: Arc<dyn McStatusLookup>,
    pub website: Arc<dyn WebsiteProbe>,
    pub system: Arc<dyn SystemMetrics>,
}

impl Collaborators {
    /// Real implementations: one pooled reqwest client, sysinfo-backed metrics.
    pub fn from_config(cfg: &GatewayConfig) -> Result<Self> {
        let client = upstream::build_http_client(&cfg.upstream)?;
        let mcstatus = HttpMcStatusLookup::new(client.clone(), &cfg.upstream.mcstatus_base_url)?;

        Ok(Self {
            mcstatus: Arc::new(mcstatus),
            website: Arc::new(HttpWebsiteProbe::new(client)),
            system: Arc::new(HostMetrics::new(cfg.sysinfo.cpu_sample_interval())),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    collaborators: Collaborators,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build application state with the real collaborators.
    /// Returns Result so main can report startup errors without panicking.
    pub fn new(cfg: GatewayConfig) -> Result<Self> {
        let collaborators = Collaborators::from_config(&cfg)?;
        Ok(Self::with_collaborators(cfg, collaborators))
    }

    /// Build application state around caller-supplied collaborators (fakes in tests).
    pub fn with_collaborators(cfg: GatewayConfig, collaborators: Collaborators) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                collaborators,
                metrics: GatewayMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn mcstatus(&self) -> Arc<dyn McStatusLookup> {
        Arc::clone(&self.inner.collaborators.mcstatus)
    }

    pub fn website(&self) -> Arc<dyn WebsiteProbe> {
        Arc::clone(&self.inner.collaborators.website)
    }

    pub fn system(&self) -> Arc<dyn SystemMetrics> {
        Arc::clone(&self.inner.collaborators.system)
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
