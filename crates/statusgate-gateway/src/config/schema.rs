use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;
use statusgate_core::error::{Result, StatusGateError};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub upstream: UpstreamSection,

    #[serde(default)]
    pub sysinfo: SysInfoSection,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            version: 1,
            gateway: GatewaySection::default(),
            upstream: UpstreamSection::default(),
            sysinfo: SysInfoSection::default(),
        }
    }
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(StatusGateError::UnsupportedVersion);
        }

        self.gateway.validate()?;
        self.upstream.validate()?;
        self.sysinfo.validate()?;

        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr().map(|_| ())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr> {
        self.listen.parse().map_err(|e| {
            StatusGateError::Config(format!(
                "gateway.listen must be a valid SocketAddr ({}): {e}",
                self.listen
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamSection {
    /// Base URL of the Minecraft status API; the server address is appended
    /// as the last path segment.
    #[serde(default = "default_mcstatus_base_url")]
    pub mcstatus_base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
}

impl Default for UpstreamSection {
    fn default() -> Self {
        Self {
            mcstatus_base_url: default_mcstatus_base_url(),
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
        }
    }
}

impl UpstreamSection {
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.mcstatus_base_url).map_err(|e| {
            StatusGateError::Config(format!("upstream.mcstatus_base_url is not a URL: {e}"))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(StatusGateError::Config(
                "upstream.mcstatus_base_url must be http or https".into(),
            ));
        }
        if url.cannot_be_a_base() {
            return Err(StatusGateError::Config(
                "upstream.mcstatus_base_url must accept path segments".into(),
            ));
        }
        if self.user_agent.trim().is_empty() {
            return Err(StatusGateError::Config(
                "upstream.user_agent must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SysInfoSection {
    /// Gap between the two CPU samples used to compute load.
    #[serde(default = "default_cpu_sample_interval_ms")]
    pub cpu_sample_interval_ms: u64,
}

impl Default for SysInfoSection {
    fn default() -> Self {
        Self {
            cpu_sample_interval_ms: default_cpu_sample_interval_ms(),
        }
    }
}

impl SysInfoSection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=5000).contains(&self.cpu_sample_interval_ms) {
            return Err(StatusGateError::Config(
                "sysinfo.cpu_sample_interval_ms must be between 100 and 5000".into(),
            ));
        }
        Ok(())
    }

    pub fn cpu_sample_interval(&self) -> Duration {
        Duration::from_millis(self.cpu_sample_interval_ms)
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_mcstatus_base_url() -> String {
    "https://api.mcstatus.io/v2/status/java".into()
}
fn default_user_agent() -> String {
    concat!("statusgate/", env!("CARGO_PKG_VERSION")).into()
}
fn default_follow_redirects() -> bool {
    true
}
fn default_cpu_sample_interval_ms() -> u64 {
    200
}
