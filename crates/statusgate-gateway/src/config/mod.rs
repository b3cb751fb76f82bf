//! Gateway config loader (strict parsing).

pub mod schema;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use statusgate_core::error::{Result, StatusGateError};

pub use schema::{GatewayConfig, GatewaySection, SysInfoSection, UpstreamSection};

/// Used when neither a CLI argument nor `STATUSGATE_CONFIG` names a file.
pub const DEFAULT_CONFIG_PATH: &str = "statusgate.yaml";
pub const CONFIG_ENV: &str = "STATUSGATE_CONFIG";

/// Where the effective config came from, for the startup log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(String),
    Defaults,
}

pub fn load_from_file(path: &str) -> Result<GatewayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| StatusGateError::Config(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(s)
        .map_err(|e| StatusGateError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve and load the config the binary should run with.
///
/// An explicitly named file must exist. The implicit default path may be
/// absent, in which case built-in defaults are used.
pub fn load(explicit: Option<String>) -> Result<(GatewayConfig, ConfigSource)> {
    let explicit = explicit.or_else(|| std::env::var(CONFIG_ENV).ok());
    if let Some(path) = explicit {
        let cfg = load_from_file(&path)?;
        return Ok((cfg, ConfigSource::File(path)));
    }

    match fs::metadata(Path::new(DEFAULT_CONFIG_PATH)) {
        Ok(_) => {
            let cfg = load_from_file(DEFAULT_CONFIG_PATH)?;
            Ok((cfg, ConfigSource::File(DEFAULT_CONFIG_PATH.into())))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let cfg = GatewayConfig::default();
            cfg.validate()?;
            Ok((cfg, ConfigSource::Defaults))
        }
        Err(e) => Err(StatusGateError::Config(format!(
            "stat {DEFAULT_CONFIG_PATH} failed: {e}"
        ))),
    }
}
