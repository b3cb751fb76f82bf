//! Shared error type across statusgate crates.

use thiserror::Error;

/// Stable error codes, used in logs and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid or unreadable configuration.
    Config,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Outbound request failed before a response arrived.
    Upstream,
    /// Upstream answered but the body could not be parsed.
    Decode,
    /// A local system metric could not be read.
    Metric,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Config => "CONFIG",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Upstream => "UPSTREAM",
            ClientCode::Decode => "DECODE",
            ClientCode::Metric => "METRIC",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, StatusGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum StatusGateError {
    #[error("config: {0}")]
    Config(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("{0}")]
    Upstream(String),
    #[error("invalid upstream body: {0}")]
    Decode(String),
    #[error("metric unavailable: {0}")]
    Metric(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl StatusGateError {
    /// Map the error to its stable code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            StatusGateError::Config(_) => ClientCode::Config,
            StatusGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            StatusGateError::Upstream(_) => ClientCode::Upstream,
            StatusGateError::Decode(_) => ClientCode::Decode,
            StatusGateError::Metric(_) => ClientCode::Metric,
            StatusGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
