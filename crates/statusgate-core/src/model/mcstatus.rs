use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, StatusGateError};

/// Minecraft server status as returned by the upstream lookup service.
///
/// Opaque: the gateway forwards whatever object the upstream produced, so
/// (de)serialization is transparent over the raw JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct McStatus(Value);

impl McStatus {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse an upstream body. Any valid JSON document is accepted.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body)
            .map(Self)
            .map_err(|e| StatusGateError::Decode(format!("mcstatus body: {e}")))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// `online` flag, when the upstream reported one.
    pub fn online(&self) -> Option<bool> {
        self.0.get("online").and_then(Value::as_bool)
    }
}
