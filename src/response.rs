//! Helpers for reading responses without reinterpreting them.

use crate::error::CmcResult;
use serde::Deserialize;
use serde_json::Value;

/// The `status` object the API attaches to every payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    pub error_code: i64,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub elapsed: Option<i64>,
    #[serde(default)]
    pub credit_count: Option<i64>,
}

impl ApiStatus {
    /// Reads `payload.status`, if present and well-formed.
    pub fn from_payload(payload: &Value) -> Option<Self> {
        let status = payload.get("status")?;
        Self::deserialize(status).ok()
    }

    pub fn is_ok(&self) -> bool {
        self.error_code == 0
    }
}

/// Flattens a call result into a single JSON document: the payload on
/// success, the error envelope otherwise.
pub fn into_payload(result: CmcResult) -> Value {
    match result {
        Ok(payload) => payload,
        Err(error) => error.envelope().to_value(),
    }
}
