//! Local error type and its wire envelope.
//!
//! Every endpoint method returns [`CmcResult`]: the decoded payload, or a
//! [`CmcError`] carrying one of the numeric codes below. Remote application
//! errors are not represented here; they come back as ordinary payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Transport failure (connection, timeout, redirect loop, unreadable body).
pub const CONNECTION_ERROR: i64 = 100;
/// A required argument was not supplied.
pub const MISSING_PARAMETER: i64 = 101;
/// An argument had the wrong type.
pub const TYPE_ERROR: i64 = 102;
/// A numeric argument was outside its hard bounds.
pub const OUT_OF_RANGE: i64 = 103;

/// Placeholder carried in the `data` field of a local error envelope.
const NO_DATA: &str = "No data";

pub type CmcResult<T = Value> = Result<T, CmcError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CmcError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("type error: `{name}` must be {expected}, got {found}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("value out of range: `{name}` {reason}")]
    OutOfRange { name: &'static str, reason: String },
}

impl CmcError {
    pub const fn code(&self) -> i64 {
        match self {
            Self::Connection(_) => CONNECTION_ERROR,
            Self::MissingParameter(_) => MISSING_PARAMETER,
            Self::TypeMismatch { .. } => TYPE_ERROR,
            Self::OutOfRange { .. } => OUT_OF_RANGE,
        }
    }

    /// Human-readable message placed in the envelope.
    ///
    /// Transport failures report the underlying description as-is.
    pub fn message(&self) -> String {
        match self {
            Self::Connection(description) => description.clone(),
            other => other.to_string(),
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        ErrorEnvelope::from(self)
    }
}

/// Wire shape of a local failure:
/// `{"status": {"error_code": .., "error_message": ..}, "data": "No data"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub status: EnvelopeStatus,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeStatus {
    pub error_code: i64,
    pub error_message: String,
}

impl ErrorEnvelope {
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "status": {
                "error_code": self.status.error_code,
                "error_message": self.status.error_message,
            },
            "data": self.data,
        })
    }
}

impl From<&CmcError> for ErrorEnvelope {
    fn from(error: &CmcError) -> Self {
        Self {
            status: EnvelopeStatus {
                error_code: error.code(),
                error_message: error.message(),
            },
            data: NO_DATA.to_string(),
        }
    }
}

impl From<CmcError> for ErrorEnvelope {
    fn from(error: CmcError) -> Self {
        Self::from(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CmcError::Connection("refused".into()).code(), 100);
        assert_eq!(CmcError::MissingParameter("id").code(), 101);
        let type_error = CmcError::TypeMismatch {
            name: "limit",
            expected: "an integer",
            found: "a string",
        };
        assert_eq!(type_error.code(), 102);
        let range_error = CmcError::OutOfRange {
            name: "amount",
            reason: "must be at most 1e9".into(),
        };
        assert_eq!(range_error.code(), 103);
    }

    #[test]
    fn test_envelope_wire_shape() {
        let envelope = CmcError::MissingParameter("id, slug or symbol").envelope();

        assert_eq!(
            envelope.to_value(),
            serde_json::json!({
                "status": {
                    "error_code": 101,
                    "error_message": "missing required parameter: id, slug or symbol",
                },
                "data": "No data",
            })
        );
    }

    #[test]
    fn test_connection_message_is_the_raw_description() {
        let envelope = CmcError::Connection("operation timed out".into()).envelope();
        assert_eq!(envelope.status.error_code, 100);
        assert_eq!(envelope.status.error_message, "operation timed out");
    }
}
