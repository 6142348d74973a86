//! Error types for the Crowdforge client

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// One field-level failure inside a validation error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FieldError {
    /// Machine-readable error code (e.g. `VALUE_REQUIRED`).
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    /// Extra context the server attaches to some codes.
    #[serde(default)]
    pub params: Vec<Value>,
}

/// Everything a Crowdforge API call can fail with.
///
/// Callers that want their own retry policy should branch on
/// [`Error::ServiceUnavailable`]; the client never retries on its own.
#[derive(Debug, Error)]
pub enum Error {
    /// The server rejected a create/update payload; per-field detail is
    /// preserved rather than flattened into a message.
    #[error("validation failed for {} field(s)", errors.len())]
    Validation { errors: BTreeMap<String, FieldError> },

    /// The addressed resource does not exist. Single-resource GETs return
    /// `Ok(None)` instead; this is raised by delete/patch and by polls.
    #[error("not found ({code}): {message}")]
    NotFound { code: String, message: String },

    /// 502/503 from the platform or an intermediary.
    #[error("service unavailable (HTTP {status})")]
    ServiceUnavailable { status: u16 },

    /// Any other non-2xx response with a parsed error body.
    #[error("API error (HTTP {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Failure before a status code was obtained (DNS, connect, timeout).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON decode failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The wait budget ran out before the operation reached a terminal state.
    #[error("operation {id} did not complete within {waited:?}")]
    OperationTimeout { id: String, waited: Duration },

    /// The operation reached the FAIL state; `details` is the server payload,
    /// carried verbatim.
    #[error("operation {id} finished with status FAIL")]
    OperationFailed { id: String, details: Value },

    /// Raised before any network I/O when a required argument is unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Refresh or wait on a real operation that was never bound to an
    /// operations client.
    #[error("operation is not bound to an operations client")]
    Detached,
}

impl Error {
    /// True for 502/503 responses, the category callers usually retry.
    pub fn is_service_unavailable(&self) -> bool {
        matches!(self, Error::ServiceUnavailable { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
