//! Unified SDK error types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when an identifier is empty or the `"undefined"` sentinel.
pub const INVALID_ID_MESSAGE: &str = "Invalid ID provided";

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rejected client-side, before any request was sent.
    #[error("{0}")]
    InvalidIdentifier(String),

    /// The server answered with a non-2xx status.
    ///
    /// `message` is the server's detail message when one could be extracted,
    /// otherwise a generic failure message carrying the status code.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        detail: Option<ErrorDetail>,
    },

    /// Transport failure (connection refused, aborted, TLS, ...).
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A 2xx body that does not match the expected response shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client construction failed (bad base URL, bad header).
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias for SDK operations.
pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build the error for a non-2xx response from its raw body.
    ///
    /// The body is parsed as `{ "detail": ... }`; an unparsable or empty body
    /// simply yields no detail.
    pub fn from_status(status: u16, body: &str, failure: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail);

        let message = detail
            .as_ref()
            .and_then(ErrorDetail::message)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{} (HTTP {})", failure, status));

        ApiError::Status {
            status,
            message,
            detail,
        }
    }

    /// HTTP status code, for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Structured server detail, for `Status` errors that carried one.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            ApiError::Status { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }
}

// ─── Failure payload ─────────────────────────────────────────────────────────

/// Failure body shape: `{ "detail": ... }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

/// The `detail` field of a failure body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ErrorDetail {
    /// Plain message, e.g. `{"detail": "Node not found"}`.
    Message(String),
    /// Request validation errors.
    Validation(Vec<ValidationErrorItem>),
    /// Anything else the server decided to send.
    Other(Value),
}

impl ErrorDetail {
    /// Human-readable message: the string itself, or the first validation
    /// error's `msg`. Empty strings count as absent.
    pub fn message(&self) -> Option<&str> {
        let msg = match self {
            ErrorDetail::Message(m) => Some(m.as_str()),
            ErrorDetail::Validation(items) => items.first().map(|i| i.msg.as_str()),
            ErrorDetail::Other(_) => None,
        };
        msg.filter(|m| !m.is_empty())
    }
}

/// One entry of a validation failure list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationErrorItem {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<LocSegment>,
    pub msg: String,
    #[serde(default)]
    pub input: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ctx: Option<Map<String, Value>>,
}

/// A path segment inside `loc`: field name or list index.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum LocSegment {
    Key(String),
    Index(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail_becomes_message() {
        let err = ApiError::from_status(404, r#"{"detail": "Node not found"}"#, "Failed");
        assert_eq!(err.to_string(), "Node not found");
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.detail(),
            Some(&ErrorDetail::Message("Node not found".to_string()))
        );
    }

    #[test]
    fn test_validation_detail_uses_first_msg() {
        let body = r#"{
            "detail": [
                {
                    "type": "string_too_short",
                    "loc": ["query", "q"],
                    "msg": "String should have at least 2 characters",
                    "input": "a",
                    "ctx": {"min_length": 2}
                },
                {
                    "type": "missing",
                    "loc": ["query", "limit", 0],
                    "msg": "Field required",
                    "input": null
                }
            ]
        }"#;
        let err = ApiError::from_status(422, body, "Failed to fetch suggestions");
        assert_eq!(err.to_string(), "String should have at least 2 characters");

        match err.detail() {
            Some(ErrorDetail::Validation(items)) => {
                assert_eq!(items.len(), 2);
                assert_eq!(items[0].kind, "string_too_short");
                assert_eq!(items[1].loc[2], LocSegment::Index(0));
                assert!(items[1].ctx.is_none());
            }
            other => panic!("expected validation detail, got {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_body_falls_back_to_generic() {
        let err = ApiError::from_status(502, "<html>Bad Gateway</html>", "Failed to fetch search results");
        assert_eq!(err.to_string(), "Failed to fetch search results (HTTP 502)");
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_empty_body_and_missing_detail() {
        let err = ApiError::from_status(500, "", "Failed");
        assert_eq!(err.to_string(), "Failed (HTTP 500)");

        let err = ApiError::from_status(500, r#"{"error": "boom"}"#, "Failed");
        assert_eq!(err.to_string(), "Failed (HTTP 500)");
        assert!(err.detail().is_none());
    }

    #[test]
    fn test_empty_string_detail_is_kept_but_not_used_as_message() {
        let err = ApiError::from_status(400, r#"{"detail": ""}"#, "Failed");
        assert_eq!(err.to_string(), "Failed (HTTP 400)");
        assert_eq!(err.detail(), Some(&ErrorDetail::Message(String::new())));
    }

    #[test]
    fn test_object_detail_is_other() {
        let err = ApiError::from_status(409, r#"{"detail": {"code": 7}}"#, "Failed");
        assert_eq!(err.to_string(), "Failed (HTTP 409)");
        assert!(matches!(err.detail(), Some(ErrorDetail::Other(_))));
    }

    #[test]
    fn test_invalid_identifier_display() {
        let err = ApiError::InvalidIdentifier(INVALID_ID_MESSAGE.to_string());
        assert_eq!(err.to_string(), "Invalid ID provided");
        assert_eq!(err.status(), None);
    }
}
