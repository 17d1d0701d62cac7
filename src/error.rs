/// Error types for the verification-email relay
use serde_json::{Value, json};
use thiserror::Error;

/// Diagnostic detail attached to an internal failure.
///
/// The relay distinguishes "the provider answered with a non-200 response"
/// from "the call never produced a response at all". Callers get the
/// provider's status and body verbatim in the first case and the transport
/// error's message text in the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorDetail {
    /// The provider responded, but not with HTTP 200.
    Response { status: u16, body: String },
    /// Transport-level failure with no response object available.
    Message(String),
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Email and code are required")]
    InvalidArgument,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to send verification email")]
    Internal(ErrorDetail),
}

impl RelayError {
    /// Short machine-readable error kind exposed to callers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "invalid-argument",
            Self::Config(_) | Self::Internal(_) => "internal",
        }
    }

    /// Diagnostic details payload, if any.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::InvalidArgument => None,
            Self::Config(msg) => Some(Value::String(msg.clone())),
            Self::Internal(ErrorDetail::Response { status, body }) => Some(json!({
                "status": status,
                "body": body,
            })),
            Self::Internal(ErrorDetail::Message(msg)) => Some(Value::String(msg.clone())),
        }
    }

    /// Structured error body returned to the caller.
    pub fn to_body(&self) -> Value {
        json!({
            "kind": self.kind(),
            "message": self.to_string(),
            "details": self.details(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(RelayError::InvalidArgument.kind(), "invalid-argument");
        assert_eq!(
            RelayError::Internal(ErrorDetail::Message("boom".to_string())).kind(),
            "internal"
        );
        assert_eq!(RelayError::Config("missing".to_string()).kind(), "internal");
    }

    #[test]
    fn test_invalid_argument_message_is_fixed() {
        assert_eq!(
            RelayError::InvalidArgument.to_string(),
            "Email and code are required"
        );
        assert_eq!(RelayError::InvalidArgument.details(), None);
    }

    #[test]
    fn test_response_detail_carries_status_and_body() {
        let err = RelayError::Internal(ErrorDetail::Response {
            status: 503,
            body: "service unavailable".to_string(),
        });

        let details = err.details().unwrap();
        assert_eq!(details["status"], 503);
        assert_eq!(details["body"], "service unavailable");
    }

    #[test]
    fn test_error_body_shape() {
        let body = RelayError::Internal(ErrorDetail::Message("connection refused".to_string()))
            .to_body();

        assert_eq!(body["kind"], "internal");
        assert_eq!(body["message"], "Failed to send verification email");
        assert_eq!(body["details"], "connection refused");
    }
}
