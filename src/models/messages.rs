/// Invocation boundary messages
use serde::{Deserialize, Serialize};

/// Call payload supplied by the mobile client.
///
/// Both fields default to empty strings so that an absent field is reported
/// as an invalid argument rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SendVerificationRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub code: String,
}

impl SendVerificationRequest {
    /// Checks the presence invariant: both fields non-empty.
    ///
    /// No format or length validation happens here; the caller is expected
    /// to have produced a syntactically plausible email and code already.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.code.is_empty()
    }
}

/// Success object returned to the caller.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SendVerificationResponse {
    pub success: bool,
    pub message: String,
}
