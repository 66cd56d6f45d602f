use crate::error::ErrorResponse;
use serde_json::Value;

/// Outcome the authorization backend declares for a token request
#[derive(Debug, Clone, PartialEq)]
pub enum TokenResponse {
    /// Token issued; the payload is opaque and forwarded unchanged
    Success { token: Value },
    /// Request refused with an OAuth 2.0 error
    Failure(ErrorResponse),
}
