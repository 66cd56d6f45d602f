//! OAuth 2.0 token endpoint errors (RFC 6749 Section 5.2)

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status used for any error code missing from [`ERROR_STATUS`]
pub const DEFAULT_ERROR_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// HTTP status of every error code the token endpoint defines
pub const ERROR_STATUS: [(&str, StatusCode); 6] = [
    ("invalid_request", StatusCode::BAD_REQUEST),
    ("invalid_client", StatusCode::UNAUTHORIZED),
    ("invalid_grant", StatusCode::BAD_REQUEST),
    ("unauthorized_client", StatusCode::BAD_REQUEST),
    ("unsupported_grant_type", StatusCode::BAD_REQUEST),
    ("invalid_scope", StatusCode::BAD_REQUEST),
];

/// Looks up the HTTP status for an error code
pub fn status_for(code: &str) -> StatusCode {
    ERROR_STATUS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, status)| *status)
        .unwrap_or(DEFAULT_ERROR_STATUS)
}

/// Error code declared by the authorization backend.
///
/// Codes outside RFC 6749 are kept verbatim in [`OAuthErrorCode::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OAuthErrorCode {
    InvalidRequest,
    InvalidClient,
    InvalidGrant,
    UnauthorizedClient,
    UnsupportedGrantType,
    InvalidScope,
    Other(String),
}

impl OAuthErrorCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
            Self::Other(code) => code,
        }
    }

    pub fn http_status(&self) -> StatusCode {
        status_for(self.as_str())
    }
}

impl From<String> for OAuthErrorCode {
    fn from(code: String) -> Self {
        match code.as_str() {
            "invalid_request" => Self::InvalidRequest,
            "invalid_client" => Self::InvalidClient,
            "invalid_grant" => Self::InvalidGrant,
            "unauthorized_client" => Self::UnauthorizedClient,
            "unsupported_grant_type" => Self::UnsupportedGrantType,
            "invalid_scope" => Self::InvalidScope,
            _ => Self::Other(code),
        }
    }
}

impl From<&str> for OAuthErrorCode {
    fn from(code: &str) -> Self {
        Self::from(code.to_string())
    }
}

impl From<OAuthErrorCode> for String {
    fn from(code: OAuthErrorCode) -> Self {
        match code {
            OAuthErrorCode::Other(code) => code,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OAuthErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// OAuth 2.0 Error Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code
    pub error: OAuthErrorCode,
    /// Human-readable error description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    /// Page describing the error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_uri: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<OAuthErrorCode>) -> Self {
        Self {
            error: error.into(),
            error_description: None,
            error_uri: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.error_description = Some(description.into());
        self
    }

    /// Status the token endpoint answers this error with
    pub fn status(&self) -> StatusCode {
        self.error.http_status()
    }
}
