//! HTTP Basic client authentication (RFC 6749 Section 2.3.1)

use crate::request::non_empty;
use base64::alphabet;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use http::header::AUTHORIZATION;
use http::HeaderMap;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

const BASIC_SCHEME: &str = "Basic";

/// Standard padded alphabet, tolerating non-zero bits after the last symbol
const BASIC_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Reasons a request's client credentials are rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("authorization scheme must be Basic")]
    SchemeInvalid,
    #[error("basic credentials are not valid base64: {0}")]
    EncodingInvalid(String),
    #[error("basic credentials must have the form id:secret")]
    FormatInvalid,
}

/// Client identifier and secret presented by the caller.
///
/// Either part may be absent; an empty part is stored as absent.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClientCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secret: Option<String>,
}

impl ClientCredentials {
    pub fn new(id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            id: non_empty(id),
            secret: non_empty(secret),
        }
    }

    /// Reads credentials from the `Authorization` header of a request.
    ///
    /// A missing header, or one that is not visible ASCII, is treated as empty.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, CredentialsError> {
        let header = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        Self::from_authorization(header)
    }

    /// Parses a `Basic <base64(id:secret)>` authorization value.
    ///
    /// The scheme is matched case-sensitively and the decoded payload is split
    /// on its first colon, so secrets may contain colons.
    pub fn from_authorization(header: Option<&str>) -> Result<Self, CredentialsError> {
        let header = header.unwrap_or_default();
        let (scheme, param) = header
            .split_once(' ')
            .ok_or(CredentialsError::SchemeInvalid)?;
        if scheme != BASIC_SCHEME {
            return Err(CredentialsError::SchemeInvalid);
        }

        let decoded = BASIC_ENGINE
            .decode(param)
            .map_err(|e| CredentialsError::EncodingInvalid(e.to_string()))?;
        let decoded =
            String::from_utf8(decoded).map_err(|e| CredentialsError::EncodingInvalid(e.to_string()))?;

        let (id, secret) = decoded
            .split_once(':')
            .ok_or(CredentialsError::FormatInvalid)?;
        Ok(Self::new(id, secret))
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("id", &self.id)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
