use crate::credentials::ClientCredentials;
use crate::request::TokenRequest;
use crate::response::TokenResponse;
use async_trait::async_trait;
use http::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Capability of obtaining access tokens from the authorization backend.
///
/// Implementations are shared across concurrent requests and must not keep
/// per-request state.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    /// Asks the backend to validate the client and grant and issue a token.
    ///
    /// An OAuth 2.0 refusal is a successful call returning
    /// [`TokenResponse::Failure`]; `Err` is reserved for failing to reach or
    /// understand the backend.
    async fn get_access_token(
        &self,
        client: &ClientCredentials,
        request: &TokenRequest,
    ) -> Result<TokenResponse, IssuerError>;
}

/// Errors that can occur while talking to the authorization backend
#[derive(Debug, Error)]
pub enum IssuerError {
    #[error("Authorization backend unavailable: {0}")]
    Unavailable(String),
    #[error("Authorization backend responded with status: {0}")]
    InvalidStatus(StatusCode),
    #[error("Failed to parse authorization backend reply: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Malformed authorization backend reply: {0}")]
    MalformedReply(String),
    #[error("Authorization backend did not answer within {0:?}")]
    Timeout(Duration),
}
