use axum::response::{IntoResponse, Response};
use http::header::{InvalidHeaderValue, WWW_AUTHENTICATE};
use http::{HeaderValue, StatusCode};
use thiserror::Error;

/// Locally detected faults of a token request.
///
/// Neither variant carries a body so nothing about the cause leaks to the caller.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Missing or malformed client credentials, answered with a Basic challenge
    Unauthorized { challenge: HeaderValue },
    /// The authorization backend failed or did not answer
    BackendFault,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized { challenge } => {
                (StatusCode::UNAUTHORIZED, [(WWW_AUTHENTICATE, challenge)]).into_response()
            }
            ApiError::BackendFault => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Errors that prevent the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Invalid authentication realm: {0:?}")]
    InvalidRealm(String),
    #[error("Invalid backend URL: {0}")]
    BackendUrl(#[from] url::ParseError),
    #[error("Invalid backend API key: {0}")]
    BackendApiKey(#[from] InvalidHeaderValue),
    #[error("Failed to create backend client: {0}")]
    BackendClient(#[from] reqwest::Error),
}
