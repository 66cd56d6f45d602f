//! Token request translation between the HTTP surface and the issuer

use crate::credentials::ClientCredentials;
use crate::error::ErrorResponse;
use crate::issuer::{IssuerError, TokenIssuer};
use crate::request::TokenRequest;
use crate::response::TokenResponse;
use http::StatusCode;
use log::{error, info};
use serde_json::Value;
use std::time::Duration;

/// What the token endpoint answers after consulting the issuer
#[derive(Debug, Clone, PartialEq)]
pub enum TokenReply {
    /// 200 with the issued token payload
    Issued(Value),
    /// Backend-declared OAuth 2.0 error with its mapped status
    Rejected {
        status: StatusCode,
        error: ErrorResponse,
    },
    /// The backend could not be reached or understood; 500 without a body
    BackendFault,
}

impl TokenReply {
    pub fn status(&self) -> StatusCode {
        match self {
            TokenReply::Issued(_) => StatusCode::OK,
            TokenReply::Rejected { status, .. } => *status,
            TokenReply::BackendFault => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Forwards a token request to the issuer and translates its outcome.
///
/// The issuer call is bounded by `timeout`; elapsing it counts as a backend
/// fault. Nothing is retried.
pub async fn exchange(
    issuer: &dyn TokenIssuer,
    client: &ClientCredentials,
    request: &TokenRequest,
    timeout: Duration,
) -> TokenReply {
    let client_id = client.id().unwrap_or("<none>");
    let outcome = tokio::time::timeout(timeout, issuer.get_access_token(client, request))
        .await
        .unwrap_or(Err(IssuerError::Timeout(timeout)));

    match outcome {
        Ok(TokenResponse::Success { token }) => {
            info!(
                "Issued access token to client '{}' for grant type '{}'",
                client_id,
                request.grant_type().unwrap_or("<none>")
            );
            TokenReply::Issued(token)
        }
        Ok(TokenResponse::Failure(error)) => {
            let status = error.status();
            info!(
                "Token request from client '{}' rejected with '{}' ({})",
                client_id, error.error, status
            );
            TokenReply::Rejected { status, error }
        }
        Err(e) => {
            error!("Token request from client '{}' failed: {}", client_id, e);
            TokenReply::BackendFault
        }
    }
}
