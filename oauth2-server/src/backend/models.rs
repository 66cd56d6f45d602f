//! Wire format of the authorization backend's access token operation

use oauth2_core::{ClientCredentials, ErrorResponse, IssuerError, TokenRequest, TokenResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of an access token call
#[derive(Debug, Serialize)]
pub struct AccessTokenCall<'a> {
    pub client: &'a ClientCredentials,
    pub request: &'a TokenRequest,
}

/// Reply of an access token call; exactly one of `token` and `error` is set
#[derive(Debug, Deserialize)]
pub struct AccessTokenReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<Value>,
    #[serde(default)]
    pub error: Option<ErrorResponse>,
}

impl AccessTokenReply {
    /// Converts the reply into the backend's declared outcome, refusing replies
    /// whose `success` flag disagrees with the populated member
    pub fn into_token_response(self) -> Result<TokenResponse, IssuerError> {
        match (self.success, self.token, self.error) {
            (true, Some(token), None) => Ok(TokenResponse::Success { token }),
            (false, None, Some(error)) => Ok(TokenResponse::Failure(error)),
            (success, token, error) => Err(IssuerError::MalformedReply(format!(
                "success={}, token present={}, error present={}",
                success,
                token.is_some(),
                error.is_some()
            ))),
        }
    }
}
