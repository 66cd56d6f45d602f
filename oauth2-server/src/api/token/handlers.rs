//! OAuth 2.0 token endpoint handler

use crate::api::token::models::TokenForm;
use crate::errors::ApiError;
use crate::openapi::TOKEN_TAG;
use crate::state::AppState;
use axum::{
    extract::{rejection::FormRejection, Form, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::{debug, warn};
use oauth2_core::{exchange, ClientCredentials, TokenReply, TokenRequest};

/// OAuth 2.0 Token endpoint (RFC 6749 Section 3.2)
///
/// Authenticates the client with HTTP Basic credentials and lets the
/// authorization backend decide on the grant.
#[utoipa::path(
    post,
    path = "/token",
    tag = TOKEN_TAG,
    request_body(content = TokenForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Access token issued by the authorization backend"),
        (status = 400, description = "Token request refused by the authorization backend"),
        (status = 401, description = "Missing or invalid client credentials"),
        (status = 500, description = "Authorization backend unavailable")
    )
)]
pub async fn token(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Response {
    let client = match ClientCredentials::from_headers(&headers) {
        Ok(client) => client,
        Err(e) => {
            warn!("Rejecting token request: {}", e);
            return ApiError::Unauthorized {
                challenge: state.challenge.clone(),
            }
            .into_response();
        }
    };

    let form = match form {
        Ok(Form(pairs)) => TokenForm::from_pairs(&pairs),
        Err(rejection) => {
            debug!("Token request body is not a form, treating it as empty: {}", rejection);
            TokenForm::default()
        }
    };
    let request = TokenRequest::from(form);

    let reply = exchange(
        state.issuer.as_ref(),
        &client,
        &request,
        state.backend_timeout(),
    )
    .await;
    reply_into_response(reply)
}

fn reply_into_response(reply: TokenReply) -> Response {
    match reply {
        TokenReply::Issued(token) => (StatusCode::OK, Json(token)).into_response(),
        TokenReply::Rejected { status, error } => (status, Json(error)).into_response(),
        TokenReply::BackendFault => ApiError::BackendFault.into_response(),
    }
}
