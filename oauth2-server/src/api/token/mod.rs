//! OAuth 2.0 token endpoint (RFC 6749 Section 3.2)
//!
//! Clients authenticate with HTTP Basic credentials and submit a form encoded
//! token request. The decision is delegated to the authorization backend and its
//! answer is relayed as is. Every response is marked as non-cacheable.

pub mod handlers;
pub mod models;

use crate::headers::no_store_middleware;
use crate::state::AppState;
use axum::{middleware, routing::post, Router};

/// Creates the token endpoint routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/token", post(handlers::token))
        .layer(middleware::from_fn(no_store_middleware))
}
