mod access_log;
pub(crate) mod health;
pub(crate) mod token;

use crate::api::access_log::access_log_middleware;
use crate::state::AppState;
use axum::{middleware, Router};

/// Combines all API routes into a single router
pub(super) fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(token::router())
        .layer(middleware::from_fn(access_log_middleware))
}
