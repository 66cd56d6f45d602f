use crate::api::health::{self, Health};
use crate::api::token::{handlers, models::TokenForm};
use crate::state::AppState;
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

pub(crate) const HEALTH_TAG: &str = "Health API";
pub(crate) const TOKEN_TAG: &str = "OAuth 2.0 API";

#[derive(OpenApi)]
#[openapi(
    paths(handlers::token, health::health_check),
    components(schemas(TokenForm, Health)),
    tags(
        (name = HEALTH_TAG, description = "Health check endpoints"),
        (name = TOKEN_TAG, description = "OAuth 2.0 token endpoint"),
    ),
    info(
        title = "OAuth 2.0 Token Server API",
        description = "Token endpoint delegating grant decisions to an authorization backend",
        version = "1.0.0"
    )
)]
pub(crate) struct ApiDoc;

/// Creates a router for OpenAPI documentation routes
pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
}
