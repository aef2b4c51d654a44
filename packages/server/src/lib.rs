pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod favorites;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use axum::{Json, routing::get};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Holonet API",
        version = "1.0.0",
        description = "Read access to the Star Wars catalog and per-user favorites"
    ),
    tags(
        (name = "People", description = "Characters in the catalog"),
        (name = "Planets", description = "Planets in the catalog"),
        (name = "Films", description = "Films in the catalog"),
        (name = "Users", description = "Users and their favorites"),
        (name = "Favorites", description = "Adding and removing favorites"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    let spec = api.clone();
    router
        .with_state(state)
        .route("/api-docs/openapi.json", get(|| async move { Json(spec) }))
        .merge(Scalar::with_url("/scalar", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Wrap the router so that `/people/` and `/people` resolve to the same route.
///
/// Path normalization has to run before routing, so it wraps the finished
/// router instead of being added with `Router::layer`.
pub fn build_app(state: AppState) -> NormalizePath<axum::Router> {
    NormalizePath::trim_trailing_slash(build_router(state))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allowed = config
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();
    let allow_origin = if allowed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(allowed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age))
}
