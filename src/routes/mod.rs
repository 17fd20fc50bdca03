//! Router assembly.

mod common;
mod entity;
mod favorite;

pub use common::common_routes;
pub use entity::entity_routes;
pub use favorite::favorite_routes;

use crate::handlers::meta::{not_found, openapi_json, sitemap};
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Method and path of every route, as served at `GET /`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/people"),
    ("GET", "/people/{id}"),
    ("GET", "/planets"),
    ("GET", "/planets/{id}"),
    ("GET", "/vehicles"),
    ("GET", "/vehicles/{id}"),
    ("GET", "/users"),
    ("GET", "/users/{id}/favorites"),
    ("POST", "/favorite/user/{user_id}/people/{character_id}"),
    ("DELETE", "/favorite/user/{user_id}/people/{character_id}"),
    ("POST", "/favorite/user/{user_id}/planets/{planet_id}"),
    ("DELETE", "/favorite/user/{user_id}/planets/{planet_id}"),
    ("POST", "/favorite/user/{user_id}/vehicles/{vehicle_id}"),
    ("DELETE", "/favorite/user/{user_id}/vehicles/{vehicle_id}"),
    ("GET", "/health"),
    ("GET", "/ready"),
    ("GET", "/version"),
    ("GET", "/openapi.json"),
];

/// All routes with request tracing and a JSON 404 fallback.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/openapi.json", get(openapi_json))
        .merge(entity_routes(state.clone()))
        .merge(favorite_routes(state.clone()))
        .merge(common_routes(state))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
}

/// The servable application: [`router`] behind trailing-slash trimming, so `/people/` matches `/people`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
