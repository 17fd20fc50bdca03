//! Root route listing, OpenAPI document and the JSON 404 fallback.

use crate::error::AppError;
use crate::extractors::id::ROUTE_NOT_FOUND;
use crate::openapi::ApiDoc;
use crate::routes::ROUTES;
use axum::Json;
use serde::Serialize;
use utoipa::OpenApi;

#[derive(Serialize)]
pub struct RouteEntry {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Serialize)]
pub struct RouteListing {
    pub routes: Vec<RouteEntry>,
}

/// GET /: every route the service answers, in registration order.
pub async fn sitemap() -> Json<RouteListing> {
    Json(RouteListing {
        routes: ROUTES
            .iter()
            .map(|&(method, path)| RouteEntry { method, path })
            .collect(),
    })
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub async fn not_found() -> AppError {
    AppError::NotFound(ROUTE_NOT_FOUND.into())
}
