//! Read handlers for people, planets, vehicles and users.

use crate::error::{AppError, ErrorBody};
use crate::extractors::IdPath;
use crate::models::{Character, Planet, User, UserFavorites, Vehicle};
use crate::response::ok;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

#[utoipa::path(
    get,
    path = "/people",
    tag = "catalog",
    responses(
        (status = 200, description = "All characters", body = Vec<Character>),
        (status = 404, description = "No characters stored", body = ErrorBody)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::list_characters(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Character id")),
    responses(
        (status = 200, description = "One character", body = Character),
        (status = 404, description = "Character not found", body = ErrorBody)
    )
)]
pub async fn get_person(State(state): State<AppState>, IdPath(id): IdPath<i32>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::get_character(state.store.as_ref(), id).await?))
}

#[utoipa::path(
    get,
    path = "/planets",
    tag = "catalog",
    responses(
        (status = 200, description = "All planets", body = Vec<Planet>),
        (status = 404, description = "No planets stored", body = ErrorBody)
    )
)]
pub async fn list_planets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::list_planets(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Planet id")),
    responses(
        (status = 200, description = "One planet", body = Planet),
        (status = 404, description = "Planet not found", body = ErrorBody)
    )
)]
pub async fn get_planet(State(state): State<AppState>, IdPath(id): IdPath<i32>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::get_planet(state.store.as_ref(), id).await?))
}

#[utoipa::path(
    get,
    path = "/vehicles",
    tag = "catalog",
    responses(
        (status = 200, description = "All vehicles", body = Vec<Vehicle>),
        (status = 404, description = "No vehicles stored", body = ErrorBody)
    )
)]
pub async fn list_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::list_vehicles(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = "catalog",
    params(("id" = i32, Path, description = "Vehicle id")),
    responses(
        (status = 200, description = "One vehicle", body = Vehicle),
        (status = 404, description = "Vehicle not found", body = ErrorBody)
    )
)]
pub async fn get_vehicle(State(state): State<AppState>, IdPath(id): IdPath<i32>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::get_vehicle(state.store.as_ref(), id).await?))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "catalog",
    responses(
        (status = 200, description = "All users", body = Vec<User>),
        (status = 404, description = "No users stored", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::list_users(state.store.as_ref()).await?))
}

#[utoipa::path(
    get,
    path = "/users/{id}/favorites",
    tag = "catalog",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User with favorites expanded", body = UserFavorites),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn user_favorites(
    State(state): State<AppState>,
    IdPath(id): IdPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    Ok(ok(CatalogService::user_favorites(state.store.as_ref(), id).await?))
}
