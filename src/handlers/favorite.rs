//! Favorite add/remove handlers, one pair per entity kind.

use crate::error::{AppError, ErrorBody};
use crate::extractors::IdPath;
use crate::models::FavoriteKind;
use crate::response::created_message;
use crate::service::FavoriteService;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

async fn add(state: &AppState, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<impl IntoResponse, AppError> {
    let message = FavoriteService::add(state.store.as_ref(), kind, user_id, entity_id).await?;
    Ok(created_message(message))
}

async fn remove(
    state: &AppState,
    kind: FavoriteKind,
    user_id: i32,
    entity_id: i32,
) -> Result<impl IntoResponse, AppError> {
    let message = FavoriteService::remove(state.store.as_ref(), kind, user_id, entity_id).await?;
    Ok(created_message(message))
}

#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/people/{character_id}",
    tag = "favorites",
    params(("user_id" = i32, Path), ("character_id" = i32, Path)),
    responses(
        (status = 201, description = "Favorite added", body = String),
        (status = 404, description = "User or character not found", body = ErrorBody),
        (status = 409, description = "Favorite already exists", body = ErrorBody)
    )
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Character, user_id, character_id).await
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/people/{character_id}",
    tag = "favorites",
    params(("user_id" = i32, Path), ("character_id" = i32, Path)),
    responses(
        (status = 201, description = "Favorite removed", body = String),
        (status = 404, description = "User, character or favorite not found", body = ErrorBody)
    )
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    IdPath((user_id, character_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Character, user_id, character_id).await
}

#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/planets/{planet_id}",
    tag = "favorites",
    params(("user_id" = i32, Path), ("planet_id" = i32, Path)),
    responses(
        (status = 201, description = "Favorite added", body = String),
        (status = 404, description = "User or planet not found", body = ErrorBody),
        (status = 409, description = "Favorite already exists", body = ErrorBody)
    )
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Planet, user_id, planet_id).await
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/planets/{planet_id}",
    tag = "favorites",
    params(("user_id" = i32, Path), ("planet_id" = i32, Path)),
    responses(
        (status = 201, description = "Favorite removed", body = String),
        (status = 404, description = "User, planet or favorite not found", body = ErrorBody)
    )
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    IdPath((user_id, planet_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Planet, user_id, planet_id).await
}

#[utoipa::path(
    post,
    path = "/favorite/user/{user_id}/vehicles/{vehicle_id}",
    tag = "favorites",
    params(("user_id" = i32, Path), ("vehicle_id" = i32, Path)),
    responses(
        (status = 201, description = "Favorite added", body = String),
        (status = 404, description = "User or vehicle not found", body = ErrorBody),
        (status = 409, description = "Favorite already exists", body = ErrorBody)
    )
)]
pub async fn add_favorite_vehicle(
    State(state): State<AppState>,
    IdPath((user_id, vehicle_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    add(&state, FavoriteKind::Vehicle, user_id, vehicle_id).await
}

#[utoipa::path(
    delete,
    path = "/favorite/user/{user_id}/vehicles/{vehicle_id}",
    tag = "favorites",
    params(("user_id" = i32, Path), ("vehicle_id" = i32, Path)),
    responses(
        (status = 201, description = "Favorite removed", body = String),
        (status = 404, description = "User, vehicle or favorite not found", body = ErrorBody)
    )
)]
pub async fn remove_favorite_vehicle(
    State(state): State<AppState>,
    IdPath((user_id, vehicle_id)): IdPath<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    remove(&state, FavoriteKind::Vehicle, user_id, vehicle_id).await
}
