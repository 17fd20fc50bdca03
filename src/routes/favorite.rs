//! Favorite mutation routes: POST adds, DELETE removes.

use crate::handlers::favorite::{
    add_favorite_character, add_favorite_planet, add_favorite_vehicle, remove_favorite_character,
    remove_favorite_planet, remove_favorite_vehicle,
};
use crate::state::AppState;
use axum::{routing::post, Router};

pub fn favorite_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/favorite/user/:user_id/people/:character_id",
            post(add_favorite_character).delete(remove_favorite_character),
        )
        .route(
            "/favorite/user/:user_id/planets/:planet_id",
            post(add_favorite_planet).delete(remove_favorite_planet),
        )
        .route(
            "/favorite/user/:user_id/vehicles/:vehicle_id",
            post(add_favorite_vehicle).delete(remove_favorite_vehicle),
        )
        .with_state(state)
}
