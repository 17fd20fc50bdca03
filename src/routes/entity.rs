//! Catalog read routes.

use crate::handlers::entity::{
    get_person, get_planet, get_vehicle, list_people, list_planets, list_users, list_vehicles, user_favorites,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/:id", get(get_person))
        .route("/planets", get(list_planets))
        .route("/planets/:id", get(get_planet))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
        .route("/users", get(list_users))
        .route("/users/:id/favorites", get(user_favorites))
        .with_state(state)
}
