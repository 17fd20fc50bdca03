//! OpenAPI document for the domain endpoints.

use crate::error::ErrorBody;
use crate::handlers::{entity, favorite};
use crate::models::{Character, Planet, User, UserFavorites, Vehicle};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Star Wars API", description = "Characters, planets, vehicles and user favorites"),
    paths(
        entity::list_people,
        entity::get_person,
        entity::list_planets,
        entity::get_planet,
        entity::list_vehicles,
        entity::get_vehicle,
        entity::list_users,
        entity::user_favorites,
        favorite::add_favorite_character,
        favorite::remove_favorite_character,
        favorite::add_favorite_planet,
        favorite::remove_favorite_planet,
        favorite::add_favorite_vehicle,
        favorite::remove_favorite_vehicle,
    ),
    components(schemas(Character, Planet, Vehicle, User, UserFavorites, ErrorBody)),
    tags(
        (name = "catalog", description = "Read access to the seeded tables"),
        (name = "favorites", description = "User favorite management")
    )
)]
pub struct ApiDoc;
