//! Parameterized statements. Identifiers come from `FavoriteKind` only; values are always bound.

use crate::models::FavoriteKind;

pub const LIST_CHARACTERS: &str =
    "SELECT id, name, gender, birth_year, height, eye_color, hair_color FROM characters ORDER BY id";
pub const GET_CHARACTER: &str =
    "SELECT id, name, gender, birth_year, height, eye_color, hair_color FROM characters WHERE id = $1";

pub const LIST_PLANETS: &str = "SELECT id, name, climate, terrain, population, diameter FROM planets ORDER BY id";
pub const GET_PLANET: &str = "SELECT id, name, climate, terrain, population, diameter FROM planets WHERE id = $1";

pub const LIST_VEHICLES: &str =
    "SELECT id, name, model, manufacturer, vehicle_class, passengers FROM vehicles ORDER BY id";
pub const GET_VEHICLE: &str =
    "SELECT id, name, model, manufacturer, vehicle_class, passengers FROM vehicles WHERE id = $1";

pub const LIST_USERS: &str = "SELECT id, email, password, is_active FROM users ORDER BY id";
pub const GET_USER: &str = "SELECT id, email, password, is_active FROM users WHERE id = $1";

pub const FAVORITE_CHARACTERS: &str = "SELECT c.id, c.name, c.gender, c.birth_year, c.height, c.eye_color, c.hair_color \
     FROM characters c JOIN favorite_characters f ON f.character_id = c.id \
     WHERE f.user_id = $1 ORDER BY c.id";
pub const FAVORITE_PLANETS: &str = "SELECT p.id, p.name, p.climate, p.terrain, p.population, p.diameter \
     FROM planets p JOIN favorite_planets f ON f.planet_id = p.id \
     WHERE f.user_id = $1 ORDER BY p.id";
pub const FAVORITE_VEHICLES: &str = "SELECT v.id, v.name, v.model, v.manufacturer, v.vehicle_class, v.passengers \
     FROM vehicles v JOIN favorite_vehicles f ON f.vehicle_id = v.id \
     WHERE f.user_id = $1 ORDER BY v.id";

pub fn entity_exists(kind: FavoriteKind) -> String {
    format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", kind.entity_table())
}

pub fn favorite_exists(kind: FavoriteKind) -> String {
    format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE user_id = $1 AND {} = $2)",
        kind.join_table(),
        kind.join_column()
    )
}

pub fn insert_favorite(kind: FavoriteKind) -> String {
    format!(
        "INSERT INTO {} (user_id, {}) VALUES ($1, $2)",
        kind.join_table(),
        kind.join_column()
    )
}

pub fn delete_favorite(kind: FavoriteKind) -> String {
    format!(
        "DELETE FROM {} WHERE user_id = $1 AND {} = $2",
        kind.join_table(),
        kind.join_column()
    )
}
