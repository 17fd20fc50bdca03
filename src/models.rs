//! Domain rows and their JSON forms.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Character {
    pub id: i32,
    pub name: String,
    pub gender: Option<String>,
    pub birth_year: Option<String>,
    pub height: Option<String>,
    pub eye_color: Option<String>,
    pub hair_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Planet {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Vehicle {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub vehicle_class: Option<String>,
    pub passengers: Option<String>,
}

/// A user row. The password is stored but never serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub is_active: bool,
}

/// A user together with every favorite, expanded inline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserFavorites {
    pub id: i32,
    pub email: String,
    pub is_active: bool,
    pub favorite_characters: Vec<Character>,
    pub favorite_planets: Vec<Planet>,
    pub favorite_vehicles: Vec<Vehicle>,
}

impl UserFavorites {
    pub fn new(user: User, favorites: FavoriteSet) -> Self {
        UserFavorites {
            id: user.id,
            email: user.email,
            is_active: user.is_active,
            favorite_characters: favorites.characters,
            favorite_planets: favorites.planets,
            favorite_vehicles: favorites.vehicles,
        }
    }
}

/// The three favorite collections of one user, each ordered by entity id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    pub characters: Vec<Character>,
    pub planets: Vec<Planet>,
    pub vehicles: Vec<Vehicle>,
}

/// Entity types a user can mark as favorite. Each maps to one join table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl FavoriteKind {
    pub const ALL: [FavoriteKind; 3] = [FavoriteKind::Character, FavoriteKind::Planet, FavoriteKind::Vehicle];

    /// Base table holding the entity rows.
    pub fn entity_table(self) -> &'static str {
        match self {
            FavoriteKind::Character => "characters",
            FavoriteKind::Planet => "planets",
            FavoriteKind::Vehicle => "vehicles",
        }
    }

    /// Join table linking users to this entity type.
    pub fn join_table(self) -> &'static str {
        match self {
            FavoriteKind::Character => "favorite_characters",
            FavoriteKind::Planet => "favorite_planets",
            FavoriteKind::Vehicle => "favorite_vehicles",
        }
    }

    /// Entity-side column of the join table.
    pub fn join_column(self) -> &'static str {
        match self {
            FavoriteKind::Character => "character_id",
            FavoriteKind::Planet => "planet_id",
            FavoriteKind::Vehicle => "vehicle_id",
        }
    }

    /// Capitalized singular name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            FavoriteKind::Character => "Character",
            FavoriteKind::Planet => "Planet",
            FavoriteKind::Vehicle => "Vehicle",
        }
    }

    pub fn not_found_message(self) -> String {
        format!("{} not found", self.label())
    }

    pub fn added_message(self) -> String {
        format!("Favorite {} added successfully", self.label().to_lowercase())
    }

    pub fn removed_message(self) -> String {
        format!("Favorite {} removed successfully", self.label().to_lowercase())
    }
}

impl std::fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entity_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_password_is_not_serialized() {
        let user = User {
            id: 1,
            email: "luke@rebellion.org".into(),
            password: "tatooine".into(),
            is_active: true,
        };
        let v = serde_json::to_value(&user).unwrap();
        assert_eq!(v, serde_json::json!({"id": 1, "email": "luke@rebellion.org", "is_active": true}));
    }

    #[test]
    fn favorites_view_nests_all_collections() {
        let user = User {
            id: 7,
            email: "leia@rebellion.org".into(),
            password: "alderaan".into(),
            is_active: true,
        };
        let set = FavoriteSet {
            planets: vec![Planet {
                id: 2,
                name: "Alderaan".into(),
                climate: Some("temperate".into()),
                terrain: None,
                population: None,
                diameter: None,
            }],
            ..FavoriteSet::default()
        };
        let v = serde_json::to_value(UserFavorites::new(user, set)).unwrap();
        assert_eq!(v["favorite_characters"], serde_json::json!([]));
        assert_eq!(v["favorite_planets"][0]["name"], "Alderaan");
        assert_eq!(v["favorite_vehicles"], serde_json::json!([]));
        assert!(v.get("password").is_none());
    }

    #[test]
    fn messages_follow_kind() {
        assert_eq!(FavoriteKind::Vehicle.not_found_message(), "Vehicle not found");
        assert_eq!(FavoriteKind::Character.added_message(), "Favorite character added successfully");
        assert_eq!(FavoriteKind::Planet.join_column(), "planet_id");
    }
}
