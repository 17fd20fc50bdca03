//! Persistence seam. Handlers and services see only [`Store`]; the server wires in [`PgStore`].

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::{ensure_database_exists, ensure_tables, PgStore};

use crate::error::AppError;
use crate::models::{Character, FavoriteKind, FavoriteSet, Planet, User, Vehicle};
use async_trait::async_trait;

#[async_trait]
pub trait Store: Send + Sync + 'static {
    async fn list_characters(&self) -> Result<Vec<Character>, AppError>;
    async fn get_character(&self, id: i32) -> Result<Option<Character>, AppError>;

    async fn list_planets(&self) -> Result<Vec<Planet>, AppError>;
    async fn get_planet(&self, id: i32) -> Result<Option<Planet>, AppError>;

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError>;
    async fn get_vehicle(&self, id: i32) -> Result<Option<Vehicle>, AppError>;

    async fn list_users(&self) -> Result<Vec<User>, AppError>;
    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError>;

    /// Every favorite of the user, each collection ordered by entity id.
    async fn user_favorites(&self, user_id: i32) -> Result<FavoriteSet, AppError>;

    async fn entity_exists(&self, kind: FavoriteKind, id: i32) -> Result<bool, AppError>;

    async fn favorite_exists(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<bool, AppError>;

    /// Insert the join row. A row already present for the pair is `AppError::Conflict`.
    async fn insert_favorite(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<(), AppError>;

    /// Delete the join row. Returns false when no row existed.
    async fn delete_favorite(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<bool, AppError>;

    /// Liveness probe for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

pub(crate) const DUPLICATE_FAVORITE: &str = "Favorite already exists";
