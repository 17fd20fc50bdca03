//! Read side: collection listings, single lookups and the user favorites view.

use crate::error::AppError;
use crate::models::{Character, Planet, User, UserFavorites, Vehicle};
use crate::store::Store;

pub struct CatalogService;

/// An empty collection is reported as not found rather than as `[]`.
fn non_empty<T>(rows: Vec<T>, message: &str) -> Result<Vec<T>, AppError> {
    if rows.is_empty() {
        return Err(AppError::NotFound(message.into()));
    }
    Ok(rows)
}

impl CatalogService {
    pub async fn list_characters(store: &dyn Store) -> Result<Vec<Character>, AppError> {
        non_empty(store.list_characters().await?, "Characters not found")
    }

    pub async fn get_character(store: &dyn Store, id: i32) -> Result<Character, AppError> {
        store
            .get_character(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Character not found".into()))
    }

    pub async fn list_planets(store: &dyn Store) -> Result<Vec<Planet>, AppError> {
        non_empty(store.list_planets().await?, "Planets not found")
    }

    pub async fn get_planet(store: &dyn Store, id: i32) -> Result<Planet, AppError> {
        store
            .get_planet(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Planet not found".into()))
    }

    pub async fn list_vehicles(store: &dyn Store) -> Result<Vec<Vehicle>, AppError> {
        non_empty(store.list_vehicles().await?, "Vehicles not found")
    }

    pub async fn get_vehicle(store: &dyn Store, id: i32) -> Result<Vehicle, AppError> {
        store
            .get_vehicle(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".into()))
    }

    pub async fn list_users(store: &dyn Store) -> Result<Vec<User>, AppError> {
        non_empty(store.list_users().await?, "Users not found")
    }

    pub async fn user_favorites(store: &dyn Store, user_id: i32) -> Result<UserFavorites, AppError> {
        let user = store
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".into()))?;
        let favorites = store.user_favorites(user_id).await?;
        Ok(UserFavorites::new(user, favorites))
    }
}
