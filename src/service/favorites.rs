//! Favorite mutations. Checks run in a fixed order: user, then entity, then the join row.

use crate::error::AppError;
use crate::models::FavoriteKind;
use crate::store::Store;

pub struct FavoriteService;

impl FavoriteService {
    async fn ensure_user_and_entity(
        store: &dyn Store,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<(), AppError> {
        if store.get_user(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".into()));
        }
        if !store.entity_exists(kind, entity_id).await? {
            return Err(AppError::NotFound(kind.not_found_message()));
        }
        Ok(())
    }

    /// Mark the entity as a favorite of the user. Returns the success message.
    ///
    /// The existence check and the insert are separate statements; a concurrent insert that slips
    /// between them is still reported as a conflict by the store's unique key.
    pub async fn add(store: &dyn Store, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<String, AppError> {
        Self::ensure_user_and_entity(store, kind, user_id, entity_id).await?;
        if store.favorite_exists(kind, user_id, entity_id).await? {
            return Err(AppError::Conflict("Favorite already exists".into()));
        }
        store.insert_favorite(kind, user_id, entity_id).await?;
        tracing::info!(user_id, entity_id, kind = %kind, "favorite added");
        Ok(kind.added_message())
    }

    /// Remove the favorite. A missing join row is not found, never a silent success.
    pub async fn remove(
        store: &dyn Store,
        kind: FavoriteKind,
        user_id: i32,
        entity_id: i32,
    ) -> Result<String, AppError> {
        Self::ensure_user_and_entity(store, kind, user_id, entity_id).await?;
        if !store.delete_favorite(kind, user_id, entity_id).await? {
            return Err(AppError::NotFound("Favorite not found".into()));
        }
        tracing::info!(user_id, entity_id, kind = %kind, "favorite removed");
        Ok(kind.removed_message())
    }
}
