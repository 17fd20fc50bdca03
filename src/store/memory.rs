//! In-process store for tests and embedding. Rows live in id-ordered maps behind one lock.

use super::{Store, DUPLICATE_FAVORITE};
use crate::error::AppError;
use crate::models::{Character, FavoriteKind, FavoriteSet, Planet, User, Vehicle};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Tables {
    users: BTreeMap<i32, User>,
    characters: BTreeMap<i32, Character>,
    planets: BTreeMap<i32, Planet>,
    vehicles: BTreeMap<i32, Vehicle>,
    /// (user_id, entity_id) pairs per kind.
    favorites: HashMap<FavoriteKind, BTreeSet<(i32, i32)>>,
}

impl Tables {
    fn contains(&self, kind: FavoriteKind, id: i32) -> bool {
        match kind {
            FavoriteKind::Character => self.characters.contains_key(&id),
            FavoriteKind::Planet => self.planets.contains_key(&id),
            FavoriteKind::Vehicle => self.vehicles.contains_key(&id),
        }
    }

    fn favorite_ids(&self, kind: FavoriteKind, user_id: i32) -> impl Iterator<Item = i32> + '_ {
        self.favorites
            .get(&kind)
            .into_iter()
            .flat_map(move |pairs| pairs.range((user_id, i32::MIN)..=(user_id, i32::MAX)))
            .map(|(_, entity_id)| *entity_id)
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, AppError> {
        self.tables.read().map_err(|_| AppError::Store("lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, AppError> {
        self.tables.write().map_err(|_| AppError::Store("lock poisoned".into()))
    }

    /// Insert or replace a user row.
    pub fn insert_user(&self, user: User) -> Result<(), AppError> {
        self.write()?.users.insert(user.id, user);
        Ok(())
    }

    pub fn insert_character(&self, character: Character) -> Result<(), AppError> {
        self.write()?.characters.insert(character.id, character);
        Ok(())
    }

    pub fn insert_planet(&self, planet: Planet) -> Result<(), AppError> {
        self.write()?.planets.insert(planet.id, planet);
        Ok(())
    }

    pub fn insert_vehicle(&self, vehicle: Vehicle) -> Result<(), AppError> {
        self.write()?.vehicles.insert(vehicle.id, vehicle);
        Ok(())
    }

    /// Number of join rows stored for the pair (0 or 1).
    pub fn favorite_count(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<usize, AppError> {
        let tables = self.read()?;
        Ok(tables
            .favorites
            .get(&kind)
            .map(|pairs| usize::from(pairs.contains(&(user_id, entity_id))))
            .unwrap_or(0))
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_characters(&self) -> Result<Vec<Character>, AppError> {
        Ok(self.read()?.characters.values().cloned().collect())
    }

    async fn get_character(&self, id: i32) -> Result<Option<Character>, AppError> {
        Ok(self.read()?.characters.get(&id).cloned())
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        Ok(self.read()?.planets.values().cloned().collect())
    }

    async fn get_planet(&self, id: i32) -> Result<Option<Planet>, AppError> {
        Ok(self.read()?.planets.get(&id).cloned())
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(self.read()?.vehicles.values().cloned().collect())
    }

    async fn get_vehicle(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        Ok(self.read()?.vehicles.get(&id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.users.values().cloned().collect())
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn user_favorites(&self, user_id: i32) -> Result<FavoriteSet, AppError> {
        let t = self.read()?;
        Ok(FavoriteSet {
            characters: t
                .favorite_ids(FavoriteKind::Character, user_id)
                .filter_map(|id| t.characters.get(&id).cloned())
                .collect(),
            planets: t
                .favorite_ids(FavoriteKind::Planet, user_id)
                .filter_map(|id| t.planets.get(&id).cloned())
                .collect(),
            vehicles: t
                .favorite_ids(FavoriteKind::Vehicle, user_id)
                .filter_map(|id| t.vehicles.get(&id).cloned())
                .collect(),
        })
    }

    async fn entity_exists(&self, kind: FavoriteKind, id: i32) -> Result<bool, AppError> {
        Ok(self.read()?.contains(kind, id))
    }

    async fn favorite_exists(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<bool, AppError> {
        Ok(self.favorite_count(kind, user_id, entity_id)? > 0)
    }

    async fn insert_favorite(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<(), AppError> {
        let mut t = self.write()?;
        if !t.favorites.entry(kind).or_default().insert((user_id, entity_id)) {
            return Err(AppError::Conflict(DUPLICATE_FAVORITE.into()));
        }
        Ok(())
    }

    async fn delete_favorite(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<bool, AppError> {
        let mut t = self.write()?;
        Ok(t
            .favorites
            .get_mut(&kind)
            .map(|pairs| pairs.remove(&(user_id, entity_id)))
            .unwrap_or(false))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }
}
