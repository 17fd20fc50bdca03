//! PostgreSQL store over a shared `PgPool`, plus database and table bootstrap.

use super::{Store, DUPLICATE_FAVORITE};
use crate::error::{AppError, ConfigError};
use crate::models::{Character, FavoriteKind, FavoriteSet, Planet, User, Vehicle};
use crate::sql::{queries, schema};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// SQLSTATE for unique_violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn list_characters(&self) -> Result<Vec<Character>, AppError> {
        Ok(sqlx::query_as(queries::LIST_CHARACTERS).fetch_all(&self.pool).await?)
    }

    async fn get_character(&self, id: i32) -> Result<Option<Character>, AppError> {
        Ok(sqlx::query_as(queries::GET_CHARACTER).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_planets(&self) -> Result<Vec<Planet>, AppError> {
        Ok(sqlx::query_as(queries::LIST_PLANETS).fetch_all(&self.pool).await?)
    }

    async fn get_planet(&self, id: i32) -> Result<Option<Planet>, AppError> {
        Ok(sqlx::query_as(queries::GET_PLANET).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        Ok(sqlx::query_as(queries::LIST_VEHICLES).fetch_all(&self.pool).await?)
    }

    async fn get_vehicle(&self, id: i32) -> Result<Option<Vehicle>, AppError> {
        Ok(sqlx::query_as(queries::GET_VEHICLE).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, AppError> {
        Ok(sqlx::query_as(queries::LIST_USERS).fetch_all(&self.pool).await?)
    }

    async fn get_user(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(sqlx::query_as(queries::GET_USER).bind(id).fetch_optional(&self.pool).await?)
    }

    async fn user_favorites(&self, user_id: i32) -> Result<FavoriteSet, AppError> {
        let characters = sqlx::query_as(queries::FAVORITE_CHARACTERS)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        let planets = sqlx::query_as(queries::FAVORITE_PLANETS)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        let vehicles = sqlx::query_as(queries::FAVORITE_VEHICLES)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(FavoriteSet {
            characters,
            planets,
            vehicles,
        })
    }

    async fn entity_exists(&self, kind: FavoriteKind, id: i32) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(&queries::entity_exists(kind))
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn favorite_exists(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(&queries::favorite_exists(kind))
            .bind(user_id)
            .bind(entity_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists.0)
    }

    async fn insert_favorite(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<(), AppError> {
        let result = sqlx::query(&queries::insert_favorite(kind))
            .bind(user_id)
            .bind(entity_id)
            .execute(&self.pool)
            .await;
        match result {
            Ok(_) => Ok(()),
            // A concurrent insert for the same pair won the race.
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(AppError::Conflict(DUPLICATE_FAVORITE.into()))
            }
            Err(e) => Err(AppError::Db(e)),
        }
    }

    async fn delete_favorite(&self, kind: FavoriteKind, user_id: i32, entity_id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(&queries::delete_favorite(kind))
            .bind(user_id)
            .bind(entity_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Create the entity and favorite tables if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in schema::all_ddl() {
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!("tables ensured");
    Ok(())
}

/// Connect to the `postgres` maintenance database and create the target database if missing.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the same server, and the target database name.
/// `None` when the URL names no database, or names `postgres` itself.
fn maintenance_target(url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(url).map_err(|_| {
        AppError::Config(ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        })
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
