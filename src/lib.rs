//! Star Wars API: read access to characters, planets, vehicles and users, plus per-user favorites.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use models::{Character, FavoriteKind, Planet, User, UserFavorites, Vehicle};
pub use routes::{app, router};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables, MemoryStore, PgStore, Store};
