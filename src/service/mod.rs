//! Services between handlers and the store.

mod catalog;
mod favorites;
pub use catalog::CatalogService;
pub use favorites::FavoriteService;
