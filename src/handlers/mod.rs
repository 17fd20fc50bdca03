//! HTTP handlers for catalog reads, favorite mutations and service metadata.

pub mod entity;
pub mod favorite;
pub mod meta;
pub use entity::*;
pub use favorite::*;
pub use meta::*;
