pub mod id;
pub use id::IdPath;
