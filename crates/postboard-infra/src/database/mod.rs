//! Local post storage.

mod memory;

#[cfg(feature = "sqlite")]
mod connections;
#[cfg(feature = "sqlite")]
pub mod entity;
#[cfg(feature = "sqlite")]
mod sqlite_store;

pub use memory::InMemoryPostStore;

#[cfg(feature = "sqlite")]
pub use connections::{Database, DatabaseConfig};
#[cfg(feature = "sqlite")]
pub use sqlite_store::SqlitePostStore;
