//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//! This crate contains the local post store, the preferences store and the
//! remote picture / identity integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `sqlite` - Durable post store on SQLite via SeaORM
//! - `http` - Remote picture listing and Firebase sign-in via reqwest
//! - `auth` - Local accounts verified with Argon2

pub mod database;
pub mod preferences;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::InMemoryPostStore;
pub use preferences::{FilePreferences, InMemoryPreferences};

#[cfg(feature = "sqlite")]
pub use database::{Database, DatabaseConfig, SqlitePostStore};

#[cfg(feature = "http")]
pub use http::{
    FirebaseConfig, FirebaseIdentityProvider, HttpPictureSource, InvalidUrl, PictureSourceConfig,
};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, LocalIdentityProvider};
