//! Preferences implementations - JSON files and in-memory fallback.

mod file;
mod memory;

pub use file::FilePreferences;
pub use memory::InMemoryPreferences;
