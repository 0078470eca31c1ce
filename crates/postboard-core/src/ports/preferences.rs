use async_trait::async_trait;

/// Namespaced key-value preferences, persisted outside the database.
#[async_trait]
pub trait Preferences: Send + Sync {
    /// Read a boolean; `None` when the key was never written.
    async fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, PreferencesError>;

    /// Write a boolean, creating the namespace if needed.
    async fn set_bool(&self, namespace: &str, key: &str, value: bool)
    -> Result<(), PreferencesError>;
}

/// Preferences errors.
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Preferences I/O failed: {0}")]
    Io(String),

    #[error("Preferences are corrupt: {0}")]
    Serialization(String),

    #[error("Invalid preferences key: {0}")]
    InvalidKey(String),
}
