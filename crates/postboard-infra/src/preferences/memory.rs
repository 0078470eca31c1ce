//! In-memory preferences - used in tests and when the preferences directory cannot be created.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::ports::{Preferences, PreferencesError};

/// Preferences held in a HashMap keyed by `(namespace, key)`.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPreferences {
    values: RwLock<HashMap<(String, String), bool>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Preferences for InMemoryPreferences {
    async fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, PreferencesError> {
        let values = self.values.read().await;
        Ok(values
            .get(&(namespace.to_string(), key.to_string()))
            .copied())
    }

    async fn set_bool(
        &self,
        namespace: &str,
        key: &str,
        value: bool,
    ) -> Result<(), PreferencesError> {
        let mut values = self.values.write().await;
        values.insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}
