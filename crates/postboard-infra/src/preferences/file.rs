//! File-backed preferences: one JSON object per namespace.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use postboard_core::ports::{Preferences, PreferencesError};

/// Preferences stored as `<dir>/<namespace>.json`.
///
/// Writes are serialized and replace the file atomically (temp file plus
/// rename), so a crash never leaves a truncated document behind.
pub struct FilePreferences {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferences {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, namespace: &str) -> Result<PathBuf, PreferencesError> {
        let valid = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PreferencesError::InvalidKey(namespace.to_string()));
        }
        Ok(self.dir.join(format!("{namespace}.json")))
    }

    async fn read_namespace(&self, path: &Path) -> Result<Map<String, Value>, PreferencesError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(PreferencesError::Io(e.to_string())),
        };

        match serde_json::from_slice(&bytes) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(PreferencesError::Serialization(format!(
                "{} is not a JSON object",
                path.display()
            ))),
            Err(e) => Err(PreferencesError::Serialization(e.to_string())),
        }
    }
}

#[async_trait]
impl Preferences for FilePreferences {
    async fn get_bool(&self, namespace: &str, key: &str) -> Result<Option<bool>, PreferencesError> {
        let path = self.path_for(namespace)?;
        let values = self.read_namespace(&path).await?;

        match values.get(key) {
            None => Ok(None),
            Some(Value::Bool(value)) => Ok(Some(*value)),
            Some(other) => Err(PreferencesError::Serialization(format!(
                "{namespace}.{key} is not a boolean: {other}"
            ))),
        }
    }

    async fn set_bool(
        &self,
        namespace: &str,
        key: &str,
        value: bool,
    ) -> Result<(), PreferencesError> {
        let path = self.path_for(namespace)?;
        let _guard = self.write_lock.lock().await;

        let mut values = self.read_namespace(&path).await?;
        values.insert(key.to_string(), Value::Bool(value));

        let body = serde_json::to_vec_pretty(&Value::Object(values))
            .map_err(|e| PreferencesError::Serialization(e.to_string()))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PreferencesError::Io(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| PreferencesError::Io(e.to_string()))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| PreferencesError::Io(e.to_string()))?;

        tracing::debug!(namespace, key, value, "Preference written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use postboard_core::services::AuthFlagStore;

    #[tokio::test]
    async fn test_missing_file_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path());

        assert_eq!(prefs.get_bool("auth", "authenticated").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_flag_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let flags = AuthFlagStore::new(Arc::new(FilePreferences::new(dir.path())));
        assert!(!flags.is_remembered().await);
        flags.remember().await.unwrap();
        assert!(flags.is_remembered().await);

        // simulated restart
        let flags = AuthFlagStore::new(Arc::new(FilePreferences::new(dir.path())));
        assert!(flags.is_remembered().await);
        flags.forget().await.unwrap();

        let flags = AuthFlagStore::new(Arc::new(FilePreferences::new(dir.path())));
        assert!(!flags.is_remembered().await);
    }

    #[tokio::test]
    async fn test_keys_in_same_namespace_are_kept() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path().join("nested"));

        prefs.set_bool("auth", "authenticated", true).await.unwrap();
        prefs.set_bool("auth", "onboarded", false).await.unwrap();

        assert_eq!(
            prefs.get_bool("auth", "authenticated").await.unwrap(),
            Some(true)
        );
        assert_eq!(prefs.get_bool("auth", "onboarded").await.unwrap(), Some(false));
        assert!(dir.path().join("nested/auth.json").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("auth.json"), b"{not json").unwrap();
        let prefs = Arc::new(FilePreferences::new(dir.path()));

        assert!(matches!(
            prefs.get_bool("auth", "authenticated").await,
            Err(PreferencesError::Serialization(_))
        ));
        // the flag store treats unreadable preferences as logged out
        assert!(!AuthFlagStore::new(prefs).is_remembered().await);
    }

    #[tokio::test]
    async fn test_namespace_cannot_escape_directory() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = FilePreferences::new(dir.path());

        assert!(matches!(
            prefs.set_bool("../auth", "authenticated", true).await,
            Err(PreferencesError::InvalidKey(_))
        ));
    }
}
