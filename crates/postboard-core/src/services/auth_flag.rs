use std::sync::Arc;

use crate::ports::{Preferences, PreferencesError};

/// Preferences namespace holding the login preference.
pub const AUTH_NAMESPACE: &str = "auth";
/// Key of the "stay logged in" flag.
pub const AUTHENTICATED_KEY: &str = "authenticated";

/// Locally persisted "remember me" flag. Stores no credentials.
#[derive(Clone)]
pub struct AuthFlagStore {
    preferences: Arc<dyn Preferences>,
}

impl AuthFlagStore {
    pub fn new(preferences: Arc<dyn Preferences>) -> Self {
        Self { preferences }
    }

    /// `false` when the flag was never written or cannot be read.
    pub async fn is_remembered(&self) -> bool {
        match self
            .preferences
            .get_bool(AUTH_NAMESPACE, AUTHENTICATED_KEY)
            .await
        {
            Ok(value) => value.unwrap_or(false),
            Err(e) => {
                tracing::warn!(error = %e, "Reading remember flag failed, assuming logged out");
                false
            }
        }
    }

    pub async fn remember(&self) -> Result<(), PreferencesError> {
        self.preferences
            .set_bool(AUTH_NAMESPACE, AUTHENTICATED_KEY, true)
            .await
    }

    pub async fn forget(&self) -> Result<(), PreferencesError> {
        self.preferences
            .set_bool(AUTH_NAMESPACE, AUTHENTICATED_KEY, false)
            .await
    }
}
