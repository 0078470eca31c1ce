//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use postboard_core::domain::LoginState;
use postboard_core::ports::{
    Clock, IdentityProvider, PictureSource, PostStore, Preferences, SystemClock,
};
use postboard_core::services::{
    AuthFlagStore, LoginFlow, PictureCache, PostEditor, PostRepository,
};
use postboard_infra::auth::{Argon2PasswordService, LocalIdentityProvider};
use postboard_infra::http::build_client;
use postboard_infra::{
    Database, FilePreferences, FirebaseIdentityProvider, HttpPictureSource, InMemoryPostStore,
    InMemoryPreferences, SqlitePostStore,
};

use crate::config::{AppConfig, IdentityConfig};

/// Shared application state.
///
/// Everything is composed once in [`AppState::build`]; handlers only hold
/// clones of the `Arc`s.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostRepository>,
    pub editor: Arc<PostEditor>,
    pub pictures: Arc<PictureCache>,
    pub login: Arc<LoginFlow>,
    db: Option<Arc<Database>>,
}

/// The ports the state holders are built on.
pub struct Adapters {
    pub store: Arc<dyn PostStore>,
    pub clock: Arc<dyn Clock>,
    pub source: Arc<dyn PictureSource>,
    pub identity: Arc<dyn IdentityProvider>,
    pub preferences: Arc<dyn Preferences>,
}

impl AppState {
    /// Build the application state from configuration.
    ///
    /// A database that cannot be opened is not fatal: posts are then kept in
    /// memory for the lifetime of the process.
    pub async fn build(config: &AppConfig) -> anyhow::Result<Self> {
        if let Err(e) = tokio::fs::create_dir_all(&config.data_dir).await {
            tracing::warn!(error = %e, dir = %config.data_dir.display(), "Cannot create data directory");
        }

        let (db, store): (Option<Arc<Database>>, Arc<dyn PostStore>) =
            match Database::connect(&config.database).await {
                Ok(db) => {
                    let store: Arc<dyn PostStore> = Arc::new(SqlitePostStore::new(db.conn().clone()));
                    (Some(Arc::new(db)), store)
                }
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        "Failed to open post database. Using in-memory fallback."
                    );
                    (None, Arc::new(InMemoryPostStore::new()))
                }
            };

        let client = build_client(config.http_timeout)?;
        let source = Arc::new(
            HttpPictureSource::new(client.clone(), &config.pictures)
                .context("Invalid PICTURES_BASE_URL")?,
        );

        let identity: Arc<dyn IdentityProvider> = match &config.identity {
            IdentityConfig::Firebase(firebase) => {
                tracing::info!(auth_url = %firebase.auth_url, "Signing in through Firebase");
                Arc::new(FirebaseIdentityProvider::new(client, firebase.clone()))
            }
            IdentityConfig::Local(accounts) => {
                if accounts.is_empty() {
                    tracing::warn!("No identity provider configured; every login will be rejected");
                }
                let provider = LocalIdentityProvider::new(
                    accounts.clone(),
                    Arc::new(Argon2PasswordService::new()),
                );
                tracing::info!(accounts = provider.account_count(), "Signing in against local accounts");
                Arc::new(provider)
            }
        };

        let preferences: Arc<dyn Preferences> =
            match tokio::fs::create_dir_all(&config.preferences_dir).await {
                Ok(()) => Arc::new(FilePreferences::new(&config.preferences_dir)),
                Err(e) => {
                    tracing::error!(
                        error = %e,
                        dir = %config.preferences_dir.display(),
                        "Cannot create preferences directory. Remember me will not survive restarts."
                    );
                    Arc::new(InMemoryPreferences::new())
                }
            };

        let adapters = Adapters {
            store,
            clock: Arc::new(SystemClock),
            source,
            identity,
            preferences,
        };

        Ok(Self::assemble(adapters, db).await)
    }

    /// Wire the services on top of `adapters` and restore a remembered login.
    pub async fn assemble(adapters: Adapters, db: Option<Arc<Database>>) -> Self {
        let posts = Arc::new(PostRepository::new(adapters.store, adapters.clock));
        let editor = Arc::new(PostEditor::new(Arc::clone(&posts)));
        let pictures = Arc::new(PictureCache::new(adapters.source));
        let login = Arc::new(LoginFlow::new(
            adapters.identity,
            AuthFlagStore::new(adapters.preferences),
        ));

        let restored = login.restore().await;
        tracing::info!(
            state = restored.as_str(),
            durable = db.is_some(),
            "Application state initialized"
        );

        Self {
            posts,
            editor,
            pictures,
            login,
            db,
        }
    }

    pub fn is_durable(&self) -> bool {
        self.db.is_some()
    }

    pub fn login_state(&self) -> LoginState {
        self.login.state()
    }

    /// Release the database file.
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db {
            if let Err(e) = db.close().await {
                tracing::warn!(error = %e, "Closing post database failed");
            }
        }
    }
}
