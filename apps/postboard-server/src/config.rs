//! Application configuration loaded from environment variables.

use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use directories::ProjectDirs;

use postboard_infra::auth::parse_accounts;
use postboard_infra::{DatabaseConfig, FirebaseConfig, PictureSourceConfig};

/// Where login attempts are verified.
#[derive(Clone)]
pub enum IdentityConfig {
    Firebase(FirebaseConfig),
    /// Email to Argon2 PHC hash.
    Local(HashMap<String, String>),
}

// Keep the API key and password hashes out of logs.
impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityConfig::Firebase(firebase) => f
                .debug_struct("Firebase")
                .field("api_key", &"***")
                .field("auth_url", &firebase.auth_url)
                .finish(),
            IdentityConfig::Local(accounts) => {
                let mut emails: Vec<&String> = accounts.keys().collect();
                emails.sort();
                f.debug_struct("Local").field("accounts", &emails).finish()
            }
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the default database file.
    pub data_dir: PathBuf,
    pub database: DatabaseConfig,
    pub pictures: PictureSourceConfig,
    /// Bound on every outbound HTTP request.
    pub http_timeout: Duration,
    pub preferences_dir: PathBuf,
    pub identity: IdentityConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = default_data_dir()?;

        let mut database = match env::var("DATABASE_URL") {
            Ok(url) => DatabaseConfig {
                url,
                ..DatabaseConfig::for_path(&data_dir.join("postboard.db"))
            },
            Err(_) => DatabaseConfig::for_path(&data_dir.join("postboard.db")),
        };
        database.max_connections = parse_or("DB_MAX_CONNECTIONS", database.max_connections);
        database.min_connections = parse_or("DB_MIN_CONNECTIONS", database.min_connections);

        let pictures = env::var("PICTURES_BASE_URL")
            .map(|base_url| PictureSourceConfig { base_url })
            .unwrap_or_default();

        let preferences_dir = env::var("PREFERENCES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.join("preferences"));

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or("PORT", 8080),
            data_dir,
            database,
            pictures,
            http_timeout: Duration::from_secs(parse_or("PICTURES_TIMEOUT_SECS", 30)),
            preferences_dir,
            identity: identity_from_env()?,
        })
    }
}

/// `FIREBASE_API_KEY` selects Firebase; otherwise `LOCAL_ACCOUNTS` is used.
fn identity_from_env() -> anyhow::Result<IdentityConfig> {
    if let Ok(api_key) = env::var("FIREBASE_API_KEY") {
        let mut firebase = FirebaseConfig::new(api_key);
        if let Ok(auth_url) = env::var("FIREBASE_AUTH_URL") {
            firebase.auth_url = auth_url;
        }
        return Ok(IdentityConfig::Firebase(firebase));
    }

    let raw = env::var("LOCAL_ACCOUNTS").unwrap_or_default();
    let accounts = parse_accounts(&raw)
        .map_err(anyhow::Error::msg)
        .context("Invalid LOCAL_ACCOUNTS")?;
    Ok(IdentityConfig::Local(accounts))
}

fn default_data_dir() -> anyhow::Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "postboard", "postboard")
        .context("No home directory to keep application data in")?;
    Ok(dirs.data_dir().to_path_buf())
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
