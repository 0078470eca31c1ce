use std::path::Path;
use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, DbConn, DbErr};

/// Configuration for the local post database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SeaORM connection URL, e.g. `sqlite:///data/posts.db?mode=rwc`.
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// Database file at `path`, created on first open.
    pub fn for_path(path: &Path) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path.display()),
            max_connections: 5,
            min_connections: 1,
        }
    }
}

/// Open handle to the local database.
///
/// [`Database::connect`] is the single initialization point: it opens the
/// pool and brings the schema up to date. Call [`Database::close`] on
/// shutdown to release the file.
pub struct Database {
    conn: DbConn,
}

impl Database {
    /// Connect and run pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Opening post database...");

        let opts = ConnectOptions::new(config.url.clone())
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let conn = sea_orm::Database::connect(opts).await?;
        Migrator::up(&conn, None).await?;

        tracing::info!(
            pool = config.max_connections,
            "Post database ready"
        );

        Ok(Self { conn })
    }

    /// Connection pool shared by the stores built on this database.
    pub fn conn(&self) -> &DbConn {
        &self.conn
    }

    /// Close the pool; clones of [`Database::conn`] stop working too.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing post database");
        self.conn.clone().close().await
    }
}
