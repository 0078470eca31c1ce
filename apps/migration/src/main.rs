//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` (e.g. `sqlite://posts.db?mode=rwc`) like the server does.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    cli::run_cli(migration::Migrator).await;
}
