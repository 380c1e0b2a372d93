use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::env;

pub mod categories;
pub mod comments;
pub mod error;
pub mod profiles;
pub mod rating;
pub mod tags;
pub mod users;
pub mod views;
pub mod works;

pub use error::StoreError;

/// Create a SeaORM database connection pool from the `DATABASE_URL` env var.
pub async fn create_pool() -> DatabaseConnection {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    Database::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

/// Bring the schema up to date. The server runs this once at startup.
pub async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    Migrator::up(db, None).await
}
