pub mod config;
pub mod models;
pub mod repositories;
pub mod schema;
pub mod store;

pub use store::PgStore;

use eyre::{Result, WrapErr};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};

use crate::config::DbConfig;

pub type DbPool = Pool<Postgres>;

pub async fn create_pool(config: &DbConfig) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
        .wrap_err("Failed to connect to the database")?;

    Ok(pool)
}
