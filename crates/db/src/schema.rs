use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Needed for the equality operator on classroom_id inside the gist exclusion constraint
    sqlx::query("CREATE EXTENSION IF NOT EXISTS btree_gist;")
        .execute(pool)
        .await?;

    // Create classrooms table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS classrooms (
            classroom_id SERIAL PRIMARY KEY,
            name VARCHAR(255) NOT NULL,
            classroom_type VARCHAR(32) NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT TRUE
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id SERIAL PRIMARY KEY,
            name_kor VARCHAR(255) NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create reservations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS reservations (
            reservation_id SERIAL PRIMARY KEY,
            classroom_id INTEGER REFERENCES classrooms(classroom_id) ON DELETE SET NULL,
            user_id INTEGER REFERENCES users(user_id) ON DELETE SET NULL,
            start_at TIMESTAMP NOT NULL,
            end_at TIMESTAMP NOT NULL,
            CONSTRAINT valid_time_range CHECK (end_at > start_at),
            CONSTRAINT no_overlapping_reservations EXCLUDE USING gist (
                classroom_id WITH =,
                tsrange(start_at, end_at, '[)') WITH &&
            )
        );
        "#,
    )
    .execute(pool)
    .await?;

    // One reservation per user per calendar day
    sqlx::query(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS uq_reservations_user_day
            ON reservations (user_id, (start_at::date));
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_reservations_classroom_id ON reservations(classroom_id);
        CREATE INDEX IF NOT EXISTS idx_reservations_start_at ON reservations(start_at);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
