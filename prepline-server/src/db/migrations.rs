//! Idempotent schema setup for the prep board
//!
//! Everything here is `IF NOT EXISTS`: running any number of times leaves the
//! schema in the same end state, before or after data exists. No destructive
//! statement (DROP/ALTER) is ever issued.

use sqlx::PgPool;

use super::repos::DbError;

/// Create both tables and both indexes.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema setup...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS stations (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL UNIQUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id SERIAL PRIMARY KEY,
            station_id INTEGER NOT NULL REFERENCES stations(id) ON DELETE CASCADE,
            title VARCHAR(255) NOT NULL,
            details TEXT,
            priority VARCHAR(10) NOT NULL DEFAULT 'normal'
                CHECK (priority IN ('normal', 'high')),
            target_date DATE NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            created_by VARCHAR(100),
            is_done BOOLEAN NOT NULL DEFAULT FALSE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the dominant query patterns: date-scoped and
    // station-scoped listing.
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_target_date ON tasks(target_date)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_tasks_station_id ON tasks(station_id)")
        .execute(pool)
        .await?;

    tracing::info!("Schema setup complete");
    Ok(())
}
