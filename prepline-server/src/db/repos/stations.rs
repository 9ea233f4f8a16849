//! Station repository
//!
//! Stations are created and listed, never updated; there is no delete
//! endpoint. Name uniqueness is enforced by the UNIQUE constraint: the
//! seeding path is conflict-tolerant, direct creation is not.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::StationName;

/// The stations every kitchen starts with.
const DEFAULT_STATIONS: [&str; 5] = ["Larder", "Hot", "Pastry", "Grill", "Misc"];

/// Station record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Station {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Station repository
pub struct StationRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StationRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all stations ordered by ascending id. No filtering, no
    /// pagination; a kitchen has a handful of stations.
    pub async fn list(&self) -> Result<Vec<Station>, DbError> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT id, name, created_at FROM stations ORDER BY id ASC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(stations)
    }

    /// Insert a station with a validated name.
    ///
    /// A duplicate name hits the UNIQUE constraint and surfaces as a plain
    /// storage error; direct creation does not special-case it.
    pub async fn create(&self, name: StationName) -> Result<Station, DbError> {
        let station = sqlx::query_as::<_, Station>(
            "INSERT INTO stations (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(station)
    }

    /// Ensure the default station list exists. Conflict-tolerant: a name
    /// that is already present is left alone, so re-running is a no-op.
    pub async fn seed_defaults(&self) -> Result<(), DbError> {
        for name in DEFAULT_STATIONS {
            sqlx::query("INSERT INTO stations (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
                .bind(name)
                .execute(self.pool)
                .await?;
        }

        tracing::info!("Default stations seeded");
        Ok(())
    }
}
