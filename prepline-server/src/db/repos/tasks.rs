//! Task repository
//!
//! The filter builder appends parameterized WHERE clauses for whichever
//! filters are present; the update builder does the same for the SET list.
//! Create and update return the full record with the owning station's name
//! via an insert/update-returning CTE joined to `stations`, so handlers
//! never issue a second query.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::date::day_after;
use crate::models::{TaskDraft, TaskFilter, TaskPatch};

/// Task record joined with its owning station's name.
///
/// `priority` is kept as the stored string; the CHECK constraint restricts
/// it to `normal`/`high`, and incoming values are validated as
/// [`crate::models::Priority`] before they reach a query.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i32,
    pub station_id: i32,
    pub station_name: String,
    pub title: String,
    pub details: Option<String>,
    pub priority: String,
    pub target_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub created_by: Option<String>,
    pub is_done: bool,
}

/// Column list shared by the create/update CTE selects.
const TASK_COLUMNS: &str = r#"
    t.id,
    t.station_id,
    s.name AS station_name,
    t.title,
    t.details,
    t.priority,
    t.target_date,
    t.created_at,
    t.created_by,
    t.is_done
"#;

/// Task repository
pub struct TaskRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TaskRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List tasks with optional filters, AND-combined.
    ///
    /// Ordering is a design commitment: `high` priority first regardless of
    /// filter combination, then ascending creation time within each group so
    /// the oldest work surfaces first.
    pub async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>, DbError> {
        let mut sql = format!(
            "SELECT {TASK_COLUMNS} FROM tasks t JOIN stations s ON s.id = t.station_id\n"
        );

        let mut conditions: Vec<String> = Vec::new();
        let mut param = 1;
        if filter.station_id.is_some() {
            conditions.push(format!("t.station_id = ${param}"));
            param += 1;
        }
        if filter.target_date.is_some() {
            conditions.push(format!("t.target_date = ${param}"));
            param += 1;
        }
        if filter.is_done.is_some() {
            conditions.push(format!("t.is_done = ${param}"));
        }

        if !conditions.is_empty() {
            sql.push_str("WHERE ");
            sql.push_str(&conditions.join(" AND "));
            sql.push('\n');
        }

        sql.push_str(
            "ORDER BY CASE WHEN t.priority = 'high' THEN 0 ELSE 1 END, t.created_at ASC",
        );

        let mut query = sqlx::query_as::<_, Task>(&sql);
        if let Some(station_id) = filter.station_id {
            query = query.bind(station_id);
        }
        if let Some(target_date) = filter.target_date {
            query = query.bind(target_date);
        }
        if let Some(is_done) = filter.is_done {
            query = query.bind(is_done);
        }

        Ok(query.fetch_all(self.pool).await?)
    }

    /// Insert a task, defaulting the target date to the day after `today`.
    ///
    /// Station existence is enforced by the foreign key at insert time, not
    /// pre-checked. Returns the fully populated record.
    pub async fn create(&self, draft: &TaskDraft, today: NaiveDate) -> Result<Task, DbError> {
        let target_date = draft.target_date.unwrap_or_else(|| day_after(today));

        let sql = format!(
            r#"
            WITH t AS (
                INSERT INTO tasks (station_id, title, details, priority, target_date, created_by)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, station_id, title, details, priority,
                          target_date, created_at, created_by, is_done
            )
            SELECT {TASK_COLUMNS} FROM t JOIN stations s ON s.id = t.station_id
            "#
        );

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(draft.station_id)
            .bind(draft.title.as_str())
            .bind(draft.details.as_deref())
            .bind(draft.priority.as_str())
            .bind(target_date)
            .bind(draft.created_by.as_deref())
            .fetch_one(self.pool)
            .await?;

        Ok(task)
    }

    /// Apply a partial update: present fields are set (even to empty or
    /// false), absent fields are left untouched.
    ///
    /// Fails with [`DbError::EmptyUpdate`] before touching storage when the
    /// patch has no fields, and with [`DbError::NotFound`] when `id` matches
    /// no row.
    pub async fn update(&self, id: i32, patch: &TaskPatch) -> Result<Task, DbError> {
        if patch.is_empty() {
            return Err(DbError::EmptyUpdate);
        }

        let mut sets: Vec<String> = Vec::new();
        let mut param = 1;
        if patch.title.is_some() {
            sets.push(format!("title = ${param}"));
            param += 1;
        }
        if patch.details.is_some() {
            sets.push(format!("details = ${param}"));
            param += 1;
        }
        if patch.priority.is_some() {
            sets.push(format!("priority = ${param}"));
            param += 1;
        }
        if patch.target_date.is_some() {
            sets.push(format!("target_date = ${param}"));
            param += 1;
        }
        if patch.is_done.is_some() {
            sets.push(format!("is_done = ${param}"));
            param += 1;
        }

        let sql = format!(
            r#"
            WITH t AS (
                UPDATE tasks SET {sets} WHERE id = ${param}
                RETURNING id, station_id, title, details, priority,
                          target_date, created_at, created_by, is_done
            )
            SELECT {TASK_COLUMNS} FROM t JOIN stations s ON s.id = t.station_id
            "#,
            sets = sets.join(", "),
        );

        let mut query = sqlx::query_as::<_, Task>(&sql);
        if let Some(title) = &patch.title {
            query = query.bind(title.as_str());
        }
        if let Some(details) = &patch.details {
            query = query.bind(details.as_deref());
        }
        if let Some(priority) = patch.priority {
            query = query.bind(priority.as_str());
        }
        if let Some(target_date) = patch.target_date {
            query = query.bind(target_date);
        }
        if let Some(is_done) = patch.is_done {
            query = query.bind(is_done);
        }
        query = query.bind(id);

        query
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "task",
                id: id.to_string(),
            })
    }

    /// Delete a task. Idempotent: a nonexistent id affects zero rows and is
    /// not an error, unlike update.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
