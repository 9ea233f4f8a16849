//! Task endpoints
//!
//! Handlers validate presence/type/enum here, then make exactly one
//! repository call. Station existence is NOT pre-validated; the foreign key
//! enforces it. Completion toggling is a caller-side read-then-patch, not an
//! atomic storage operation.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::json;

use crate::db::{Task, TaskRepo};
use crate::http::error::ApiError;
use crate::http::extractors::TaskId;
use crate::http::server::AppState;
use crate::models::date::utc_today;
use crate::models::{Priority, TaskDraft, TaskFilter, TaskPatch, TaskTitle, ValidationError};

/// Create task request
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub station_id: Option<i32>,
    pub title: Option<String>,
    pub details: Option<String>,
    pub priority: Option<String>,
    pub target_date: Option<String>,
    pub created_by: Option<String>,
}

/// Partial update request.
///
/// `details` distinguishes "absent" from "explicitly null": a present null
/// clears the column, an absent key skips it.
#[derive(Deserialize, Default)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub details: Option<Option<String>>,
    pub priority: Option<String>,
    pub target_date: Option<String>,
    pub is_done: Option<bool>,
}

/// Task response with the owning station's name joined in
#[derive(Serialize)]
pub struct TaskResponse {
    pub id: i32,
    pub station_id: i32,
    pub station_name: String,
    pub title: String,
    pub details: Option<String>,
    pub priority: String,
    pub target_date: NaiveDate,
    pub created_at: String,
    pub created_by: Option<String>,
    pub is_done: bool,
}

impl From<Task> for TaskResponse {
    fn from(t: Task) -> Self {
        Self {
            id: t.id,
            station_id: t.station_id,
            station_name: t.station_name,
            title: t.title,
            details: t.details,
            priority: t.priority,
            target_date: t.target_date,
            created_at: t.created_at.to_rfc3339(),
            created_by: t.created_by,
            is_done: t.is_done,
        }
    }
}

/// Deserialize a field where presence and null both matter:
/// outer None = absent key, Some(None) = explicit null.
fn double_option<'de, D>(de: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(de).map(Some)
}

/// Parse a calendar date from request input.
fn parse_target_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "target_date",
        reason: "expected a date in YYYY-MM-DD form",
    })
}

/// Trim free text, dropping values that are empty after the trim.
fn clean_optional(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

/// GET /tasks?station_id=&target_date=&is_done= - filtered listing
async fn list_tasks(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TaskFilter>,
) -> Result<Json<Vec<TaskResponse>>, ApiError> {
    let tasks = TaskRepo::new(&state.pool).list(&filter).await?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /tasks - create a task
async fn create_task(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<TaskResponse>), ApiError> {
    let station_id = req
        .station_id
        .ok_or(ValidationError::Missing { field: "station_id" })?;
    let title = TaskTitle::new(
        req.title
            .as_deref()
            .ok_or(ValidationError::Missing { field: "title" })?,
    )?;
    let priority = match req.priority.as_deref() {
        Some(raw) => Priority::parse(raw)?,
        None => Priority::default(),
    };
    let target_date = match req.target_date.as_deref() {
        Some(raw) => Some(parse_target_date(raw)?),
        None => None,
    };

    let draft = TaskDraft {
        station_id,
        title,
        details: clean_optional(req.details),
        priority,
        target_date,
        created_by: clean_optional(req.created_by),
    };

    let task = TaskRepo::new(&state.pool)
        .create(&draft, utc_today())
        .await?;

    Ok((StatusCode::CREATED, Json(TaskResponse::from(task))))
}

/// PATCH /tasks/{id} - partial update
async fn update_task(
    State(state): State<Arc<AppState>>,
    TaskId(id): TaskId,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<TaskResponse>, ApiError> {
    let priority = match req.priority.as_deref() {
        Some(raw) => Some(Priority::parse(raw)?),
        None => None,
    };
    let target_date = match req.target_date.as_deref() {
        Some(raw) => Some(parse_target_date(raw)?),
        None => None,
    };

    let patch = TaskPatch {
        title: req.title,
        details: req.details,
        priority,
        target_date,
        is_done: req.is_done,
    };

    let task = TaskRepo::new(&state.pool).update(id, &patch).await?;

    Ok(Json(TaskResponse::from(task)))
}

/// DELETE /tasks/{id} - idempotent delete
async fn delete_task(
    State(state): State<Arc<AppState>>,
    TaskId(id): TaskId,
) -> Result<Json<serde_json::Value>, ApiError> {
    TaskRepo::new(&state.pool).delete(id).await?;

    Ok(Json(json!({ "success": true })))
}

/// Task routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route("/tasks/{id}", patch(update_task).delete(delete_task))
}
