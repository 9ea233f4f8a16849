//! Mise en Place view
//!
//! A date-scoped, station-grouped listing of incomplete tasks, the shape the
//! printable prep sheet wants. Every station appears even when it has
//! nothing to do; tasks keep the listing order (high priority first, then
//! creation order).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use super::tasks::TaskResponse;
use crate::db::{StationRepo, TaskRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::date::{day_after, utc_today};
use crate::models::{TaskFilter, ValidationError};

/// One station's slice of the prep sheet
#[derive(Serialize)]
pub struct MepStation {
    pub id: i32,
    pub name: String,
    pub tasks: Vec<TaskResponse>,
}

/// Mise en Place response
#[derive(Serialize)]
pub struct MepResponse {
    pub target_date: NaiveDate,
    pub stations: Vec<MepStation>,
}

/// Resolve the path segment: a calendar date, or the `tomorrow` alias the
/// prep sheet is usually printed for.
fn resolve_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if raw == "tomorrow" {
        return Ok(day_after(utc_today()));
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidFormat {
        field: "date",
        reason: "expected a date in YYYY-MM-DD form, or 'tomorrow'",
    })
}

/// GET /mep/{date} - incomplete tasks for the date, grouped by station
async fn mep(
    State(state): State<Arc<AppState>>,
    Path(raw): Path<String>,
) -> Result<Json<MepResponse>, ApiError> {
    let target_date = resolve_date(&raw)?;

    let stations = StationRepo::new(&state.pool).list().await?;
    let filter = TaskFilter {
        target_date: Some(target_date),
        is_done: Some(false),
        ..Default::default()
    };
    let tasks = TaskRepo::new(&state.pool).list(&filter).await?;

    let stations = stations
        .into_iter()
        .map(|station| {
            let tasks = tasks
                .iter()
                .filter(|t| t.station_id == station.id)
                .cloned()
                .map(TaskResponse::from)
                .collect();
            MepStation {
                id: station.id,
                name: station.name,
                tasks,
            }
        })
        .collect();

    Ok(Json(MepResponse {
        target_date,
        stations,
    }))
}

/// Mise en Place routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/mep/{date}", get(mep))
}
