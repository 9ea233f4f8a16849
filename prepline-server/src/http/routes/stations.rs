//! Station endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::{Station, StationRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{StationName, ValidationError};

/// Create station request
#[derive(Deserialize)]
pub struct CreateStationRequest {
    pub name: Option<String>,
}

/// Station response
#[derive(Serialize)]
pub struct StationResponse {
    pub id: i32,
    pub name: String,
    pub created_at: String,
}

impl From<Station> for StationResponse {
    fn from(s: Station) -> Self {
        Self {
            id: s.id,
            name: s.name,
            created_at: s.created_at.to_rfc3339(),
        }
    }
}

/// GET /stations - all stations, ascending id
async fn list_stations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = StationRepo::new(&state.pool).list().await?;

    Ok(Json(
        stations.into_iter().map(StationResponse::from).collect(),
    ))
}

/// POST /stations - create a station
///
/// A duplicate name is not special-cased here: the UNIQUE constraint fires
/// and the client sees the generic storage error.
async fn create_station(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateStationRequest>,
) -> Result<(StatusCode, Json<StationResponse>), ApiError> {
    let raw = req
        .name
        .ok_or(ValidationError::Missing { field: "name" })?;
    let name = StationName::new(&raw)?;

    let station = StationRepo::new(&state.pool).create(name).await?;

    Ok((StatusCode::CREATED, Json(StationResponse::from(station))))
}

/// Station routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/stations", get(list_stations).post(create_station))
}
