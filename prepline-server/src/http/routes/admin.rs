//! One-shot administrative endpoint
//!
//! Creates the schema and seeds the default stations. Idempotent: both steps
//! are conflict-tolerant, so hitting it repeatedly is harmless.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::db::{migrations, StationRepo};
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Init response
#[derive(Serialize)]
pub struct InitResponse {
    pub success: bool,
    pub message: &'static str,
}

/// GET /init - create tables and seed stations
async fn init(State(state): State<Arc<AppState>>) -> Result<Json<InitResponse>, ApiError> {
    migrations::run(&state.pool).await?;
    StationRepo::new(&state.pool).seed_defaults().await?;

    Ok(Json(InitResponse {
        success: true,
        message: "database initialized and stations seeded",
    }))
}

/// Admin routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/init", get(init))
}
