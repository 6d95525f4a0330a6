use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Serialize;

use crate::db::SqliteMatchStore;
use crate::error::{AppError, Result};
use crate::highlights::Highlights;
use crate::types::Digest;

#[derive(Clone)]
pub struct ApiState {
    pub highlights: Arc<Highlights<SqliteMatchStore>>,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/highlights/:date", get(get_highlights))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn get_health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn get_highlights(
    State(state): State<ApiState>,
    Path(date): Path<String>,
) -> Result<Json<Digest>> {
    let day = parse_day(&date)?;
    let digest = state
        .highlights
        .for_day(day)
        .await?
        .ok_or(AppError::NoActivity(day))?;
    Ok(Json(digest))
}

fn parse_day(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(date.to_string()))
}
