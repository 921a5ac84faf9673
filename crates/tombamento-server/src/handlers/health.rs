//! Health and statistics

use crate::AppState;
use axum::{extract::State, Json};
use tombamento_types::{HealthReport, StatsReport};

pub async fn health(State(state): State<AppState>) -> Json<HealthReport> {
    Json(state.registry.health().await)
}

pub async fn stats(State(state): State<AppState>) -> Json<StatsReport> {
    Json(state.registry.stats().await)
}
