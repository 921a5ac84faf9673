//! Detalhe handlers

use super::body_or_default;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tombamento_types::{parse_batch, BatchSummary, Detalhe};

/// Static segment of `POST /detalhes/batch`; a GET on it is a lookup of that code
pub const BATCH: &str = "batch";

pub async fn list(State(state): State<AppState>) -> Json<Vec<Detalhe>> {
    Json(state.registry.list_detalhes().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Detalhe>, ApiError> {
    lookup(&state, &code).await
}

pub async fn get_batch(State(state): State<AppState>) -> Result<Json<Detalhe>, ApiError> {
    lookup(&state, BATCH).await
}

async fn lookup(state: &AppState, code: &str) -> Result<Json<Detalhe>, ApiError> {
    state
        .registry
        .detalhe(code)
        .await
        .map(Json)
        .ok_or(ApiError::DetalheNotFound)
}

pub async fn upsert(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Detalhe>), ApiError> {
    let body = body_or_default(payload)?;
    let detalhe = Detalhe::try_from(body)?;

    let saved = state.registry.upsert_detalhe(detalhe).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn batch(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<BatchSummary>), ApiError> {
    let body = body_or_default(payload)?;
    let detalhes = parse_batch(body)?;

    let summary = state.registry.upsert_detalhes(detalhes).await;
    Ok((StatusCode::CREATED, Json(summary)))
}
