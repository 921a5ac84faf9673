//! Tombamento handlers

use super::body_or_default;
use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tombamento_types::{StatusUpdate, Tombamento, TombamentoUpsert};

/// `DELETE /tombamentos/all` clears the collection instead of looking up a code
pub const CLEAR_ALL: &str = "all";

pub async fn list(State(state): State<AppState>) -> Json<Vec<Tombamento>> {
    Json(state.registry.list_tombamentos().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Tombamento>, ApiError> {
    state
        .registry
        .tombamento(&code)
        .await
        .map(Json)
        .ok_or(ApiError::TombamentoNotFound)
}

pub async fn upsert(
    State(state): State<AppState>,
    payload: Result<Json<TombamentoUpsert>, JsonRejection>,
) -> Result<(StatusCode, Json<Tombamento>), ApiError> {
    let req = body_or_default(payload)?;
    let tombamento = req.into_record()?;

    let saved = state.registry.upsert_tombamento(tombamento).await;
    Ok((StatusCode::CREATED, Json(saved)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    payload: Result<Json<StatusUpdate>, JsonRejection>,
) -> Result<Json<Tombamento>, ApiError> {
    let req = body_or_default(payload)?;

    state
        .registry
        .update_status(&code, req.status())
        .await
        .map(Json)
        .ok_or(ApiError::TombamentoNotFound)
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    if code == CLEAR_ALL {
        state.registry.clear_tombamentos().await;
        return Ok(StatusCode::NO_CONTENT);
    }

    if state.registry.remove_tombamento(&code).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::TombamentoNotFound)
    }
}
