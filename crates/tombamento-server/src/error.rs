//! API errors and their HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;
use tombamento_types::{ErrorBody, StoreError};
use tracing::{error, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Tombamento não encontrado")]
    TombamentoNotFound,

    #[error("Detalhes não encontrados")]
    DetalheNotFound,

    #[error("{0}")]
    Validation(#[from] StoreError),

    #[error("Rota não encontrada")]
    RouteNotFound { path: String, method: String },

    #[error("Erro interno do servidor")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::TombamentoNotFound
            | ApiError::DetalheNotFound
            | ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Unreadable bodies (bad JSON, wrong field types, over the size limit) are
/// internal errors, like any other failure while handling the request.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Internal(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = ErrorBody::new(self.to_string());

        match self {
            ApiError::RouteNotFound { path, method } => {
                body.path = Some(path);
                body.method = Some(method);
            }
            ApiError::Internal(message) => {
                error!("Internal error: {}", message);
                body.message = Some(message);
            }
            ApiError::TombamentoNotFound | ApiError::DetalheNotFound => {
                warn!("{}", body.error);
            }
            ApiError::Validation(_) => {}
        }

        (status, Json(body)).into_response()
    }
}

/// Response for a handler that panicked, used by the catch-panic layer.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    };

    ApiError::Internal(message).into_response()
}
