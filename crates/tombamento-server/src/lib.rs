//! Tombamento Server
//!
//! JSON-over-HTTP API for tombamentos (asset tags with a status) and their
//! detalhes, kept in memory and mirrored to a single JSON file.

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;
pub mod storage;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::ServerConfig;
use handlers::{detalhes, not_found, tombamentos};
use services::Registry;
use storage::JsonFileStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

impl AppState {
    /// Load the data file named by `config` into a fresh registry
    pub async fn open(config: &ServerConfig) -> Self {
        let storage = JsonFileStore::new(&config.data_file);
        Self {
            registry: Arc::new(Registry::open(storage).await),
        }
    }
}

/// Endpoint list printed at startup
pub const ENDPOINTS: &[&str] = &[
    "GET    /health",
    "GET    /stats",
    "GET    /tombamentos",
    "GET    /tombamentos/:code",
    "POST   /tombamentos",
    "PUT    /tombamentos/:code",
    "DELETE /tombamentos/:code",
    "DELETE /tombamentos/all",
    "GET    /detalhes",
    "GET    /detalhes/:code",
    "POST   /detalhes",
    "POST   /detalhes/batch",
];

pub fn router(state: AppState, config: &ServerConfig) -> Router {
    with_layers(routes(), config).with_state(state)
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health).fallback(not_found))
        .route("/stats", get(handlers::stats).fallback(not_found))
        .route(
            "/tombamentos",
            get(tombamentos::list)
                .post(tombamentos::upsert)
                .fallback(not_found),
        )
        .route(
            "/tombamentos/:code",
            get(tombamentos::get)
                .put(tombamentos::update)
                .delete(tombamentos::delete)
                .fallback(not_found),
        )
        .route(
            "/detalhes",
            get(detalhes::list).post(detalhes::upsert).fallback(not_found),
        )
        .route(
            "/detalhes/batch",
            get(detalhes::get_batch)
                .post(detalhes::batch)
                .fallback(not_found),
        )
        .route("/detalhes/:code", get(detalhes::get).fallback(not_found))
        .fallback(not_found)
}

/// Body limit, panic recovery, CORS and request tracing around `router`
pub fn with_layers(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    router
        .layer(DefaultBodyLimit::max(config.body_limit))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
