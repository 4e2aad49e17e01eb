//! artism-server library - REST API over the Artism collections
//!
//! Exposes the router and application state for integration testing.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod api;
pub mod db;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// CORS is permissive: the browser frontends are served from other origins.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::ui::serve_index))
        .merge(api::artists::routes())
        .merge(api::artworks::routes())
        .merge(api::movements::routes())
        .merge(api::timeline::routes())
        .merge(api::ai::routes())
        .merge(api::health::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
