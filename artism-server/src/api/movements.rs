//! Art movement CRUD endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use artism_common::models::{ArtMovement, ArtMovementUpdate, NewArtMovement};

use crate::db;
use crate::{ApiError, ApiResult, AppState};

use super::PagedResponse;

/// Query parameters for movement listing
#[derive(Debug, Default, Deserialize)]
pub struct MovementListQuery {
    /// Case-insensitive substring match on name
    pub name: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /api/v1/movements
pub async fn list_movements(
    State(state): State<AppState>,
    Query(query): Query<MovementListQuery>,
) -> ApiResult<Response> {
    let mut movements = db::movements::list_movements(&state.db).await?;

    if let Some(name) = &query.name {
        let needle = name.to_lowercase();
        movements.retain(|m| m.name.to_lowercase().contains(&needle));
    }

    match query.page {
        Some(page) => {
            Ok(Json(PagedResponse::new(movements, page, query.page_size)).into_response())
        }
        None => Ok(Json(movements).into_response()),
    }
}

/// GET /api/v1/movements/:id
pub async fn get_movement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ArtMovement>> {
    let movement = db::movements::get_movement(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Art movement not found: {}", id)))?;

    Ok(Json(movement))
}

/// POST /api/v1/movements
pub async fn create_movement(
    State(state): State<AppState>,
    Json(payload): Json<NewArtMovement>,
) -> ApiResult<(StatusCode, Json<ArtMovement>)> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Movement name is required".to_string()));
    }

    let movement = ArtMovement::from_new(payload);
    db::movements::insert_movement(&state.db, &movement).await?;
    info!("Created art movement {} ({})", movement.name, movement.guid);

    let stored = db::movements::get_movement(&state.db, movement.guid)
        .await?
        .ok_or_else(|| ApiError::Internal("Movement vanished after insert".to_string()))?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/v1/movements/:id
pub async fn update_movement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArtMovementUpdate>,
) -> ApiResult<Json<ArtMovement>> {
    let mut movement = db::movements::get_movement(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Art movement not found: {}", id)))?;

    movement.apply_update(payload);
    if movement.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Movement name cannot be empty".to_string()));
    }

    db::movements::update_movement(&state.db, &movement).await?;

    let stored = db::movements::get_movement(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::Internal("Movement vanished after update".to_string()))?;

    Ok(Json(stored))
}

/// DELETE /api/v1/movements/:id
pub async fn delete_movement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = db::movements::delete_movement(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Art movement not found: {}", id)));
    }

    info!("Deleted art movement {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Build art movement routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/movements", get(list_movements).post(create_movement))
        .route(
            "/api/v1/movements/:id",
            get(get_movement).put(update_movement).delete(delete_movement),
        )
}
