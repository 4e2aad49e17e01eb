//! Artwork CRUD endpoints

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

use artism_common::models::{Artwork, ArtworkUpdate, NewArtwork};

use crate::db;
use crate::{ApiError, ApiResult, AppState};

use super::PagedResponse;

/// Query parameters for artwork listing
#[derive(Debug, Default, Deserialize)]
pub struct ArtworkListQuery {
    /// Restrict to artworks referencing this artist
    pub artist_id: Option<Uuid>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// GET /api/v1/artworks
pub async fn list_artworks(
    State(state): State<AppState>,
    Query(query): Query<ArtworkListQuery>,
) -> ApiResult<Response> {
    let artworks = match query.artist_id {
        Some(artist_id) => db::artworks::list_artworks_by_artist(&state.db, artist_id).await?,
        None => db::artworks::list_artworks(&state.db).await?,
    };

    match query.page {
        Some(page) => Ok(Json(PagedResponse::new(artworks, page, query.page_size)).into_response()),
        None => Ok(Json(artworks).into_response()),
    }
}

/// GET /api/v1/artworks/:id
pub async fn get_artwork(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Artwork>> {
    let artwork = db::artworks::get_artwork(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artwork not found: {}", id)))?;

    Ok(Json(artwork))
}

/// POST /api/v1/artworks
///
/// artist_id is stored as supplied; its existence is not checked.
pub async fn create_artwork(
    State(state): State<AppState>,
    Json(payload): Json<NewArtwork>,
) -> ApiResult<(StatusCode, Json<Artwork>)> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Artwork title is required".to_string()));
    }

    let artwork = Artwork::from_new(payload);
    db::artworks::insert_artwork(&state.db, &artwork).await?;
    info!("Created artwork {} ({})", artwork.title, artwork.guid);

    let stored = db::artworks::get_artwork(&state.db, artwork.guid)
        .await?
        .ok_or_else(|| ApiError::Internal("Artwork vanished after insert".to_string()))?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/v1/artworks/:id
pub async fn update_artwork(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArtworkUpdate>,
) -> ApiResult<Json<Artwork>> {
    let mut artwork = db::artworks::get_artwork(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artwork not found: {}", id)))?;

    artwork.apply_update(payload);
    if artwork.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Artwork title cannot be empty".to_string()));
    }

    db::artworks::update_artwork(&state.db, &artwork).await?;

    let stored = db::artworks::get_artwork(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::Internal("Artwork vanished after update".to_string()))?;

    Ok(Json(stored))
}

/// DELETE /api/v1/artworks/:id
pub async fn delete_artwork(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = db::artworks::delete_artwork(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Artwork not found: {}", id)));
    }

    info!("Deleted artwork {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Build artwork routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/artworks", get(list_artworks).post(create_artwork))
        .route(
            "/api/v1/artworks/:id",
            get(get_artwork).put(update_artwork).delete(delete_artwork),
        )
}
