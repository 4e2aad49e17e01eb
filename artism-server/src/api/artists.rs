//! Artist CRUD endpoints

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

use artism_common::filter::ArtistFilter;
use artism_common::models::{Artist, ArtistUpdate, NewArtist};

use crate::db;
use crate::{ApiError, ApiResult, AppState};

use super::PagedResponse;

/// Query parameters for artist listing: optional filter predicates plus
/// optional pagination. Without `page` the full matching set is returned.
#[derive(Debug, Default, Deserialize)]
pub struct ArtistListQuery {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub movement: Option<String>,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl ArtistListQuery {
    fn filter(&self) -> ArtistFilter {
        ArtistFilter {
            name: self.name.clone(),
            nationality: self.nationality.clone(),
            movement: self.movement.clone(),
            min_year: self.min_year,
            max_year: self.max_year,
        }
    }
}

/// GET /api/v1/artists
///
/// Fetches the full collection, then applies filter predicates in memory.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ArtistListQuery>,
) -> ApiResult<Response> {
    let artists = db::artists::list_artists(&state.db).await?;
    let filter = query.filter();
    let matched = if filter.is_empty() {
        artists
    } else {
        filter.apply(artists)
    };

    match query.page {
        Some(page) => Ok(Json(PagedResponse::new(matched, page, query.page_size)).into_response()),
        None => Ok(Json(matched).into_response()),
    }
}

/// GET /api/v1/artists/:id
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Artist>> {
    let artist = db::artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artist not found: {}", id)))?;

    Ok(Json(artist))
}

/// POST /api/v1/artists
pub async fn create_artist(
    State(state): State<AppState>,
    Json(payload): Json<NewArtist>,
) -> ApiResult<(StatusCode, Json<Artist>)> {
    if payload.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Artist name is required".to_string()));
    }

    let artist = Artist::from_new(payload);
    db::artists::insert_artist(&state.db, &artist).await?;
    info!("Created artist {} ({})", artist.name, artist.guid);

    // Re-read so the response carries database-assigned timestamps
    let stored = db::artists::get_artist(&state.db, artist.guid)
        .await?
        .ok_or_else(|| ApiError::Internal("Artist vanished after insert".to_string()))?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/v1/artists/:id
///
/// Shallow merge: only fields present in the body are replaced.
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArtistUpdate>,
) -> ApiResult<Json<Artist>> {
    let mut artist = db::artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Artist not found: {}", id)))?;

    artist.apply_update(payload);
    if artist.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Artist name cannot be empty".to_string()));
    }

    db::artists::update_artist(&state.db, &artist).await?;

    let stored = db::artists::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::Internal("Artist vanished after update".to_string()))?;

    Ok(Json(stored))
}

/// DELETE /api/v1/artists/:id
///
/// Unconditional: artworks referencing this artist are left in place.
pub async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = db::artists::delete_artist(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Artist not found: {}", id)));
    }

    info!("Deleted artist {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Build artist routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/artists", get(list_artists).post(create_artist))
        .route(
            "/api/v1/artists/:id",
            get(get_artist).put(update_artist).delete(delete_artist),
        )
}
