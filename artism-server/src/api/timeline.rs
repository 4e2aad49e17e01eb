//! Timeline node CRUD endpoints

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

use artism_common::filter::TimelineFilter;
use artism_common::models::{NewTimelineNode, TimelineNode, TimelineNodeUpdate};

use crate::db;
use crate::{ApiError, ApiResult, AppState};

use super::PagedResponse;

/// Query parameters for timeline listing
#[derive(Debug, Default, Deserialize)]
pub struct TimelineListQuery {
    pub tag: Option<String>,
    pub min_year: Option<i64>,
    pub max_year: Option<i64>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl TimelineListQuery {
    fn filter(&self) -> TimelineFilter {
        TimelineFilter {
            tag: self.tag.clone(),
            min_year: self.min_year,
            max_year: self.max_year,
        }
    }
}

/// GET /api/v1/timeline
pub async fn list_nodes(
    State(state): State<AppState>,
    Query(query): Query<TimelineListQuery>,
) -> ApiResult<Response> {
    let nodes = db::timeline::list_nodes(&state.db).await?;
    let filter = query.filter();
    let matched = if filter.is_empty() {
        nodes
    } else {
        filter.apply(nodes)
    };

    match query.page {
        Some(page) => Ok(Json(PagedResponse::new(matched, page, query.page_size)).into_response()),
        None => Ok(Json(matched).into_response()),
    }
}

/// GET /api/v1/timeline/:id
pub async fn get_node(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<TimelineNode>> {
    let node = db::timeline::get_node(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Timeline node not found: {}", id)))?;

    Ok(Json(node))
}

/// POST /api/v1/timeline
pub async fn create_node(
    State(state): State<AppState>,
    Json(payload): Json<NewTimelineNode>,
) -> ApiResult<(StatusCode, Json<TimelineNode>)> {
    if payload.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Node title is required".to_string()));
    }

    let node = TimelineNode::from_new(payload);
    db::timeline::insert_node(&state.db, &node).await?;
    info!("Created timeline node {} ({})", node.title, node.guid);

    let stored = db::timeline::get_node(&state.db, node.guid)
        .await?
        .ok_or_else(|| ApiError::Internal("Node vanished after insert".to_string()))?;

    Ok((StatusCode::CREATED, Json(stored)))
}

/// PUT /api/v1/timeline/:id
pub async fn update_node(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TimelineNodeUpdate>,
) -> ApiResult<Json<TimelineNode>> {
    let mut node = db::timeline::get_node(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Timeline node not found: {}", id)))?;

    node.apply_update(payload);
    if node.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Node title cannot be empty".to_string()));
    }

    db::timeline::update_node(&state.db, &node).await?;

    let stored = db::timeline::get_node(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::Internal("Node vanished after update".to_string()))?;

    Ok(Json(stored))
}

/// DELETE /api/v1/timeline/:id
pub async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let deleted = db::timeline::delete_node(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("Timeline node not found: {}", id)));
    }

    info!("Deleted timeline node {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Build timeline routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/timeline", get(list_nodes).post(create_node))
        .route(
            "/api/v1/timeline/:id",
            get(get_node).put(update_node).delete(delete_node),
        )
}
