//! Area endpoints.
//!
//! - GET /areas - list areas with derived event counts
//! - GET /areas/:id - get one area
//! - GET /areas/:id/events - area plus its events
//! - POST /areas - create area
//! - PUT /areas/:id - partial update
//! - DELETE /areas/:id - delete, refused while events reference the area

use crate::error::AppError;
use crate::extractors::AppJson;
use crate::metrics;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tangomango_core::services::{AreaEvents, AreaPatch, NewArea};
use tangomango_core::types::{Area, AreaWithEventCount};

// ============================================================================
// Request Types
// ============================================================================

/// Request to create an area.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAreaRequest {
    /// Area name (required)
    #[serde(default)]
    pub name: Option<String>,
    /// Area description (required)
    #[serde(default)]
    pub description: Option<String>,
    /// Optional image; a placeholder is used when omitted
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Request to update an area; absent fields keep their previous values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAreaRequest {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
    /// New image url
    #[serde(default)]
    pub image_url: Option<String>,
}

// ============================================================================
// Handlers
// ============================================================================

/// List all areas, each with a freshly computed event count.
pub async fn list_areas(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<AreaWithEventCount>>> {
    let areas = state.areas.list();
    let count = areas.len();
    ApiResponse::with_count(areas, count)
}

/// Get one area by id.
pub async fn get_area(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AreaWithEventCount>>, AppError> {
    let area = state.areas.get(&id)?;
    Ok(ApiResponse::ok(area))
}

/// Get an area together with all events that reference it.
pub async fn area_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<AreaEvents>>, AppError> {
    let area_events = state.areas.events_for(&id)?;
    Ok(ApiResponse::ok(area_events))
}

/// Create an area.
pub async fn create_area(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateAreaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AreaWithEventCount>>), AppError> {
    let created = state.areas.create(NewArea {
        name: request.name.unwrap_or_default(),
        description: request.description.unwrap_or_default(),
        image_url: request.image_url,
    })?;

    metrics::record_area_created();
    Ok(ApiResponse::created(created))
}

/// Partially update an area.
pub async fn update_area(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateAreaRequest>,
) -> Result<Json<ApiResponse<AreaWithEventCount>>, AppError> {
    let updated = state.areas.update(
        &id,
        AreaPatch {
            name: request.name,
            description: request.description,
            image_url: request.image_url,
        },
    )?;
    Ok(ApiResponse::ok(updated))
}

/// Delete an area, refused with a 400 while events still reference it.
pub async fn delete_area(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Area>>, AppError> {
    let deleted = state.areas.delete(&id)?;
    metrics::record_area_deleted();
    Ok(ApiResponse::ok(deleted))
}
