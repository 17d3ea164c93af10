//! Registration endpoints.
//!
//! - GET /registrations?eventId&email - list with filters
//! - GET /registrations/:id - get one registration
//! - POST /registrations - create (event must exist, duplicate pair refused)
//! - PUT /registrations/:id - partial update
//! - DELETE /registrations/:id - cancel (deletes the record)
//! - GET /registrations/event/:eventId/count - count plus listing

use crate::error::AppError;
use crate::extractors::AppJson;
use crate::metrics;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tangomango_core::services::{
    EventRegistrations, NewRegistration, RegistrationFilter, RegistrationPatch,
};
use tangomango_core::types::{Registration, RegistrationStatus};

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for listing registrations.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRegistrationsQuery {
    /// Exact match on the registered event id
    #[serde(default)]
    pub event_id: Option<String>,
    /// Case-insensitive substring match on the email
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to create a registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    /// Event to register for (required, must exist)
    #[serde(default)]
    pub event_id: Option<String>,
    /// Attendee name (required)
    #[serde(default)]
    pub name: Option<String>,
    /// Attendee email (required; stored lowercase)
    #[serde(default)]
    pub email: Option<String>,
    /// Optional phone number
    #[serde(default)]
    pub phone: Option<String>,
}

/// Request to update a registration; absent fields keep their previous
/// values. Status accepts any of the three enum values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New email (re-lowercased)
    #[serde(default)]
    pub email: Option<String>,
    /// New phone
    #[serde(default)]
    pub phone: Option<String>,
    /// New status
    #[serde(default)]
    pub status: Option<RegistrationStatus>,
}

// ============================================================================
// Handlers
// ============================================================================

/// List registrations, optionally filtered by event and email substring.
pub async fn list_registrations(
    State(state): State<AppState>,
    Query(query): Query<ListRegistrationsQuery>,
) -> Json<ApiResponse<Vec<Registration>>> {
    let registrations = state.registrations.list(&RegistrationFilter {
        event_id: query.event_id,
        email: query.email,
    });
    let count = registrations.len();
    ApiResponse::with_count(registrations, count)
}

/// Get one registration by id.
pub async fn get_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Registration>>, AppError> {
    let registration = state.registrations.get(&id)?;
    Ok(ApiResponse::ok(registration))
}

/// Create a registration. The referenced event must exist and the
/// `(eventId, email)` pair must be new (case-insensitive).
pub async fn create_registration(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateRegistrationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Registration>>), AppError> {
    let created = state.registrations.create(NewRegistration {
        event_id: request.event_id.unwrap_or_default(),
        name: request.name.unwrap_or_default(),
        email: request.email.unwrap_or_default(),
        phone: request.phone,
    })?;

    metrics::record_registration_created();
    Ok(ApiResponse::created(created))
}

/// Partially update a registration.
pub async fn update_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateRegistrationRequest>,
) -> Result<Json<ApiResponse<Registration>>, AppError> {
    let updated = state.registrations.update(
        &id,
        RegistrationPatch {
            name: request.name,
            email: request.email,
            phone: request.phone,
            status: request.status,
        },
    )?;
    Ok(ApiResponse::ok(updated))
}

/// Cancel a registration by deleting the record.
pub async fn delete_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Registration>>, AppError> {
    let deleted = state.registrations.delete(&id)?;
    metrics::record_registration_cancelled();
    Ok(ApiResponse::ok(deleted))
}

/// Count and list registrations for one event. Unknown event ids yield an
/// empty listing, not a 404.
pub async fn count_for_event(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Json<ApiResponse<EventRegistrations>> {
    ApiResponse::ok(state.registrations.count_for_event(&event_id))
}
