//! Event endpoints.
//!
//! - GET /events?areaId&date&type - list with conjunctive filters
//! - GET /events/:id - get one event
//! - POST /events - create (resolves `typeId`, does not validate `areaId`)
//! - PUT /events/:id - partial update
//! - DELETE /events/:id - delete, no cascade to registrations
//! - GET /events/types/all - the fixed type catalog

use crate::error::AppError;
use crate::extractors::AppJson;
use crate::metrics;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};
use tangomango_core::services::{EventFilter, EventPatch, NewEvent};
use tangomango_core::types::{datetime, Event, EventType};

// ============================================================================
// Request Types
// ============================================================================

/// Query parameters for listing events. All filters are optional and
/// combined with AND.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsQuery {
    /// Exact match on the owning area id
    #[serde(default)]
    pub area_id: Option<String>,
    /// Calendar-day filter, `YYYY-MM-DD`
    #[serde(default)]
    pub date: Option<String>,
    /// Exact match on the embedded type's id
    #[serde(default, rename = "type")]
    pub event_type: Option<String>,
}

/// Request to create an event.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    /// Event title (required)
    #[serde(default)]
    pub title: Option<String>,
    /// Event date, RFC 3339 or `YYYY-MM-DD` (required)
    #[serde(default, deserialize_with = "datetime::deserialize_flexible_opt")]
    pub date: Option<DateTime<Utc>>,
    /// Free-text start time (required)
    #[serde(default)]
    pub time: Option<String>,
    /// Venue name (required)
    #[serde(default)]
    pub venue: Option<String>,
    /// Owning area id (required, existence not checked)
    #[serde(default)]
    pub area_id: Option<String>,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional free-text price
    #[serde(default)]
    pub price: Option<String>,
    /// Catalog type id (required)
    #[serde(default)]
    pub type_id: Option<String>,
}

/// Request to update an event; absent fields keep their previous values.
///
/// `price` distinguishes "absent" (keep) from an explicit `null` (clear).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New date, RFC 3339 or `YYYY-MM-DD`
    #[serde(default, deserialize_with = "datetime::deserialize_flexible_opt")]
    pub date: Option<DateTime<Utc>>,
    /// New time
    #[serde(default)]
    pub time: Option<String>,
    /// New venue
    #[serde(default)]
    pub venue: Option<String>,
    /// New area id (existence not re-checked)
    #[serde(default)]
    pub area_id: Option<String>,
    /// New description; an explicit empty string clears it
    #[serde(default)]
    pub description: Option<String>,
    /// New price; `null` clears, absent keeps
    #[serde(default, deserialize_with = "deserialize_present")]
    pub price: Option<Option<String>>,
    /// New type id; must resolve against the catalog
    #[serde(default)]
    pub type_id: Option<String>,
}

/// Capture field presence: absent stays `None`, an explicit `null` becomes
/// `Some(None)`, a value becomes `Some(Some(..))`.
fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Handlers
// ============================================================================

/// List events, optionally filtered by area, calendar day, and type.
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<ApiResponse<Vec<Event>>>, AppError> {
    let date = query
        .date
        .as_deref()
        .map(parse_date_filter)
        .transpose()?;

    let events = state.events.list(&EventFilter {
        area_id: query.area_id,
        date,
        type_id: query.event_type,
    });
    let count = events.len();
    Ok(ApiResponse::with_count(events, count))
}

/// Get one event by id.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let event = state.events.get(&id)?;
    Ok(ApiResponse::ok(event))
}

/// Create an event.
pub async fn create_event(
    State(state): State<AppState>,
    AppJson(request): AppJson<CreateEventRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Event>>), AppError> {
    let created = state.events.create(NewEvent {
        title: request.title.unwrap_or_default(),
        date: request.date,
        time: request.time.unwrap_or_default(),
        venue: request.venue.unwrap_or_default(),
        area_id: request.area_id.unwrap_or_default(),
        description: request.description,
        price: request.price,
        type_id: request.type_id.unwrap_or_default(),
    })?;

    metrics::record_event_created();
    Ok(ApiResponse::created(created))
}

/// Partially update an event.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateEventRequest>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let updated = state.events.update(
        &id,
        EventPatch {
            title: request.title,
            date: request.date,
            time: request.time,
            venue: request.venue,
            area_id: request.area_id,
            description: request.description,
            price: request.price,
            type_id: request.type_id,
        },
    )?;
    Ok(ApiResponse::ok(updated))
}

/// Delete an event. Registrations referencing it are left in place.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Event>>, AppError> {
    let deleted = state.events.delete(&id)?;
    metrics::record_event_deleted();
    Ok(ApiResponse::ok(deleted))
}

/// List the fixed event-type catalog.
pub async fn list_event_types(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<EventType>>> {
    ApiResponse::ok(state.events.types())
}

fn parse_date_filter(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request(format!("Invalid date filter '{raw}': expected YYYY-MM-DD")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_distinguishes_null_price_from_absent() {
        let absent: UpdateEventRequest = serde_json::from_str(r#"{"title":"x"}"#).unwrap();
        assert_eq!(absent.price, None);

        let cleared: UpdateEventRequest = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert_eq!(cleared.price, Some(None));

        let set: UpdateEventRequest = serde_json::from_str(r#"{"price":"$10"}"#).unwrap();
        assert_eq!(set.price, Some(Some("$10".to_string())));
    }

    #[test]
    fn test_query_renames_type_parameter() {
        let query: ListEventsQuery =
            serde_json::from_str(r#"{"type":"milonga","areaId":"downtown"}"#).unwrap();
        assert_eq!(query.event_type.as_deref(), Some("milonga"));
        assert_eq!(query.area_id.as_deref(), Some("downtown"));
    }

    #[test]
    fn test_parse_date_filter_rejects_garbage() {
        assert!(parse_date_filter("2025-01-18").is_ok());
        assert!(parse_date_filter("18/01/2025").is_err());
    }
}
