//! Router configuration.
//!
//! Builds the complete Axum router with all endpoints, the unmatched-route
//! fallback, and the middleware stack (correlation IDs, tracing, CORS).

use crate::handlers::{areas, events, health, registrations};
use crate::middleware::correlation_id_layer;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// Routes follow the public API contract:
/// - Health check
/// - Area CRUD (with the per-area event listing)
/// - Event CRUD, filtering, and the type catalog
/// - Registration CRUD, filtering, and the per-event count
///
/// Unmatched paths fall through to a 404 envelope.
#[must_use]
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Areas
        .route("/areas", get(areas::list_areas))
        .route("/areas", post(areas::create_area))
        .route("/areas/:id", get(areas::get_area))
        .route("/areas/:id", put(areas::update_area))
        .route("/areas/:id", delete(areas::delete_area))
        .route("/areas/:id/events", get(areas::area_events))
        // Events
        .route("/events", get(events::list_events))
        .route("/events", post(events::create_event))
        .route("/events/types/all", get(events::list_event_types))
        .route("/events/:id", get(events::get_event))
        .route("/events/:id", put(events::update_event))
        .route("/events/:id", delete(events::delete_event))
        // Registrations
        .route("/registrations", get(registrations::list_registrations))
        .route("/registrations", post(registrations::create_registration))
        .route("/registrations/:id", get(registrations::get_registration))
        .route("/registrations/:id", put(registrations::update_registration))
        .route(
            "/registrations/:id",
            delete(registrations::delete_registration),
        )
        .route(
            "/registrations/event/:eventId/count",
            get(registrations::count_for_event),
        )
        // Unmatched routes
        .fallback(route_not_found)
        // Middleware
        .layer(correlation_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// 404 envelope for unmatched routes.
async fn route_not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some("Route not found".to_string()),
            count: None,
        }),
    )
}
