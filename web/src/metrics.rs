//! API metrics.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `tangomango_areas_total{op}` - Area create/delete operations
//! - `tangomango_events_total{op}` - Event create/delete operations
//! - `tangomango_registrations_total{op}` - Registration create/cancel
//!   operations

use metrics::describe_counter;

/// Register metric descriptions.
///
/// Call once at application startup, before any metrics are recorded.
pub fn register_api_metrics() {
    describe_counter!(
        "tangomango_areas_total",
        "Total area mutations by operation (created, deleted)"
    );
    describe_counter!(
        "tangomango_events_total",
        "Total event mutations by operation (created, deleted)"
    );
    describe_counter!(
        "tangomango_registrations_total",
        "Total registration mutations by operation (created, cancelled)"
    );

    tracing::info!("API metrics registered");
}

/// Record an area creation.
pub fn record_area_created() {
    metrics::counter!("tangomango_areas_total", "op" => "created").increment(1);
}

/// Record an area deletion.
pub fn record_area_deleted() {
    metrics::counter!("tangomango_areas_total", "op" => "deleted").increment(1);
}

/// Record an event creation.
pub fn record_event_created() {
    metrics::counter!("tangomango_events_total", "op" => "created").increment(1);
}

/// Record an event deletion.
pub fn record_event_deleted() {
    metrics::counter!("tangomango_events_total", "op" => "deleted").increment(1);
}

/// Record a registration creation.
pub fn record_registration_created() {
    metrics::counter!("tangomango_registrations_total", "op" => "created").increment(1);
}

/// Record a registration cancellation (deletion).
pub fn record_registration_cancelled() {
    metrics::counter!("tangomango_registrations_total", "op" => "cancelled").increment(1);
}
