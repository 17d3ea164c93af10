//! Application state for the HTTP server.
//!
//! One service per entity kind, all sharing a single injected store. The
//! state is cloned cheaply (the services hold `Arc`s) for each request.

use std::sync::Arc;
use tangomango_core::environment::Clock;
use tangomango_core::services::{AreaService, EventService, RegistrationService};
use tangomango_core::store::Database;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Area operations
    pub areas: AreaService,
    /// Event operations
    pub events: EventService,
    /// Registration operations
    pub registrations: RegistrationService,
}

impl AppState {
    /// Build the state over an injected store and clock.
    ///
    /// Production passes `Database::seeded()` and `SystemClock`; tests pass
    /// isolated instances and a fixed clock.
    #[must_use]
    pub fn new(db: Arc<Database>, clock: Arc<dyn Clock>) -> Self {
        Self {
            areas: AreaService::new(db.clone()),
            events: EventService::new(db.clone()),
            registrations: RegistrationService::new(db, clock),
        }
    }
}
