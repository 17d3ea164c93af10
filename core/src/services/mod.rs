//! Service layer: the CRUD and filtering operations exposed over the API.
//!
//! Each service holds an injected `Arc<Database>` and returns plain
//! `Result` values; HTTP status mapping happens in the web crate.

pub mod areas;
pub mod events;
pub mod registrations;

pub use areas::{AreaEvents, AreaPatch, AreaService, NewArea};
pub use events::{EventFilter, EventPatch, EventService, NewEvent};
pub use registrations::{
    EventRegistrations, NewRegistration, RegistrationFilter, RegistrationPatch,
    RegistrationService,
};
