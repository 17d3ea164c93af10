//! HTTP handlers, grouped by entity.
//!
//! Handlers are thin adapters: deserialize the request, call the service,
//! wrap the result in the response envelope.

pub mod areas;
pub mod events;
pub mod health;
pub mod registrations;
