//! # TangoMango Core
//!
//! Functional core of the TangoMango event-discovery service.
//!
//! This crate contains everything that can be exercised without an HTTP
//! server attached:
//!
//! - **Domain model**: areas, events, event types, registrations
//! - **Store**: insertion-ordered in-memory collections behind an injected
//!   [`store::Database`] handle
//! - **Services**: the CRUD and filtering operations exposed over the API
//! - **Calendar**: pure month-grid derivation for the calendar view
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Dependency Injection via traits ([`environment::Clock`]) and injected
//!   store handles
//! - Explicit `Result` returns; HTTP mapping lives in the web crate
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tangomango_core::services::AreaService;
//! use tangomango_core::store::Database;
//!
//! let db = Arc::new(Database::seeded());
//! let areas = AreaService::new(db);
//! assert!(!areas.list().is_empty());
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod calendar;
pub mod environment;
pub mod error;
pub mod seed;
pub mod services;
pub mod store;
pub mod types;

pub use error::ServiceError;
pub use types::{Area, AreaWithEventCount, Event, EventType, Registration, RegistrationStatus};

/// Result type alias for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;
