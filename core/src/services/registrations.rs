//! Registration operations.
//!
//! Creation enforces that the referenced event exists and that at most one
//! registration exists per `(eventId, lowercased email)` pair, regardless of
//! status. Updates deliberately skip the uniqueness re-check, matching the
//! documented contract.

use crate::environment::Clock;
use crate::error::ServiceError;
use crate::store::Database;
use crate::types::{Registration, RegistrationStatus};
use crate::ServiceResult;
use serde::Serialize;
use std::sync::Arc;

/// Optional, conjunctive filters for the registration listing.
#[derive(Clone, Debug, Default)]
pub struct RegistrationFilter {
    /// Exact match on `eventId`
    pub event_id: Option<String>,
    /// Case-insensitive substring match on the stored email
    pub email: Option<String>,
}

/// Input for creating a registration.
#[derive(Clone, Debug, Default)]
pub struct NewRegistration {
    /// Referenced event id (required, must exist)
    pub event_id: String,
    /// Attendee name (required)
    pub name: String,
    /// Attendee email (required; stored lowercase)
    pub email: String,
    /// Optional phone number
    pub phone: Option<String>,
}

/// Partial update for a registration. Absent fields keep their previous
/// values; a provided email is re-lowercased.
#[derive(Clone, Debug, Default)]
pub struct RegistrationPatch {
    /// New name, if provided
    pub name: Option<String>,
    /// New email, if provided
    pub email: Option<String>,
    /// New phone, if provided
    pub phone: Option<String>,
    /// New status, if provided
    pub status: Option<RegistrationStatus>,
}

/// Count plus listing of registrations for one event.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRegistrations {
    /// The queried event id (not checked for existence)
    pub event_id: String,
    /// Number of registrations in `registrations`
    pub count: usize,
    /// All registrations for the event, in storage order
    pub registrations: Vec<Registration>,
}

/// CRUD and filtering over registrations.
#[derive(Clone)]
pub struct RegistrationService {
    db: Arc<Database>,
    clock: Arc<dyn Clock>,
}

impl RegistrationService {
    /// Create a service over the given store and clock.
    #[must_use]
    pub fn new(db: Arc<Database>, clock: Arc<dyn Clock>) -> Self {
        Self { db, clock }
    }

    /// Registrations matching every supplied filter, in storage order.
    #[must_use]
    pub fn list(&self, filter: &RegistrationFilter) -> Vec<Registration> {
        let needle = filter.email.as_ref().map(|email| email.to_lowercase());
        self.db.registrations.filter(|registration| {
            filter
                .event_id
                .as_ref()
                .is_none_or(|event_id| &registration.event_id == event_id)
                && needle
                    .as_ref()
                    .is_none_or(|needle| registration.email.to_lowercase().contains(needle))
        })
    }

    /// One registration by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no registration matches `id`.
    pub fn get(&self, id: &str) -> ServiceResult<Registration> {
        self.db
            .registrations
            .find(id)
            .ok_or(ServiceError::NotFound("Registration"))
    }

    /// Create a registration with status `confirmed`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] when a required field is
    /// missing, [`ServiceError::NotFound`] when the referenced event does
    /// not exist, or [`ServiceError::Conflict`] when a registration already
    /// exists for the same event and email (case-insensitive).
    pub fn create(&self, new_registration: NewRegistration) -> ServiceResult<Registration> {
        let NewRegistration {
            event_id,
            name,
            email,
            phone,
        } = new_registration;

        if event_id.trim().is_empty() || name.trim().is_empty() || email.trim().is_empty() {
            return Err(ServiceError::validation(
                "Missing required fields: eventId, name, email",
            ));
        }

        if !self.db.events.contains(&event_id) {
            return Err(ServiceError::NotFound("Event"));
        }

        let email = email.to_lowercase();
        let duplicate = self.db.registrations.count_where(|registration| {
            registration.event_id == event_id && registration.email == email
        }) > 0;
        if duplicate {
            return Err(ServiceError::conflict(
                "User is already registered for this event",
            ));
        }

        let registration = Registration {
            id: self.db.next_registration_id(),
            event_id,
            name,
            email,
            phone: phone.unwrap_or_default(),
            registered_at: self.clock.now(),
            status: RegistrationStatus::Confirmed,
        };

        tracing::info!(
            registration_id = %registration.id,
            event_id = %registration.event_id,
            "registration created"
        );
        self.db.registrations.insert(registration.clone());
        Ok(registration)
    }

    /// Partial update by id. The `(eventId, email)` uniqueness constraint is
    /// checked at insert time only, not here.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no registration matches `id`.
    pub fn update(&self, id: &str, patch: RegistrationPatch) -> ServiceResult<Registration> {
        let mut registration = self.get(id)?;

        if let Some(name) = patch.name {
            registration.name = name;
        }
        if let Some(email) = patch.email {
            registration.email = email.to_lowercase();
        }
        if let Some(phone) = patch.phone {
            registration.phone = phone;
        }
        if let Some(status) = patch.status {
            registration.status = status;
        }

        self.db.registrations.replace(registration.clone());
        Ok(registration)
    }

    /// Remove a registration entirely. Despite the route's "cancel" naming,
    /// the record is deleted rather than flipped to `cancelled`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no registration matches `id`.
    pub fn delete(&self, id: &str) -> ServiceResult<Registration> {
        let removed = self
            .db
            .registrations
            .remove(id)
            .ok_or(ServiceError::NotFound("Registration"))?;
        tracing::info!(registration_id = %id, "registration deleted");
        Ok(removed)
    }

    /// Count and list registrations for one event. An unknown event id
    /// yields an empty listing rather than a not-found error.
    #[must_use]
    pub fn count_for_event(&self, event_id: &str) -> EventRegistrations {
        let registrations = self
            .db
            .registrations
            .filter(|registration| registration.event_id == event_id);
        EventRegistrations {
            event_id: event_id.to_string(),
            count: registrations.len(),
            registrations,
        }
    }
}
