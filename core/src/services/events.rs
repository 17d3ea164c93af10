//! Event operations.
//!
//! Events embed a snapshot of their type taken at write time; the catalog
//! itself is read-only. Creation resolves `typeId` against the catalog but
//! deliberately does not check that `areaId` exists, and deletion does not
//! cascade to registrations. Both behaviors are part of the documented
//! contract.

use crate::error::ServiceError;
use crate::store::Database;
use crate::types::{Event, EventType};
use crate::ServiceResult;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;

/// Optional, conjunctive filters for the event listing.
#[derive(Clone, Debug, Default)]
pub struct EventFilter {
    /// Exact match on `areaId`
    pub area_id: Option<String>,
    /// Exact calendar-day match, ignoring time-of-day
    pub date: Option<NaiveDate>,
    /// Exact match on the embedded type's id
    pub type_id: Option<String>,
}

/// Input for creating an event.
#[derive(Clone, Debug)]
pub struct NewEvent {
    /// Event title (required)
    pub title: String,
    /// Event date (required; `None` fails validation)
    pub date: Option<DateTime<Utc>>,
    /// Free-text start time (required)
    pub time: String,
    /// Venue name (required)
    pub venue: String,
    /// Owning area id (required but not validated against the area table)
    pub area_id: String,
    /// Optional description; empty string when omitted
    pub description: Option<String>,
    /// Optional free-text price, passed through verbatim
    pub price: Option<String>,
    /// Catalog type id (required, must resolve)
    pub type_id: String,
}

/// Partial update for an event.
///
/// Absent fields keep their previous values. `price` distinguishes absent
/// (keep) from explicit null (clear) via the nested `Option`.
#[derive(Clone, Debug, Default)]
pub struct EventPatch {
    /// New title, if provided
    pub title: Option<String>,
    /// New date, if provided
    pub date: Option<DateTime<Utc>>,
    /// New time, if provided
    pub time: Option<String>,
    /// New venue, if provided
    pub venue: Option<String>,
    /// New area id, if provided; existence is not re-checked on update
    pub area_id: Option<String>,
    /// New description, if provided; an explicit empty string clears it
    pub description: Option<String>,
    /// Outer `Some` replaces the stored price (inner `None` clears it)
    pub price: Option<Option<String>>,
    /// New type id, if provided; must resolve against the catalog
    pub type_id: Option<String>,
}

/// CRUD and filtering over events.
#[derive(Clone)]
pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Events matching every supplied filter, in storage order.
    #[must_use]
    pub fn list(&self, filter: &EventFilter) -> Vec<Event> {
        self.db.events.filter(|event| {
            filter
                .area_id
                .as_ref()
                .is_none_or(|area_id| &event.area_id == area_id)
                && filter.date.is_none_or(|day| event.occurs_on(day))
                && filter
                    .type_id
                    .as_ref()
                    .is_none_or(|type_id| &event.event_type.id == type_id)
        })
    }

    /// One event by id.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no event matches `id`.
    pub fn get(&self, id: &str) -> ServiceResult<Event> {
        self.db
            .events
            .find(id)
            .ok_or(ServiceError::NotFound("Event"))
    }

    /// Create an event, embedding a snapshot of the resolved type.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] when a required field is missing
    /// or `typeId` does not resolve against the catalog. The store is left
    /// untouched on failure.
    pub fn create(&self, new_event: NewEvent) -> ServiceResult<Event> {
        let required = [
            &new_event.title,
            &new_event.time,
            &new_event.venue,
            &new_event.area_id,
            &new_event.type_id,
        ];
        let missing_field = required.iter().any(|field| field.trim().is_empty());
        let Some(date) = new_event.date.filter(|_| !missing_field) else {
            return Err(ServiceError::validation(
                "Missing required fields: title, date, time, venue, areaId, typeId",
            ));
        };

        let event_type = self.resolve_type(&new_event.type_id)?;

        let event = Event {
            id: self.db.next_event_id(),
            title: new_event.title,
            date,
            time: new_event.time,
            venue: new_event.venue,
            area_id: new_event.area_id,
            description: new_event.description.unwrap_or_default(),
            price: new_event.price,
            event_type,
        };

        tracing::info!(event_id = %event.id, event_type = %event.event_type.id, "event created");
        self.db.events.insert(event.clone());
        Ok(event)
    }

    /// Partial update by id; absent fields keep their previous values.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no event matches `id`, or
    /// [`ServiceError::Validation`] when a supplied `typeId` does not
    /// resolve.
    pub fn update(&self, id: &str, patch: EventPatch) -> ServiceResult<Event> {
        let mut event = self.get(id)?;

        // Resolve the new type before touching anything else so a bad
        // typeId leaves the record unchanged.
        if let Some(type_id) = patch.type_id {
            event.event_type = self.resolve_type(&type_id)?;
        }

        if let Some(title) = patch.title {
            event.title = title;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(time) = patch.time {
            event.time = time;
        }
        if let Some(venue) = patch.venue {
            event.venue = venue;
        }
        if let Some(area_id) = patch.area_id {
            event.area_id = area_id;
        }
        if let Some(description) = patch.description {
            event.description = description;
        }
        if let Some(price) = patch.price {
            event.price = price;
        }

        self.db.events.replace(event.clone());
        Ok(event)
    }

    /// Delete an event. Registrations referencing it are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no event matches `id`.
    pub fn delete(&self, id: &str) -> ServiceResult<Event> {
        let removed = self
            .db
            .events
            .remove(id)
            .ok_or(ServiceError::NotFound("Event"))?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(removed)
    }

    /// The full fixed type catalog.
    #[must_use]
    pub fn types(&self) -> Vec<EventType> {
        self.db.event_types().to_vec()
    }

    fn resolve_type(&self, type_id: &str) -> ServiceResult<EventType> {
        self.db
            .resolve_event_type(type_id)
            .ok_or_else(|| ServiceError::validation("Invalid event type"))
    }
}
