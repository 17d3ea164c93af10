//! Area operations.
//!
//! `eventCount` is derived on every read by counting events whose `areaId`
//! matches; it is never stored. An area with dependent events cannot be
//! deleted.

use crate::error::ServiceError;
use crate::seed::DEFAULT_AREA_IMAGE_URL;
use crate::store::Database;
use crate::types::{Area, AreaWithEventCount, Event};
use crate::ServiceResult;
use serde::Serialize;
use std::sync::Arc;

/// Input for creating an area.
#[derive(Clone, Debug, Default)]
pub struct NewArea {
    /// Display name (required, non-empty)
    pub name: String,
    /// Short description (required, non-empty)
    pub description: String,
    /// Optional image; a fixed placeholder is used when omitted
    pub image_url: Option<String>,
}

/// Partial update for an area. Absent fields keep their previous value.
#[derive(Clone, Debug, Default)]
pub struct AreaPatch {
    /// New name, if provided
    pub name: Option<String>,
    /// New description, if provided
    pub description: Option<String>,
    /// New image url, if provided
    pub image_url: Option<String>,
}

/// An area together with its events, as returned by the per-area listing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaEvents {
    /// The area, with its derived event count
    pub area: AreaWithEventCount,
    /// All events referencing the area, in storage order
    pub events: Vec<Event>,
    /// Number of events in `events`
    pub event_count: usize,
}

/// CRUD over areas.
#[derive(Clone)]
pub struct AreaService {
    db: Arc<Database>,
}

impl AreaService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All areas with freshly computed event counts, in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<AreaWithEventCount> {
        self.db
            .areas
            .all()
            .into_iter()
            .map(|area| self.with_event_count(area))
            .collect()
    }

    /// One area with its computed event count.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no area matches `id`.
    pub fn get(&self, id: &str) -> ServiceResult<AreaWithEventCount> {
        let area = self
            .db
            .areas
            .find(id)
            .ok_or(ServiceError::NotFound("Area"))?;
        Ok(self.with_event_count(area))
    }

    /// The area plus all events referencing it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no area matches `id`.
    pub fn events_for(&self, id: &str) -> ServiceResult<AreaEvents> {
        let area = self.get(id)?;
        let events = self.db.events.filter(|event| event.area_id == id);
        let event_count = events.len();
        Ok(AreaEvents {
            area,
            events,
            event_count,
        })
    }

    /// Create an area. The response carries an event count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Validation`] when `name` or `description`
    /// is missing or empty.
    pub fn create(&self, new_area: NewArea) -> ServiceResult<AreaWithEventCount> {
        if new_area.name.trim().is_empty() || new_area.description.trim().is_empty() {
            return Err(ServiceError::validation(
                "Missing required fields: name, description",
            ));
        }

        let area = Area {
            id: self.db.next_area_id(),
            name: new_area.name,
            description: new_area.description,
            image_url: new_area
                .image_url
                .unwrap_or_else(|| DEFAULT_AREA_IMAGE_URL.to_string()),
        };

        tracing::info!(area_id = %area.id, "area created");
        self.db.areas.insert(area.clone());

        Ok(AreaWithEventCount {
            area,
            event_count: 0,
        })
    }

    /// Partial update by id; absent fields keep their previous values.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no area matches `id`.
    pub fn update(&self, id: &str, patch: AreaPatch) -> ServiceResult<AreaWithEventCount> {
        let mut area = self
            .db
            .areas
            .find(id)
            .ok_or(ServiceError::NotFound("Area"))?;

        if let Some(name) = patch.name {
            area.name = name;
        }
        if let Some(description) = patch.description {
            area.description = description;
        }
        if let Some(image_url) = patch.image_url {
            area.image_url = image_url;
        }

        self.db.areas.replace(area.clone());
        Ok(self.with_event_count(area))
    }

    /// Delete an area, refusing while any event still references it.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no area matches `id`, or
    /// [`ServiceError::Conflict`] naming the dependent event count when the
    /// area is still referenced.
    pub fn delete(&self, id: &str) -> ServiceResult<Area> {
        if !self.db.areas.contains(id) {
            return Err(ServiceError::NotFound("Area"));
        }

        let dependents = self.db.events.count_where(|event| event.area_id == id);
        if dependents > 0 {
            return Err(ServiceError::conflict(format!(
                "Cannot delete area with {dependents} existing events"
            )));
        }

        tracing::info!(area_id = %id, "area deleted");
        self.db
            .areas
            .remove(id)
            .ok_or(ServiceError::NotFound("Area"))
    }

    fn with_event_count(&self, area: Area) -> AreaWithEventCount {
        let event_count = self
            .db
            .events
            .count_where(|event| event.area_id == area.id);
        AreaWithEventCount { area, event_count }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::services::events::{EventService, NewEvent};
    use chrono::{TimeZone, Utc};

    fn service() -> (AreaService, EventService, Arc<Database>) {
        let db = Arc::new(Database::empty());
        (
            AreaService::new(db.clone()),
            EventService::new(db.clone()),
            db,
        )
    }

    fn new_event(area_id: &str) -> NewEvent {
        NewEvent {
            title: "Practica".to_string(),
            date: Some(Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap()),
            time: "7:00 PM".to_string(),
            venue: "Studio".to_string(),
            area_id: area_id.to_string(),
            description: None,
            price: None,
            type_id: "milonga".to_string(),
        }
    }

    #[test]
    fn test_create_requires_name_and_description() {
        let (areas, _, _) = service();

        let err = areas
            .create(NewArea {
                name: "Test".to_string(),
                ..NewArea::default()
            })
            .unwrap_err();
        assert_eq!(
            err,
            ServiceError::Validation("Missing required fields: name, description".to_string())
        );
    }

    #[test]
    fn test_create_defaults_image_url() {
        let (areas, _, _) = service();

        let created = areas
            .create(NewArea {
                name: "Test".to_string(),
                description: "D".to_string(),
                image_url: None,
            })
            .unwrap();

        assert_eq!(created.area.image_url, DEFAULT_AREA_IMAGE_URL);
        assert_eq!(created.event_count, 0);
    }

    #[test]
    fn test_event_count_is_derived_on_read() {
        let (areas, events, _) = service();
        let created = areas
            .create(NewArea {
                name: "Test".to_string(),
                description: "D".to_string(),
                image_url: None,
            })
            .unwrap();

        assert_eq!(areas.get(&created.area.id).unwrap().event_count, 0);

        events.create(new_event(&created.area.id)).unwrap();
        assert_eq!(areas.get(&created.area.id).unwrap().event_count, 1);

        events.create(new_event(&created.area.id)).unwrap();
        assert_eq!(areas.get(&created.area.id).unwrap().event_count, 2);
    }

    #[test]
    fn test_delete_blocked_by_dependent_events() {
        let (areas, events, _) = service();
        let created = areas
            .create(NewArea {
                name: "Test".to_string(),
                description: "D".to_string(),
                image_url: None,
            })
            .unwrap();
        events.create(new_event(&created.area.id)).unwrap();

        let err = areas.delete(&created.area.id).unwrap_err();
        assert_eq!(
            err,
            ServiceError::Conflict("Cannot delete area with 1 existing events".to_string())
        );
        // The area survives the refused delete.
        assert!(areas.get(&created.area.id).is_ok());
    }

    #[test]
    fn test_delete_returns_removed_area() {
        let (areas, _, _) = service();
        let created = areas
            .create(NewArea {
                name: "Test".to_string(),
                description: "D".to_string(),
                image_url: None,
            })
            .unwrap();

        let removed = areas.delete(&created.area.id).unwrap();
        assert_eq!(removed.id, created.area.id);
        assert_eq!(areas.delete(&created.area.id), Err(ServiceError::NotFound("Area")));
    }

    #[test]
    fn test_update_keeps_omitted_fields() {
        let (areas, _, _) = service();
        let created = areas
            .create(NewArea {
                name: "Test".to_string(),
                description: "D".to_string(),
                image_url: Some("https://example.com/x.jpg".to_string()),
            })
            .unwrap();

        let updated = areas
            .update(
                &created.area.id,
                AreaPatch {
                    name: Some("Renamed".to_string()),
                    ..AreaPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.area.name, "Renamed");
        assert_eq!(updated.area.description, "D");
        assert_eq!(updated.area.image_url, "https://example.com/x.jpg");
    }

    #[test]
    fn test_update_overwrites_with_explicit_empty_string() {
        let (areas, _, _) = service();
        let created = areas
            .create(NewArea {
                name: "Test".to_string(),
                description: "D".to_string(),
                image_url: None,
            })
            .unwrap();

        let updated = areas
            .update(
                &created.area.id,
                AreaPatch {
                    description: Some(String::new()),
                    ..AreaPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.area.description, "");
    }

    #[test]
    fn test_events_for_missing_area() {
        let (areas, _, _) = service();
        assert_eq!(
            areas.events_for("ghost").unwrap_err(),
            ServiceError::NotFound("Area")
        );
    }
}
