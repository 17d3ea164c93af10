//! In-memory entity store.
//!
//! The store is a plain value injected into services as an `Arc<Database>`:
//! production builds one seeded instance at startup, tests build isolated
//! instances. There is no persistence; a restart resets to the seed.
//!
//! Collections preserve insertion order, matching list responses that
//! return records in storage order.

use crate::seed;
use crate::types::{Area, Event, EventType, Registration};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

/// A record with a stable string id.
pub trait Entity: Clone {
    /// The record's unique id.
    fn id(&self) -> &str;
}

impl Entity for Area {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Registration {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// MemTable
// ============================================================================

/// Insertion-ordered in-memory collection of one entity kind.
///
/// Requests are handled one mutation at a time; the lock exists so
/// independent HTTP requests never observe a torn read, not to coordinate
/// concurrent writers.
#[derive(Debug, Default)]
pub struct MemTable<T> {
    rows: RwLock<Vec<T>>,
}

impl<T: Entity> MemTable<T> {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Create a table pre-populated with `rows`, preserving their order.
    #[must_use]
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self {
            rows: RwLock::new(rows),
        }
    }

    /// All rows in insertion order.
    #[must_use]
    pub fn all(&self) -> Vec<T> {
        self.read().clone()
    }

    /// The row with the given id, if any.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<T> {
        self.read().iter().find(|row| row.id() == id).cloned()
    }

    /// Whether a row with the given id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.read().iter().any(|row| row.id() == id)
    }

    /// Append a row at the end of the collection.
    pub fn insert(&self, row: T) {
        self.write().push(row);
    }

    /// Replace the row whose id matches `row`, keeping its position.
    ///
    /// Returns the new value, or `None` if no row matched.
    pub fn replace(&self, row: T) -> Option<T> {
        let mut rows = self.write();
        let slot = rows.iter_mut().find(|existing| existing.id() == row.id())?;
        *slot = row.clone();
        Some(row)
    }

    /// Remove and return the row with the given id.
    pub fn remove(&self, id: &str) -> Option<T> {
        let mut rows = self.write();
        let index = rows.iter().position(|row| row.id() == id)?;
        Some(rows.remove(index))
    }

    /// Rows matching the predicate, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read()
            .iter()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    /// Number of rows matching the predicate.
    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.read().iter().filter(|row| predicate(row)).count()
    }

    /// Total number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<T>> {
        self.rows.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<T>> {
        self.rows.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// ============================================================================
// Id sequences
// ============================================================================

/// Monotonic id sequence.
///
/// Replaces the timestamp- and length-derived ids of earlier designs:
/// values are never reused, even after deletions, and two creates can never
/// collide.
#[derive(Debug)]
pub struct IdSequence(AtomicU64);

impl IdSequence {
    /// Sequence whose first issued value is `next`.
    #[must_use]
    pub const fn starting_at(next: u64) -> Self {
        Self(AtomicU64::new(next))
    }

    /// Issue the next value.
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

// ============================================================================
// Database
// ============================================================================

/// The process-local entity store: one table per entity kind, the fixed
/// event-type catalog, and the id sequences.
#[derive(Debug)]
pub struct Database {
    /// Area records
    pub areas: MemTable<Area>,
    /// Event records
    pub events: MemTable<Event>,
    /// Registration records
    pub registrations: MemTable<Registration>,
    event_types: Vec<EventType>,
    area_ids: IdSequence,
    event_ids: IdSequence,
    registration_ids: IdSequence,
}

impl Database {
    /// An empty store with the fixed type catalog. Used by tests.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_data(Vec::new(), Vec::new())
    }

    /// A store populated with the startup seed dataset.
    #[must_use]
    pub fn seeded() -> Self {
        let event_types = seed::event_types();
        let events = seed::events(&event_types);
        Self::with_data(seed::areas(), events)
    }

    fn with_data(areas: Vec<Area>, events: Vec<Event>) -> Self {
        // Seed event ids are numeric; sequences resume above the largest one
        // so later inserts never collide with seeded rows.
        let next_event_id = events
            .iter()
            .filter_map(|event| event.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            areas: MemTable::from_rows(areas),
            events: MemTable::from_rows(events),
            registrations: MemTable::new(),
            event_types: seed::event_types(),
            area_ids: IdSequence::starting_at(1),
            event_ids: IdSequence::starting_at(next_event_id),
            registration_ids: IdSequence::starting_at(1),
        }
    }

    /// The fixed, read-only event-type catalog.
    #[must_use]
    pub fn event_types(&self) -> &[EventType] {
        &self.event_types
    }

    /// Resolve a type id against the catalog, returning a snapshot to embed.
    #[must_use]
    pub fn resolve_event_type(&self, type_id: &str) -> Option<EventType> {
        self.event_types
            .iter()
            .find(|event_type| event_type.id == type_id)
            .cloned()
    }

    /// Issue a fresh area id.
    #[must_use]
    pub fn next_area_id(&self) -> String {
        format!("area-{}", self.area_ids.next())
    }

    /// Issue a fresh event id.
    #[must_use]
    pub fn next_event_id(&self) -> String {
        self.event_ids.next().to_string()
    }

    /// Issue a fresh registration id.
    #[must_use]
    pub fn next_registration_id(&self) -> String {
        format!("reg-{}", self.registration_ids.next())
    }
}
