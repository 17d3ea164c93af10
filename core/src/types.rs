//! Domain types for the TangoMango event catalog.
//!
//! All wire-facing types serialize in camelCase to match the public API.
//! `Event.type` is an [`EventType`] snapshot copied from the catalog at
//! write time, not a live reference.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Areas
// ============================================================================

/// A geographic grouping under which events are organized.
///
/// The per-area event count is derived on every read and never stored; see
/// [`AreaWithEventCount`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    /// Unique area id
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Image shown on the area card
    pub image_url: String,
}

/// An [`Area`] together with its freshly computed event count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaWithEventCount {
    /// The underlying area record
    #[serde(flatten)]
    pub area: Area,
    /// Number of events whose `areaId` references this area, computed at
    /// read time
    pub event_count: usize,
}

// ============================================================================
// Event types
// ============================================================================

/// One of the fixed event categories (milonga, workshop, ...).
///
/// The catalog is read-only at runtime; events embed a copy of their type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventType {
    /// Stable type id, e.g. `milonga`
    pub id: String,
    /// Display name
    pub name: String,
    /// Color token used by clients
    pub color: String,
    /// Icon token used by clients
    pub icon: String,
}

// ============================================================================
// Events
// ============================================================================

/// A scheduled event with a date, venue, area, and embedded type snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique event id
    pub id: String,
    /// Event title
    pub title: String,
    /// Calendar date of the event; time-of-day is ignored by date filters
    pub date: DateTime<Utc>,
    /// Free-text start time, e.g. `7:00 PM`
    pub time: String,
    /// Venue name
    pub venue: String,
    /// Foreign key to the owning [`Area`]; validated at creation only
    pub area_id: String,
    /// Long-form description
    pub description: String,
    /// Optional free-text price, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    /// Type snapshot copied from the catalog at write time
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    /// Whether this event falls on the given calendar day, ignoring any
    /// time-of-day component of the stored date.
    #[must_use]
    pub fn occurs_on(&self, day: NaiveDate) -> bool {
        self.date.date_naive() == day
    }
}

// ============================================================================
// Registrations
// ============================================================================

/// Lifecycle status of a registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    /// Active signup; the only status assigned at creation
    Confirmed,
    /// Cancelled by the attendee or an organizer
    Cancelled,
    /// Waiting for a spot to open up
    Waitlist,
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
            Self::Waitlist => "waitlist",
        };
        write!(f, "{s}")
    }
}

/// A person's signup record for a specific event.
///
/// Emails are normalized to lowercase before storage so the one-per-event
/// uniqueness check is case-insensitive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Unique registration id
    pub id: String,
    /// Foreign key to the registered [`Event`]; not cleaned up when the
    /// event is deleted
    pub event_id: String,
    /// Attendee name
    pub name: String,
    /// Attendee email, stored lowercase
    pub email: String,
    /// Optional phone number; empty string when not provided
    pub phone: String,
    /// Creation timestamp
    pub registered_at: DateTime<Utc>,
    /// Current status
    pub status: RegistrationStatus,
}

// ============================================================================
// Serde helpers
// ============================================================================

/// Serde adapters shared by request types.
pub mod datetime {
    use super::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};

    /// Deserialize a UTC datetime from either an RFC 3339 timestamp or a
    /// plain `YYYY-MM-DD` date (interpreted as midnight UTC).
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when the input matches neither form.
    pub fn deserialize_flexible<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_flexible(&raw).map_err(serde::de::Error::custom)
    }

    /// Optional variant of [`deserialize_flexible`]; `null` and absent both
    /// deserialize to `None`.
    ///
    /// # Errors
    ///
    /// Returns a deserialization error when a present value matches neither
    /// accepted form.
    pub fn deserialize_flexible_opt<'de, D>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        raw.map(|s| parse_flexible(&s).map_err(serde::de::Error::custom))
            .transpose()
    }

    fn parse_flexible(raw: &str) -> Result<DateTime<Utc>, String> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Ok(dt.with_timezone(&Utc));
        }
        if let Some(dt) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return Ok(dt.and_utc());
        }
        Err(format!(
            "invalid date '{raw}': expected RFC 3339 or YYYY-MM-DD"
        ))
    }
}
