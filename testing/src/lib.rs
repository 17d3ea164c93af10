//! # TangoMango Testing
//!
//! Testing utilities and fixtures:
//! - Mock implementations of environment traits (fixed clock)
//! - Store fixtures so every test runs against an isolated instance
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use tangomango_core::services::RegistrationService;
//! use tangomango_testing::{fixtures, mocks};
//!
//! let db = fixtures::seeded_database();
//! let registrations = RegistrationService::new(db, Arc::new(mocks::test_clock()));
//! assert!(registrations.count_for_event("1").registrations.is_empty());
//! ```

use chrono::{DateTime, Utc};
use tangomango_core::environment::Clock;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests.
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use tangomango_core::environment::Clock;
    /// use tangomango_testing::mocks::FixedClock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Store fixtures.
pub mod fixtures {
    use std::sync::Arc;
    use tangomango_core::services::{NewArea, NewEvent};
    use tangomango_core::store::Database;
    use chrono::{TimeZone, Utc};

    /// An isolated empty store (fixed type catalog, no records).
    #[must_use]
    pub fn empty_database() -> Arc<Database> {
        Arc::new(Database::empty())
    }

    /// An isolated store populated with the startup seed dataset.
    #[must_use]
    pub fn seeded_database() -> Arc<Database> {
        Arc::new(Database::seeded())
    }

    /// A minimal valid area-creation input.
    #[must_use]
    pub fn new_area(name: &str) -> NewArea {
        NewArea {
            name: name.to_string(),
            description: format!("{name} description"),
            image_url: None,
        }
    }

    /// A minimal valid event-creation input for the given area.
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded fixture date is invalid, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new_event(area_id: &str) -> NewEvent {
        NewEvent {
            title: "Practica".to_string(),
            date: Some(
                Utc.with_ymd_and_hms(2025, 1, 10, 19, 0, 0)
                    .single()
                    .expect("hardcoded fixture date should always be valid"),
            ),
            time: "7:00 PM".to_string(),
            venue: "Studio".to_string(),
            area_id: area_id.to_string(),
            description: None,
            price: None,
            type_id: "milonga".to_string(),
        }
    }
}
