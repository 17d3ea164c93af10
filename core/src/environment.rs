//! Injected environment dependencies.
//!
//! External effects are abstracted behind traits so services stay testable:
//! production wires [`SystemClock`], tests substitute a fixed clock.

use chrono::{DateTime, Utc};

/// Clock trait - abstracts time operations for testability.
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
