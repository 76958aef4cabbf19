//! Time source abstraction
//!
//! Builders and use cases never call `Utc::now()` directly. They read the
//! current instant from a [`Clock`], so production wiring supplies the wall
//! clock and tests pin time with a [`FixedClock`].

use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Returns the system clock as a shareable handle
    pub fn shared() -> Arc<dyn Clock> {
        Arc::new(SystemClock)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }

    /// Returns this clock as a shareable handle
    pub fn shared(instant: DateTime<Utc>) -> Arc<dyn Clock> {
        Arc::new(Self::new(instant))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
