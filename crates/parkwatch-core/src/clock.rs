//! Source of "now" for every time-dependent rule in the model.
//!
//! Ticket validity is keyed to the current date and annual pass validity
//! to the current calendar year. Entities never read the system time
//! themselves; callers pass a [`Clock`] into each operation that needs it.
//!
//! # Design Principles
//!
//! - All derivations (`today`, `year`) come from a single `now()` reading,
//!   so one call never mixes two different instants.
//! - Dates are taken in UTC.
//! - [`FixedClock`] only moves when told to, which keeps tests
//!   deterministic.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc};

/// Errors that can occur during clock operations.
#[derive(Debug, thiserror::Error)]
pub enum ClockError {
    /// Advancing the clock would leave chrono's representable range.
    #[error("clock overflow: cannot advance {now} by {delta}")]
    Overflow {
        /// The instant the clock was at.
        now: DateTime<Utc>,
        /// The requested advance.
        delta: TimeDelta,
    },
}

/// A source of the current instant.
///
/// Only [`now`] is required. [`today`] and [`year`] are derived from it.
///
/// [`now`]: Clock::now
/// [`today`]: Clock::today
/// [`year`]: Clock::year
pub trait Clock {
    /// Return the current instant.
    fn now(&self) -> DateTime<Utc>;

    /// Return the current calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    /// Return the current calendar year.
    fn year(&self) -> i32 {
        self.today().year()
    }
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new wall clock.
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a chosen instant.
///
/// Used by tests, and by callers replaying a day's activity with a known
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    /// The instant reported by every `now()` call.
    now: DateTime<Utc>,
}

impl FixedClock {
    /// Create a clock frozen at `now`.
    pub const fn at(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Create a clock frozen at midnight UTC on `date`.
    pub fn on_date(date: NaiveDate) -> Self {
        Self::at(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Move the clock to `now`.
    pub const fn set(&mut self, now: DateTime<Utc>) {
        self.now = now;
    }

    /// Move the clock forward (or backward, for a negative delta).
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Overflow`] if the result is not representable.
    pub fn advance(&mut self, delta: TimeDelta) -> Result<DateTime<Utc>, ClockError> {
        self.now = self
            .now
            .checked_add_signed(delta)
            .ok_or(ClockError::Overflow {
                now: self.now,
                delta,
            })?;
        Ok(self.now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}
