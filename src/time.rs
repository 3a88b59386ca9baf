//! Time windows and calendar helpers.
//!
//! All engine timestamps are UTC. Windows are half-open `[start, end)`:
//! two windows that merely touch do not overlap, so back-to-back games
//! on the same field are never counted as concurrent.
//!
//! # Calendar Semantics
//! Day-of-week classification (weekend vs. weekday game durations) and
//! calendar-day bucketing (per-team and per-umpire daily caps) use the
//! UTC date of a timestamp. The lighting rule is the only check that
//! converts to a configured local time zone.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeWindow {
    /// Interval start (inclusive).
    pub start: DateTime<Utc>,
    /// Interval end (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new time window.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Creates a window of `minutes` starting at `start`.
    pub fn starting_at(start: DateTime<Utc>, minutes: u32) -> Self {
        Self {
            start,
            end: start + TimeDelta::minutes(i64::from(minutes)),
        }
    }

    /// Duration of this window in whole minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether two windows overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Whether `other` lies entirely within this window.
    #[inline]
    pub fn contains_window(&self, other: &Self) -> bool {
        other.start >= self.start && other.end <= self.end
    }
}

/// UTC calendar day of a timestamp.
///
/// Games and umpire duties count toward the day on which they start.
#[inline]
pub fn day_key(at: DateTime<Utc>) -> NaiveDate {
    at.date_naive()
}

/// Whether a date falls on a Saturday or Sunday.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Hour of day (0-23) of a timestamp in the given time zone.
#[inline]
pub fn local_hour(at: DateTime<Utc>, tz: Tz) -> u32 {
    at.with_timezone(&tz).hour()
}
