//! Season and game-duration configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::time::is_weekend;

/// Per-season game length configuration, in minutes.
///
/// `default_minutes` is the mandatory fallback. The weekend and
/// weekday overrides, when present, are selected by the UTC
/// day-of-week of a game's earliest-start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDurations {
    /// Override for games starting on a Saturday or Sunday.
    #[serde(default)]
    pub weekend_minutes: Option<u32>,
    /// Override for games starting on a weekday.
    #[serde(default)]
    pub weekday_minutes: Option<u32>,
    /// Fallback when no override applies.
    pub default_minutes: u32,
}

impl GameDurations {
    /// Creates a configuration with only the fallback duration.
    pub fn fixed(default_minutes: u32) -> Self {
        Self {
            weekend_minutes: None,
            weekday_minutes: None,
            default_minutes,
        }
    }

    /// Sets the weekend override.
    pub fn with_weekend(mut self, minutes: u32) -> Self {
        self.weekend_minutes = Some(minutes);
        self
    }

    /// Sets the weekday override.
    pub fn with_weekday(mut self, minutes: u32) -> Self {
        self.weekday_minutes = Some(minutes);
        self
    }

    /// Duration for a game starting on the given date.
    pub fn minutes_for(&self, date: NaiveDate) -> u32 {
        if is_weekend(date) {
            self.weekend_minutes.unwrap_or(self.default_minutes)
        } else {
            self.weekday_minutes.unwrap_or(self.default_minutes)
        }
    }
}

/// A league season: the scheduling horizon and its game-duration rules.
///
/// `end_date` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    /// Unique season identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// First calendar day of the season.
    pub start_date: NaiveDate,
    /// Last calendar day of the season (inclusive).
    pub end_date: NaiveDate,
    /// Game length configuration.
    pub game_durations: GameDurations,
}

impl Season {
    /// Creates a new season.
    pub fn new(
        id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        game_durations: GameDurations,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start_date,
            end_date,
            game_durations,
        }
    }

    /// Sets the season name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
