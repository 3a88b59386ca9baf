//! Umpires and their availability windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::TimeWindow;

/// An umpire who can be assigned to officiate games.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Umpire {
    /// Unique umpire identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Daily assignment cap. `None` = unbounded.
    #[serde(default)]
    pub max_games_per_day: Option<u32>,
}

impl Umpire {
    /// Creates a new umpire with no daily cap.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            max_games_per_day: None,
        }
    }

    /// Sets the umpire's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily assignment cap.
    pub fn with_daily_cap(mut self, max_games_per_day: u32) -> Self {
        self.max_games_per_day = Some(max_games_per_day);
        self
    }
}

/// A window during which an umpire may officiate.
///
/// An umpire with no availability windows at all is treated as
/// available whenever referenced; whether windows are enforced is
/// governed by the `respect_umpire_availability` constraint toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UmpireAvailability {
    /// Umpire this window belongs to.
    pub umpire_id: String,
    /// Window start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Window end (exclusive).
    pub end_time: DateTime<Utc>,
}

impl UmpireAvailability {
    /// Creates a new availability window.
    pub fn new(
        umpire_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            umpire_id: umpire_id.into(),
            start_time,
            end_time,
        }
    }

    /// The availability as a time window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}
