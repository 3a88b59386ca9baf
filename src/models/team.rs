//! Team roster entries and blackout windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::TimeWindow;

/// A team enrolled in a season.
///
/// `team_season_id` is the season-scoped identity that games and
/// blackouts reference, and must be unique across the roster. `id` is
/// the team's persistent identity across seasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Persistent team identifier.
    pub id: String,
    /// Season-scoped identifier referenced by games and blackouts.
    pub team_season_id: String,
    /// League the team plays in.
    #[serde(default)]
    pub league_id: String,
}

impl Team {
    /// Creates a new roster entry.
    pub fn new(id: impl Into<String>, team_season_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            team_season_id: team_season_id.into(),
            league_id: String::new(),
        }
    }

    /// Sets the league reference.
    pub fn with_league(mut self, league_id: impl Into<String>) -> Self {
        self.league_id = league_id.into();
        self
    }
}

/// A window during which a team may not play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamBlackout {
    /// Season-scoped team identifier.
    pub team_season_id: String,
    /// Blackout start (inclusive).
    pub start_time: DateTime<Utc>,
    /// Blackout end (exclusive).
    pub end_time: DateTime<Utc>,
}

impl TeamBlackout {
    /// Creates a new blackout window.
    pub fn new(
        team_season_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            team_season_id: team_season_id.into(),
            start_time,
            end_time,
        }
    }

    /// The blackout as a time window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }
}
