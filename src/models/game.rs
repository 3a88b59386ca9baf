//! Games awaiting placement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single game to be scheduled.
///
/// Each game names the two participating team-season entries and a
/// scheduling window. The engine may only place the game so that it
/// starts no earlier than `earliest_start` and finishes no later than
/// `latest_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    /// Unique game identifier.
    pub id: String,
    /// League season this game belongs to.
    #[serde(default)]
    pub league_season_id: String,
    /// Team-season id of the home team.
    pub home_team_season_id: String,
    /// Team-season id of the visiting team.
    pub visitor_team_season_id: String,
    /// Earliest permissible start time.
    pub earliest_start: DateTime<Utc>,
    /// Latest permissible end time.
    pub latest_end: DateTime<Utc>,
    /// Number of umpires the game requires. Zero means none.
    #[serde(default)]
    pub required_umpires: u32,
    /// Fields this game prefers, in priority order.
    #[serde(default)]
    pub preferred_field_ids: Vec<String>,
}

impl Game {
    /// Creates a new game with no umpire requirement and no field
    /// preferences.
    pub fn new(
        id: impl Into<String>,
        home_team_season_id: impl Into<String>,
        visitor_team_season_id: impl Into<String>,
        earliest_start: DateTime<Utc>,
        latest_end: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            league_season_id: String::new(),
            home_team_season_id: home_team_season_id.into(),
            visitor_team_season_id: visitor_team_season_id.into(),
            earliest_start,
            latest_end,
            required_umpires: 0,
            preferred_field_ids: Vec::new(),
        }
    }

    /// Sets the league season id.
    pub fn with_league_season(mut self, league_season_id: impl Into<String>) -> Self {
        self.league_season_id = league_season_id.into();
        self
    }

    /// Sets the number of umpires this game requires.
    pub fn with_required_umpires(mut self, count: u32) -> Self {
        self.required_umpires = count;
        self
    }

    /// Appends a preferred field, keeping earlier entries higher
    /// priority.
    pub fn with_preferred_field(mut self, field_id: impl Into<String>) -> Self {
        self.preferred_field_ids.push(field_id.into());
        self
    }

    /// Whether the scheduling window is well formed.
    pub fn has_valid_window(&self) -> bool {
        self.earliest_start < self.latest_end
    }

    /// Preference rank of a field for this game. Fields named in
    /// `preferred_field_ids` rank by position; all others share the
    /// rank one past the end of the list.
    pub fn preference_rank(&self, field_id: &str) -> usize {
        self.preferred_field_ids
            .iter()
            .position(|id| id == field_id)
            .unwrap_or(self.preferred_field_ids.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().expect("test timestamp")
    }

    #[test]
    fn test_game_builder() {
        let game = Game::new(
            "g1",
            "ts-home",
            "ts-away",
            utc("2025-06-07T09:00:00Z"),
            utc("2025-06-07T18:00:00Z"),
        )
        .with_league_season("ls1")
        .with_required_umpires(2)
        .with_preferred_field("f2")
        .with_preferred_field("f1");

        assert_eq!(game.required_umpires, 2);
        assert_eq!(game.preferred_field_ids, vec!["f2", "f1"]);
        assert!(game.has_valid_window());
    }

    #[test]
    fn test_invalid_window_detected() {
        let game = Game::new(
            "g1",
            "a",
            "b",
            utc("2025-06-07T18:00:00Z"),
            utc("2025-06-07T09:00:00Z"),
        );
        assert!(!game.has_valid_window());

        let degenerate = Game::new(
            "g2",
            "a",
            "b",
            utc("2025-06-07T09:00:00Z"),
            utc("2025-06-07T09:00:00Z"),
        );
        assert!(!degenerate.has_valid_window());
    }

    #[test]
    fn test_preference_rank() {
        let game = Game::new(
            "g1",
            "a",
            "b",
            utc("2025-06-07T09:00:00Z"),
            utc("2025-06-07T18:00:00Z"),
        )
        .with_preferred_field("f2")
        .with_preferred_field("f1");

        assert_eq!(game.preference_rank("f2"), 0);
        assert_eq!(game.preference_rank("f1"), 1);
        assert_eq!(game.preference_rank("f9"), 2);
    }

    #[test]
    fn test_game_camel_case_json() {
        let json = r#"{
            "id": "g1",
            "homeTeamSeasonId": "ts1",
            "visitorTeamSeasonId": "ts2",
            "earliestStart": "2025-06-07T09:00:00Z",
            "latestEnd": "2025-06-07T18:00:00Z"
        }"#;
        let game: Game = serde_json::from_str(json).unwrap();
        assert_eq!(game.required_umpires, 0);
        assert!(game.preferred_field_ids.is_empty());
        assert_eq!(game.home_team_season_id, "ts1");
    }
}
