//! The complete input to a scheduling run.

use serde::{Deserialize, Serialize};

use crate::models::constraints::ConstraintSet;
use crate::models::field::{Field, FieldSlot};
use crate::models::game::Game;
use crate::models::season::Season;
use crate::models::team::{Team, TeamBlackout};
use crate::models::umpire::{Umpire, UmpireAvailability};

/// Everything the engine needs to schedule one season's games.
///
/// The order of `games`, `field_slots`, and `umpires` is significant:
/// games are committed in input order, slot ordering breaks candidate
/// ties, and umpire crews are drawn in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemSpec {
    /// Season configuration, including game durations.
    pub season: Season,
    /// Teams participating in the season.
    #[serde(default)]
    pub teams: Vec<Team>,
    /// Fields games can be placed on.
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Published field time-slots.
    #[serde(default)]
    pub field_slots: Vec<FieldSlot>,
    /// Umpires available for crew assignment.
    #[serde(default)]
    pub umpires: Vec<Umpire>,
    /// Umpire availability windows.
    #[serde(default)]
    pub umpire_availability: Vec<UmpireAvailability>,
    /// Team blackout windows.
    #[serde(default)]
    pub team_blackouts: Vec<TeamBlackout>,
    /// Games to place, in commit order.
    #[serde(default)]
    pub games: Vec<Game>,
    /// Constraint configuration.
    #[serde(default)]
    pub constraints: ConstraintSet,
}

impl ProblemSpec {
    /// Creates an empty problem for the given season.
    pub fn new(season: Season) -> Self {
        Self {
            season,
            teams: Vec::new(),
            fields: Vec::new(),
            field_slots: Vec::new(),
            umpires: Vec::new(),
            umpire_availability: Vec::new(),
            team_blackouts: Vec::new(),
            games: Vec::new(),
            constraints: ConstraintSet::default(),
        }
    }

    /// Adds a team.
    pub fn with_team(mut self, team: Team) -> Self {
        self.teams.push(team);
        self
    }

    /// Adds a field.
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Adds a field slot.
    pub fn with_slot(mut self, slot: FieldSlot) -> Self {
        self.field_slots.push(slot);
        self
    }

    /// Adds an umpire.
    pub fn with_umpire(mut self, umpire: Umpire) -> Self {
        self.umpires.push(umpire);
        self
    }

    /// Adds an umpire availability window.
    pub fn with_availability(mut self, availability: UmpireAvailability) -> Self {
        self.umpire_availability.push(availability);
        self
    }

    /// Adds a team blackout window.
    pub fn with_blackout(mut self, blackout: TeamBlackout) -> Self {
        self.team_blackouts.push(blackout);
        self
    }

    /// Adds a game.
    pub fn with_game(mut self, game: Game) -> Self {
        self.games.push(game);
        self
    }

    /// Replaces the constraint configuration.
    pub fn with_constraints(mut self, constraints: ConstraintSet) -> Self {
        self.constraints = constraints;
        self
    }

    /// Looks up a field by id.
    pub fn field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Blackout windows for a given team-season, in input order.
    pub fn blackouts_for<'a>(
        &'a self,
        team_season_id: &'a str,
    ) -> impl Iterator<Item = &'a TeamBlackout> {
        self.team_blackouts
            .iter()
            .filter(move |b| b.team_season_id == team_season_id)
    }

    /// Availability windows for a given umpire, in input order.
    pub fn availability_for<'a>(
        &'a self,
        umpire_id: &'a str,
    ) -> impl Iterator<Item = &'a UmpireAvailability> {
        self.umpire_availability
            .iter()
            .filter(move |a| a.umpire_id == umpire_id)
    }

    /// Whether an umpire has any availability windows on record.
    pub fn has_availability_entries(&self, umpire_id: &str) -> bool {
        self.umpire_availability
            .iter()
            .any(|a| a.umpire_id == umpire_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::season::GameDurations;

    fn make_season() -> Season {
        Season::new(
            "s1",
            "2025-04-01".parse().unwrap(),
            "2025-09-30".parse().unwrap(),
            GameDurations::fixed(120),
        )
    }

    #[test]
    fn test_builder_accumulates_in_order() {
        let spec = ProblemSpec::new(make_season())
            .with_field(Field::new("f1"))
            .with_field(Field::new("f2"))
            .with_umpire(Umpire::new("u1"))
            .with_umpire(Umpire::new("u2"));

        assert_eq!(spec.fields.len(), 2);
        assert_eq!(spec.fields[0].id, "f1");
        assert_eq!(spec.umpires[1].id, "u2");
    }

    #[test]
    fn test_field_lookup() {
        let spec = ProblemSpec::new(make_season()).with_field(Field::new("f1"));
        assert!(spec.field("f1").is_some());
        assert!(spec.field("f2").is_none());
    }

    #[test]
    fn test_blackouts_for_filters_by_team() {
        let spec = ProblemSpec::new(make_season())
            .with_blackout(TeamBlackout::new(
                "ts1",
                "2025-06-07T00:00:00Z".parse().unwrap(),
                "2025-06-08T00:00:00Z".parse().unwrap(),
            ))
            .with_blackout(TeamBlackout::new(
                "ts2",
                "2025-06-14T00:00:00Z".parse().unwrap(),
                "2025-06-15T00:00:00Z".parse().unwrap(),
            ));

        assert_eq!(spec.blackouts_for("ts1").count(), 1);
        assert_eq!(spec.blackouts_for("ts3").count(), 0);
    }

    #[test]
    fn test_availability_entries() {
        let spec = ProblemSpec::new(make_season()).with_availability(UmpireAvailability::new(
            "u1",
            "2025-06-07T08:00:00Z".parse().unwrap(),
            "2025-06-07T20:00:00Z".parse().unwrap(),
        ));

        assert!(spec.has_availability_entries("u1"));
        assert!(!spec.has_availability_entries("u2"));
        assert_eq!(spec.availability_for("u1").count(), 1);
    }

    #[test]
    fn test_minimal_json_deserializes() {
        let json = r#"{
            "season": {
                "id": "s1",
                "startDate": "2025-04-01",
                "endDate": "2025-09-30",
                "gameDurations": {"defaultMinutes": 120}
            }
        }"#;
        let spec: ProblemSpec = serde_json::from_str(json).unwrap();
        assert!(spec.games.is_empty());
        assert!(spec.constraints.hard.respect_team_blackouts);
    }
}
