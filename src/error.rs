//! Structural error types.
//!
//! The engine raises errors only for structurally invalid input,
//! detected by [`validation::validate`](crate::validation::validate)
//! before any scheduling work begins. A game that cannot be placed is
//! *not* an error; it is reported in the schedule's `unscheduled`
//! list with a reason code.

use thiserror::Error;

/// Result alias for operations that can reject a problem spec.
pub type SpecResult<T> = std::result::Result<T, SpecError>;

/// A structural defect in a problem spec.
///
/// Callers should treat these as data-integrity failures (the
/// equivalent of a bad request), not as transient conditions worth
/// retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    /// A game's time window is empty or inverted.
    #[error("game '{game_id}': earliestStart must be before latestEnd")]
    InvalidGameWindow { game_id: String },

    /// A game or blackout references a team-season id that does not
    /// exist in the roster.
    #[error("{context}: Unknown {field} '{value}'")]
    UnknownTeamReference {
        context: String,
        field: &'static str,
        value: String,
    },

    /// A field slot references a field that does not exist.
    #[error("field slot '{slot_id}': Unknown fieldId '{field_id}'")]
    UnknownFieldReference { slot_id: String, field_id: String },

    /// An availability window references an umpire that does not exist.
    #[error("availability window: Unknown umpireId '{umpire_id}'")]
    UnknownUmpireReference { umpire_id: String },

    /// Two entities of the same kind share an identifier.
    #[error("duplicate {entity} id '{id}'")]
    DuplicateId { entity: &'static str, id: String },
}

impl SpecError {
    /// Creates an `UnknownTeamReference` for a game's team field.
    pub fn unknown_game_team(
        game_id: &str,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        SpecError::UnknownTeamReference {
            context: format!("game '{game_id}'"),
            field,
            value: value.into(),
        }
    }

    /// Creates an `UnknownTeamReference` for a blackout window.
    pub fn unknown_blackout_team(value: impl Into<String>) -> Self {
        SpecError::UnknownTeamReference {
            context: "team blackout".to_string(),
            field: "teamSeasonId",
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_window_message() {
        let err = SpecError::InvalidGameWindow {
            game_id: "g1".into(),
        };
        assert_eq!(
            err.to_string(),
            "game 'g1': earliestStart must be before latestEnd"
        );
    }

    #[test]
    fn test_unknown_team_message_names_field() {
        let err = SpecError::unknown_game_team("g1", "homeTeamSeasonId", "ts-9");
        let msg = err.to_string();
        assert!(msg.contains("Unknown homeTeamSeasonId"));
        assert!(msg.contains("ts-9"));
        assert!(msg.contains("g1"));
    }

    #[test]
    fn test_unknown_field_message() {
        let err = SpecError::UnknownFieldReference {
            slot_id: "s1".into(),
            field_id: "f-missing".into(),
        };
        assert!(err.to_string().contains("Unknown fieldId 'f-missing'"));
    }

    #[test]
    fn test_blackout_team_message() {
        let err = SpecError::unknown_blackout_team("ts-2");
        assert!(err.to_string().contains("Unknown teamSeasonId 'ts-2'"));
    }
}
