//! Input validation for scheduling problems.
//!
//! Checks structural integrity of a [`ProblemSpec`] before any
//! scheduling work begins. Detects:
//! - Inverted or empty game windows
//! - Games referencing unknown team-seasons
//! - Field slots referencing unknown fields
//! - Duplicate IDs
//! - Availability windows referencing unknown umpires
//! - Blackouts referencing unknown team-seasons
//!
//! Validation is fail-fast: the first defect found is returned and no
//! further checks run. Checks run in the order listed above, each pass
//! scanning the whole input before the next begins, and each pass
//! walking its entities in input order, so the reported error is
//! deterministic for a given input.

use std::collections::HashSet;

use crate::error::{SpecError, SpecResult};
use crate::models::ProblemSpec;

/// Validates a problem spec, returning the first structural defect.
///
/// A spec that passes validation can still produce a partial schedule;
/// this only guarantees the input is internally consistent enough for
/// the engine to reason about.
pub fn validate(spec: &ProblemSpec) -> SpecResult<()> {
    let team_season_ids: HashSet<&str> = spec
        .teams
        .iter()
        .map(|t| t.team_season_id.as_str())
        .collect();
    let field_ids: HashSet<&str> = spec.fields.iter().map(|f| f.id.as_str()).collect();
    let umpire_ids: HashSet<&str> = spec.umpires.iter().map(|u| u.id.as_str()).collect();

    check_game_windows(spec)?;
    check_game_team_references(spec, &team_season_ids)?;
    check_slot_field_references(spec, &field_ids)?;
    check_duplicate_ids(spec)?;
    check_availability_references(spec, &umpire_ids)?;
    check_blackout_references(spec, &team_season_ids)?;

    Ok(())
}

/// Every game window must be non-empty: strictly `earliest < latest`.
fn check_game_windows(spec: &ProblemSpec) -> SpecResult<()> {
    for game in &spec.games {
        if !game.has_valid_window() {
            return Err(SpecError::InvalidGameWindow {
                game_id: game.id.clone(),
            });
        }
    }
    Ok(())
}

/// Both team references of every game must exist in the roster. The
/// home side is checked before the visitor side.
fn check_game_team_references(
    spec: &ProblemSpec,
    team_season_ids: &HashSet<&str>,
) -> SpecResult<()> {
    for game in &spec.games {
        if !team_season_ids.contains(game.home_team_season_id.as_str()) {
            return Err(SpecError::unknown_game_team(
                &game.id,
                "homeTeamSeasonId",
                &game.home_team_season_id,
            ));
        }
        if !team_season_ids.contains(game.visitor_team_season_id.as_str()) {
            return Err(SpecError::unknown_game_team(
                &game.id,
                "visitorTeamSeasonId",
                &game.visitor_team_season_id,
            ));
        }
    }
    Ok(())
}

/// Every field slot must point at a declared field.
fn check_slot_field_references(spec: &ProblemSpec, field_ids: &HashSet<&str>) -> SpecResult<()> {
    for slot in &spec.field_slots {
        if !field_ids.contains(slot.field_id.as_str()) {
            return Err(SpecError::UnknownFieldReference {
                slot_id: slot.id.clone(),
                field_id: slot.field_id.clone(),
            });
        }
    }
    Ok(())
}

/// No two entities of the same kind may share an identifier.
fn check_duplicate_ids(spec: &ProblemSpec) -> SpecResult<()> {
    let mut seen = HashSet::new();
    for game in &spec.games {
        if !seen.insert(game.id.as_str()) {
            return Err(SpecError::DuplicateId {
                entity: "game",
                id: game.id.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for team in &spec.teams {
        if !seen.insert(team.team_season_id.as_str()) {
            return Err(SpecError::DuplicateId {
                entity: "teamSeason",
                id: team.team_season_id.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for field in &spec.fields {
        if !seen.insert(field.id.as_str()) {
            return Err(SpecError::DuplicateId {
                entity: "field",
                id: field.id.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for slot in &spec.field_slots {
        if !seen.insert(slot.id.as_str()) {
            return Err(SpecError::DuplicateId {
                entity: "fieldSlot",
                id: slot.id.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    for umpire in &spec.umpires {
        if !seen.insert(umpire.id.as_str()) {
            return Err(SpecError::DuplicateId {
                entity: "umpire",
                id: umpire.id.clone(),
            });
        }
    }

    Ok(())
}

/// Every availability window must point at a declared umpire.
fn check_availability_references(
    spec: &ProblemSpec,
    umpire_ids: &HashSet<&str>,
) -> SpecResult<()> {
    for availability in &spec.umpire_availability {
        if !umpire_ids.contains(availability.umpire_id.as_str()) {
            return Err(SpecError::UnknownUmpireReference {
                umpire_id: availability.umpire_id.clone(),
            });
        }
    }
    Ok(())
}

/// Every blackout must point at a declared team-season.
fn check_blackout_references(
    spec: &ProblemSpec,
    team_season_ids: &HashSet<&str>,
) -> SpecResult<()> {
    for blackout in &spec.team_blackouts {
        if !team_season_ids.contains(blackout.team_season_id.as_str()) {
            return Err(SpecError::unknown_blackout_team(&blackout.team_season_id));
        }
    }
    Ok(())
}
