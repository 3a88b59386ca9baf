//! Hard constraint checks for candidate placements.
//!
//! Checks run in a fixed stage order and a candidate is rejected at
//! the first stage it fails. The stage a candidate dies at is reported
//! back so the greedy pass can explain an unplaceable game by the
//! furthest stage any of its candidates reached.

use crate::models::{Field, Game, ProblemSpec, UnscheduledReason};
use crate::time::{day_key, local_hour, TimeWindow};

use super::candidates::Candidate;
use super::usage::UsageLedger;

/// The stage at which a candidate was rejected.
///
/// Variants are declared in pipeline order, so `Ord` compares by how
/// far a candidate got before dying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RejectStage {
    /// No candidate existed at all: nothing fit any slot.
    SlotFit,
    /// Field already at its parallel-game capacity.
    FieldCapacity,
    /// Start after dark on a field without lights.
    Lighting,
    /// Window overlaps a participating team's blackout.
    Blackout,
    /// A participating team is at its daily game cap.
    TeamDailyCap,
    /// The umpire crew could not be filled.
    UmpireCrew,
}

impl RejectStage {
    /// The reason code reported when this was the furthest stage any
    /// candidate reached.
    pub fn reason(&self) -> UnscheduledReason {
        match self {
            Self::SlotFit => UnscheduledReason::NoViableFieldSlot,
            Self::FieldCapacity => UnscheduledReason::FieldAtCapacity,
            Self::Lighting => UnscheduledReason::LightsUnavailable,
            Self::Blackout => UnscheduledReason::BlackoutConflict,
            Self::TeamDailyCap => UnscheduledReason::DailyCapExceeded,
            Self::UmpireCrew => UnscheduledReason::NoAvailableUmpires,
        }
    }
}

/// Whether the field can take one more game over the given window.
pub fn field_has_capacity(field: &Field, window: &TimeWindow, ledger: &UsageLedger) -> bool {
    ledger.overlapping_on_field(&field.id, window) < field.properties.max_parallel_games
}

/// Whether the lighting policy permits this start time on this field.
pub fn lighting_permits(spec: &ProblemSpec, field: &Field, window: &TimeWindow) -> bool {
    match spec.constraints.hard.active_lighting_rule() {
        Some(rule) => {
            local_hour(window.start, rule.time_zone) < rule.start_hour_local
                || field.properties.has_lights
        }
        None => true,
    }
}

/// Whether the window avoids every blackout of both participating
/// teams. Always true when blackout enforcement is disabled.
pub fn clear_of_blackouts(spec: &ProblemSpec, game: &Game, window: &TimeWindow) -> bool {
    if !spec.constraints.hard.respect_team_blackouts {
        return true;
    }
    let blocked = |team_season_id: &str| {
        spec.blackouts_for(team_season_id)
            .any(|b| b.window().overlaps(window))
    };
    !blocked(&game.home_team_season_id) && !blocked(&game.visitor_team_season_id)
}

/// Whether placing the game keeps both teams under the daily cap.
pub fn under_daily_caps(
    spec: &ProblemSpec,
    game: &Game,
    window: &TimeWindow,
    ledger: &UsageLedger,
) -> bool {
    match spec.constraints.hard.max_games_per_team_per_day {
        Some(cap) => {
            let day = day_key(window.start);
            ledger.team_games_on(&game.home_team_season_id, day) < cap
                && ledger.team_games_on(&game.visitor_team_season_id, day) < cap
        }
        None => true,
    }
}

/// Runs every hard constraint against a candidate, returning the first
/// stage that rejects it.
pub fn admit(
    spec: &ProblemSpec,
    game: &Game,
    candidate: &Candidate<'_>,
    ledger: &UsageLedger,
) -> Result<(), RejectStage> {
    // Candidate generation only emits windows inside their slot.
    debug_assert!(candidate.slot.window().contains_window(&candidate.window));

    if !field_has_capacity(candidate.field, &candidate.window, ledger) {
        return Err(RejectStage::FieldCapacity);
    }
    if !lighting_permits(spec, candidate.field, &candidate.window) {
        return Err(RejectStage::Lighting);
    }
    if !clear_of_blackouts(spec, game, &candidate.window) {
        return Err(RejectStage::Blackout);
    }
    if !under_daily_caps(spec, game, &candidate.window, ledger) {
        return Err(RejectStage::TeamDailyCap);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Assignment, FieldSlot, GameDurations, HardConstraints, LightingRule, Season, Team,
        TeamBlackout,
    };
    use chrono::{DateTime, Utc};

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().expect("test timestamp")
    }

    fn base_spec() -> ProblemSpec {
        ProblemSpec::new(Season::new(
            "s1",
            "2025-04-01".parse().unwrap(),
            "2025-09-30".parse().unwrap(),
            GameDurations::fixed(120),
        ))
        .with_team(Team::new("t1", "ts1"))
        .with_team(Team::new("t2", "ts2"))
    }

    fn sample_game() -> Game {
        Game::new(
            "g1",
            "ts1",
            "ts2",
            utc("2025-06-07T09:00:00Z"),
            utc("2025-06-08T06:00:00Z"),
        )
    }

    fn window(start: &str, end: &str) -> TimeWindow {
        TimeWindow::new(utc(start), utc(end))
    }

    #[test]
    fn test_stage_order_matches_pipeline_depth() {
        assert!(RejectStage::SlotFit < RejectStage::FieldCapacity);
        assert!(RejectStage::FieldCapacity < RejectStage::Lighting);
        assert!(RejectStage::Lighting < RejectStage::Blackout);
        assert!(RejectStage::Blackout < RejectStage::TeamDailyCap);
        assert!(RejectStage::TeamDailyCap < RejectStage::UmpireCrew);
    }

    #[test]
    fn test_stage_reasons() {
        assert_eq!(
            RejectStage::SlotFit.reason(),
            UnscheduledReason::NoViableFieldSlot
        );
        assert_eq!(
            RejectStage::UmpireCrew.reason(),
            UnscheduledReason::NoAvailableUmpires
        );
    }

    #[test]
    fn test_capacity_counts_overlaps_only() {
        let field = Field::new("f1");
        let mut ledger = UsageLedger::new();
        ledger.commit(
            &Assignment::new(
                "g0",
                "f1",
                utc("2025-06-07T09:00:00Z"),
                utc("2025-06-07T11:00:00Z"),
            ),
            "ts1",
            "ts2",
        );

        let clashing = window("2025-06-07T10:00:00Z", "2025-06-07T12:00:00Z");
        assert!(!field_has_capacity(&field, &clashing, &ledger));

        let adjacent = window("2025-06-07T11:00:00Z", "2025-06-07T13:00:00Z");
        assert!(field_has_capacity(&field, &adjacent, &ledger));

        let twin_diamond = Field::new("f1").with_max_parallel_games(2);
        assert!(field_has_capacity(&twin_diamond, &clashing, &ledger));
    }

    #[test]
    fn test_lighting_checks_local_hour() {
        let mut spec = base_spec();
        spec.constraints.hard = HardConstraints::new()
            .with_lighting_rule(LightingRule::new(18, chrono_tz::America::New_York));

        let unlit = Field::new("f1");
        let lit = Field::new("f2").with_lights(true);

        // 22:30 UTC on June 7 is 18:30 in New York (EDT).
        let evening = window("2025-06-07T22:30:00Z", "2025-06-08T00:30:00Z");
        assert!(!lighting_permits(&spec, &unlit, &evening));
        assert!(lighting_permits(&spec, &lit, &evening));

        // 20:00 UTC is 16:00 local, before the threshold.
        let afternoon = window("2025-06-07T20:00:00Z", "2025-06-07T22:00:00Z");
        assert!(lighting_permits(&spec, &unlit, &afternoon));
    }

    #[test]
    fn test_no_lighting_rule_permits_everything() {
        let spec = base_spec();
        let unlit = Field::new("f1");
        let midnight = window("2025-06-08T03:00:00Z", "2025-06-08T05:00:00Z");
        assert!(lighting_permits(&spec, &unlit, &midnight));
    }

    #[test]
    fn test_blackout_blocks_either_team() {
        let spec = base_spec()
            .with_blackout(TeamBlackout::new(
                "ts1",
                utc("2025-06-07T00:00:00Z"),
                utc("2025-06-07T12:00:00Z"),
            ))
            .with_blackout(TeamBlackout::new(
                "ts2",
                utc("2025-06-07T15:00:00Z"),
                utc("2025-06-07T18:00:00Z"),
            ));
        let game = sample_game();

        let morning = window("2025-06-07T09:00:00Z", "2025-06-07T11:00:00Z");
        assert!(!clear_of_blackouts(&spec, &game, &morning));

        let late_afternoon = window("2025-06-07T16:00:00Z", "2025-06-07T18:00:00Z");
        assert!(!clear_of_blackouts(&spec, &game, &late_afternoon));

        // Starting exactly when the first blackout ends is clear.
        let noon = window("2025-06-07T12:00:00Z", "2025-06-07T14:00:00Z");
        assert!(clear_of_blackouts(&spec, &game, &noon));
    }

    #[test]
    fn test_blackouts_ignored_when_disabled() {
        let mut spec = base_spec().with_blackout(TeamBlackout::new(
            "ts1",
            utc("2025-06-07T00:00:00Z"),
            utc("2025-06-08T00:00:00Z"),
        ));
        spec.constraints.hard.respect_team_blackouts = false;
        let game = sample_game();

        let morning = window("2025-06-07T09:00:00Z", "2025-06-07T11:00:00Z");
        assert!(clear_of_blackouts(&spec, &game, &morning));
    }

    #[test]
    fn test_daily_cap_counts_either_team() {
        let mut spec = base_spec();
        spec.constraints.hard = HardConstraints::new().with_team_daily_cap(1);
        let game = sample_game();

        let mut ledger = UsageLedger::new();
        ledger.commit(
            &Assignment::new(
                "g0",
                "f1",
                utc("2025-06-07T09:00:00Z"),
                utc("2025-06-07T11:00:00Z"),
            ),
            "ts2",
            "ts9",
        );

        // ts2 (the visitor) already played today.
        let same_day = window("2025-06-07T13:00:00Z", "2025-06-07T15:00:00Z");
        assert!(!under_daily_caps(&spec, &game, &same_day, &ledger));

        let next_day = window("2025-06-08T13:00:00Z", "2025-06-08T15:00:00Z");
        assert!(under_daily_caps(&spec, &game, &next_day, &ledger));
    }

    #[test]
    fn test_admit_reports_first_failing_stage() {
        let mut spec = base_spec()
            .with_field(Field::new("f1"))
            .with_slot(FieldSlot::new(
                "s1",
                "f1",
                utc("2025-06-07T09:00:00Z"),
                utc("2025-06-07T17:00:00Z"),
            ))
            .with_blackout(TeamBlackout::new(
                "ts1",
                utc("2025-06-07T00:00:00Z"),
                utc("2025-06-08T00:00:00Z"),
            ));
        spec.constraints.hard = HardConstraints::new().with_team_daily_cap(1);
        let game = sample_game();

        let mut ledger = UsageLedger::new();
        ledger.commit(
            &Assignment::new(
                "g0",
                "f1",
                utc("2025-06-07T09:00:00Z"),
                utc("2025-06-07T11:00:00Z"),
            ),
            "ts1",
            "ts2",
        );

        let slot = spec.field_slots[0].clone();
        let field = spec.fields[0].clone();
        let candidate = Candidate {
            slot: &slot,
            field: &field,
            window: window("2025-06-07T10:00:00Z", "2025-06-07T12:00:00Z"),
        };

        // Capacity, blackout, and daily cap all fail; capacity is the
        // first stage checked.
        assert_eq!(
            admit(&spec, &game, &candidate, &ledger),
            Err(RejectStage::FieldCapacity)
        );
    }

    #[test]
    fn test_admit_accepts_clean_candidate() {
        let spec = base_spec()
            .with_field(Field::new("f1"))
            .with_slot(FieldSlot::new(
                "s1",
                "f1",
                utc("2025-06-07T09:00:00Z"),
                utc("2025-06-07T17:00:00Z"),
            ));
        let game = sample_game();

        let slot = spec.field_slots[0].clone();
        let field = spec.fields[0].clone();
        let candidate = Candidate {
            slot: &slot,
            field: &field,
            window: window("2025-06-07T09:00:00Z", "2025-06-07T11:00:00Z"),
        };

        assert_eq!(admit(&spec, &game, &candidate, &UsageLedger::new()), Ok(()));
    }
}
