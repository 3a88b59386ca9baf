//! Greedy assignment of games to field slots and umpire crews.
//!
//! Games are committed strictly in input order. Each game walks its
//! ordered candidate list and takes the first candidate that clears
//! every hard constraint and can fill its umpire crew. Committed
//! assignments are never revisited: a later game sees earlier games
//! only as occupied capacity in the usage ledger.
//!
//! # Algorithm
//! Single-pass list scheduling with a fixed priority order (input
//! order) and earliest-fit placement per game. No backtracking, no
//! local search. Identical input always produces the identical
//! schedule.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2;
//! Rasmussen & Trick (2008), "Round robin scheduling - a survey"

use tracing::{debug, warn};

use crate::error::SpecResult;
use crate::models::{Assignment, Game, ProblemSpec, Schedule, UnscheduledReason};
use crate::validation;

use super::candidates::{select_crew, slot_candidates};
use super::filter::{self, RejectStage};
use super::usage::UsageLedger;

/// The scheduling engine.
///
/// Stateless between runs; all per-run state lives in a local usage
/// ledger. The optional candidate limit bounds how many candidates
/// are tried per game before giving up on it.
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler {
    candidate_limit: Option<usize>,
}

impl GreedyScheduler {
    /// Creates a scheduler that tries every candidate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the number of candidates tried per game. Useful for
    /// very large slot inventories where an early answer matters more
    /// than exhausting the list.
    pub fn with_candidate_limit(mut self, limit: usize) -> Self {
        self.candidate_limit = Some(limit);
        self
    }

    /// Validates the problem and schedules every game.
    ///
    /// Returns an error only for structurally invalid input. Games
    /// that cannot be placed appear in the schedule's `unscheduled`
    /// list with a reason code, and the status drops to `partial`.
    pub fn solve(&self, spec: &ProblemSpec) -> SpecResult<Schedule> {
        validation::validate(spec)?;

        debug!(
            games = spec.games.len(),
            slots = spec.field_slots.len(),
            umpires = spec.umpires.len(),
            "starting schedule run"
        );

        let mut ledger = UsageLedger::new();
        let mut schedule = Schedule::new();

        for game in &spec.games {
            match self.place(spec, game, &ledger) {
                Ok(assignment) => {
                    debug!(
                        game_id = %game.id,
                        field_id = %assignment.field_id,
                        start = %assignment.start_time,
                        "placed game"
                    );
                    ledger.commit(
                        &assignment,
                        &game.home_team_season_id,
                        &game.visitor_team_season_id,
                    );
                    schedule.add_assignment(assignment);
                }
                Err(reason) => {
                    warn!(game_id = %game.id, reason = ?reason, "could not place game");
                    schedule.add_unscheduled(&game.id, reason);
                }
            }
        }

        debug!(
            placed = schedule.assignment_count(),
            unscheduled = schedule.unscheduled.len(),
            "schedule run finished"
        );

        Ok(schedule)
    }

    /// Tries each candidate in order and builds the assignment for the
    /// first that is admitted and can fill its crew. On failure,
    /// reports the furthest rejection stage any candidate reached.
    fn place(
        &self,
        spec: &ProblemSpec,
        game: &Game,
        ledger: &UsageLedger,
    ) -> Result<Assignment, UnscheduledReason> {
        let candidates = slot_candidates(spec, game);
        let limit = self.candidate_limit.unwrap_or(usize::MAX);

        let mut deepest = RejectStage::SlotFit;
        for candidate in candidates.iter().take(limit) {
            match filter::admit(spec, game, candidate, ledger) {
                Ok(()) => match select_crew(spec, game, &candidate.window, ledger) {
                    Some(crew) => {
                        return Ok(Assignment::new(
                            &game.id,
                            &candidate.field.id,
                            candidate.window.start,
                            candidate.window.end,
                        )
                        .with_umpires(crew));
                    }
                    None => deepest = deepest.max(RejectStage::UmpireCrew),
                },
                Err(stage) => deepest = deepest.max(stage),
            }
        }

        Err(deepest.reason())
    }
}

/// Schedules a problem with the default greedy configuration.
pub fn solve(spec: &ProblemSpec) -> SpecResult<Schedule> {
    GreedyScheduler::new().solve(spec)
}
