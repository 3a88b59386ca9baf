//! Schedule outcome metrics.
//!
//! Computes headline numbers from a finished schedule, for reporting
//! and for deciding whether a run is good enough to publish.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | Fraction of games that received an assignment |
//! | Games per Field | Committed games by field, every field listed |
//! | Games per Umpire | Crewed games by umpire, every umpire listed |
//! | Unscheduled by Reason | Unplaced games by reason code |

use std::collections::HashMap;

use crate::models::{ProblemSpec, Schedule, UnscheduledReason};

/// Headline numbers for a finished schedule.
#[derive(Debug, Clone)]
pub struct ScheduleSummary {
    /// Total games in the run (placed plus unplaced).
    pub total_games: usize,
    /// Games that received an assignment.
    pub placed: usize,
    /// Games that could not be placed.
    pub unplaced: usize,
    /// `placed / total_games`, or 1.0 for an empty run.
    pub placement_rate: f64,
    /// Committed games per field. Fields without games appear with a
    /// count of zero.
    pub games_per_field: HashMap<String, usize>,
    /// Crewed games per umpire. Umpires without games appear with a
    /// count of zero.
    pub games_per_umpire: HashMap<String, usize>,
    /// Unplaced games per reason code.
    pub unscheduled_by_reason: HashMap<UnscheduledReason, usize>,
}

impl ScheduleSummary {
    /// Computes summary metrics from a schedule and the problem it
    /// solved.
    pub fn calculate(schedule: &Schedule, spec: &ProblemSpec) -> Self {
        let placed = schedule.assignments.len();
        let unplaced = schedule.unscheduled.len();
        let total_games = placed + unplaced;

        let placement_rate = if total_games == 0 {
            1.0
        } else {
            placed as f64 / total_games as f64
        };

        let mut games_per_field: HashMap<String, usize> = spec
            .fields
            .iter()
            .map(|field| (field.id.clone(), 0))
            .collect();
        let mut games_per_umpire: HashMap<String, usize> = spec
            .umpires
            .iter()
            .map(|umpire| (umpire.id.clone(), 0))
            .collect();
        for assignment in &schedule.assignments {
            *games_per_field
                .entry(assignment.field_id.clone())
                .or_insert(0) += 1;
            for umpire_id in &assignment.umpire_ids {
                *games_per_umpire.entry(umpire_id.clone()).or_insert(0) += 1;
            }
        }

        let mut unscheduled_by_reason: HashMap<UnscheduledReason, usize> = HashMap::new();
        for unscheduled in &schedule.unscheduled {
            *unscheduled_by_reason.entry(unscheduled.reason).or_insert(0) += 1;
        }

        Self {
            total_games,
            placed,
            unplaced,
            placement_rate,
            games_per_field,
            games_per_umpire,
            unscheduled_by_reason,
        }
    }

    /// Whether the run placed at least the given fraction of games.
    pub fn meets_placement_rate(&self, min_rate: f64) -> bool {
        self.placement_rate >= min_rate
    }
}
