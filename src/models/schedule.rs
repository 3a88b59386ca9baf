//! Schedule (solution) model.
//!
//! A schedule records where every game landed: placed games become
//! assignments, unplaceable games are listed with the reason they
//! could not be placed. An unplaceable game is an ordinary outcome,
//! not an error.
//!
//! # Reference
//! Kendall, Knust, Ribeiro & Urrutia (2010), "Scheduling in sports:
//! An annotated bibliography", Computers & Operations Research 37(1)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::time::TimeWindow;

/// Overall outcome of a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Every game received an assignment.
    #[default]
    Completed,
    /// At least one game could not be placed.
    Partial,
}

/// A placed game: field, time window, and umpire crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// The game that was placed.
    pub game_id: String,
    /// Field the game plays on.
    pub field_id: String,
    /// Scheduled start time.
    pub start_time: DateTime<Utc>,
    /// Scheduled end time.
    pub end_time: DateTime<Utc>,
    /// Assigned umpire crew, in selection order. Empty when the game
    /// requires no umpires.
    pub umpire_ids: Vec<String>,
}

/// Why a game could not be placed.
///
/// When a game's candidates die at different stages, the reported
/// reason is the one from the furthest stage any candidate reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnscheduledReason {
    /// No slot offered a feasible window at all.
    NoViableFieldSlot,
    /// Every feasible window collided with field capacity.
    FieldAtCapacity,
    /// Every feasible window needed lights the field lacks.
    LightsUnavailable,
    /// Every feasible window overlapped a team blackout.
    BlackoutConflict,
    /// Placement would push a team past its daily game cap.
    DailyCapExceeded,
    /// No crew of the required size could be filled.
    NoAvailableUmpires,
}

impl UnscheduledReason {
    /// Human-readable description of the reason.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NoViableFieldSlot => "no field slot can hold the game within its window",
            Self::FieldAtCapacity => "every feasible slot is at field capacity",
            Self::LightsUnavailable => "game would start after dark on a field without lights",
            Self::BlackoutConflict => "every feasible slot overlaps a team blackout",
            Self::DailyCapExceeded => "a team would exceed its daily game cap",
            Self::NoAvailableUmpires => "not enough umpires available for the required crew",
        }
    }
}

/// A game the engine could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unscheduled {
    /// The game that was not placed.
    pub game_id: String,
    /// Why placement failed.
    pub reason: UnscheduledReason,
}

/// A complete scheduling result.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// `Completed` when every game was placed, `Partial` otherwise.
    pub status: ScheduleStatus,
    /// Placed games, in the order they were committed.
    pub assignments: Vec<Assignment>,
    /// Games that could not be placed, in input order.
    pub unscheduled: Vec<Unscheduled>,
}

impl Assignment {
    /// Creates an assignment with an empty crew.
    pub fn new(
        game_id: impl Into<String>,
        field_id: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            field_id: field_id.into(),
            start_time,
            end_time,
            umpire_ids: Vec::new(),
        }
    }

    /// Sets the umpire crew.
    pub fn with_umpires(mut self, umpire_ids: Vec<String>) -> Self {
        self.umpire_ids = umpire_ids;
        self
    }

    /// The occupied time window.
    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.start_time, self.end_time)
    }

    /// Game length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        self.window().duration_minutes()
    }
}

impl Schedule {
    /// Creates an empty, completed schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a placed game.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Records an unplaceable game and downgrades the status.
    pub fn add_unscheduled(&mut self, game_id: impl Into<String>, reason: UnscheduledReason) {
        self.status = ScheduleStatus::Partial;
        self.unscheduled.push(Unscheduled {
            game_id: game_id.into(),
            reason,
        });
    }

    /// Whether every game received an assignment.
    pub fn is_fully_scheduled(&self) -> bool {
        self.status == ScheduleStatus::Completed
    }

    /// Finds the assignment for a given game.
    pub fn assignment_for_game(&self, game_id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.game_id == game_id)
    }

    /// Returns all assignments on a given field.
    pub fn assignments_for_field(&self, field_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.field_id == field_id)
            .collect()
    }

    /// Returns all assignments a given umpire is crewed on.
    pub fn assignments_for_umpire(&self, umpire_id: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.umpire_ids.iter().any(|id| id == umpire_id))
            .collect()
    }

    /// Latest end time across all assignments.
    pub fn final_end_time(&self) -> Option<DateTime<Utc>> {
        self.assignments.iter().map(|a| a.end_time).max()
    }

    /// Number of placed games.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }
}
