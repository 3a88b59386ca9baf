//! Running usage state for committed assignments.
//!
//! The greedy pass commits games one at a time; this ledger is the
//! only state it carries between games. Later games see every earlier
//! commitment through these counters, never through re-scanning the
//! schedule.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::Assignment;
use crate::time::{day_key, TimeWindow};

/// Occupancy built up by committed assignments.
#[derive(Debug, Default)]
pub struct UsageLedger {
    /// Committed windows per field.
    field_windows: HashMap<String, Vec<TimeWindow>>,
    /// Games per team-season per calendar day (UTC).
    team_day_counts: HashMap<(String, NaiveDate), u32>,
    /// Games per umpire per calendar day (UTC).
    umpire_day_counts: HashMap<(String, NaiveDate), u32>,
    /// Committed windows per umpire.
    umpire_windows: HashMap<String, Vec<TimeWindow>>,
}

impl UsageLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed games on a field whose windows overlap the
    /// given window.
    pub fn overlapping_on_field(&self, field_id: &str, window: &TimeWindow) -> u32 {
        self.field_windows
            .get(field_id)
            .map(|windows| windows.iter().filter(|w| w.overlaps(window)).count() as u32)
            .unwrap_or(0)
    }

    /// Games already committed for a team on a given day.
    pub fn team_games_on(&self, team_season_id: &str, day: NaiveDate) -> u32 {
        self.team_day_counts
            .get(&(team_season_id.to_string(), day))
            .copied()
            .unwrap_or(0)
    }

    /// Games already committed for an umpire on a given day.
    pub fn umpire_games_on(&self, umpire_id: &str, day: NaiveDate) -> u32 {
        self.umpire_day_counts
            .get(&(umpire_id.to_string(), day))
            .copied()
            .unwrap_or(0)
    }

    /// Whether an umpire has no committed window overlapping the given
    /// window.
    pub fn umpire_is_free(&self, umpire_id: &str, window: &TimeWindow) -> bool {
        self.umpire_windows
            .get(umpire_id)
            .map(|windows| windows.iter().all(|w| !w.overlaps(window)))
            .unwrap_or(true)
    }

    /// Records a committed assignment: field occupancy, both teams'
    /// daily counts, and every crewed umpire's day count and window.
    pub fn commit(
        &mut self,
        assignment: &Assignment,
        home_team_season_id: &str,
        visitor_team_season_id: &str,
    ) {
        let window = assignment.window();
        let day = day_key(assignment.start_time);

        self.field_windows
            .entry(assignment.field_id.clone())
            .or_default()
            .push(window);

        *self
            .team_day_counts
            .entry((home_team_season_id.to_string(), day))
            .or_insert(0) += 1;
        *self
            .team_day_counts
            .entry((visitor_team_season_id.to_string(), day))
            .or_insert(0) += 1;

        for umpire_id in &assignment.umpire_ids {
            *self
                .umpire_day_counts
                .entry((umpire_id.clone(), day))
                .or_insert(0) += 1;
            self.umpire_windows
                .entry(umpire_id.clone())
                .or_default()
                .push(window);
        }
    }
}
