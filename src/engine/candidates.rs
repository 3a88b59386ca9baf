//! Candidate generation.
//!
//! For each game, every published field slot is tested for fit. A slot
//! yields at most one candidate: the game is pushed as early as the
//! slot and the game's own window allow, never floated later. The
//! resulting list is ordered so that the greedy pass can simply take
//! the first candidate that survives constraint checks.

use crate::models::{Field, FieldSlot, Game, ProblemSpec};
use crate::time::{day_key, TimeWindow};

use super::usage::UsageLedger;

/// A feasible placement option for one game.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    /// The slot the game would occupy.
    pub slot: &'a FieldSlot,
    /// The field the slot belongs to.
    pub field: &'a Field,
    /// The exact window the game would play in.
    pub window: TimeWindow,
}

/// Generates every feasible candidate for a game, ordered by
/// preference tier, then window start, then field id, then slot id.
///
/// Field preference strictly dominates chronology: a later window on a
/// preferred field sorts ahead of an earlier window elsewhere. Games
/// with no preferences fall back to pure chronological order.
pub fn slot_candidates<'a>(spec: &'a ProblemSpec, game: &Game) -> Vec<Candidate<'a>> {
    let duration = spec
        .season
        .game_durations
        .minutes_for(day_key(game.earliest_start));

    let mut candidates: Vec<Candidate<'a>> = spec
        .field_slots
        .iter()
        .filter_map(|slot| {
            let field = spec.field(&slot.field_id)?;
            let window_start = slot.start_time.max(game.earliest_start);
            let window = TimeWindow::starting_at(window_start, duration);
            let fits_slot = window.end <= slot.end_time;
            let fits_game = window.end <= game.latest_end;
            (fits_slot && fits_game).then_some(Candidate {
                slot,
                field,
                window,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        game.preference_rank(&a.field.id)
            .cmp(&game.preference_rank(&b.field.id))
            .then_with(|| a.window.start.cmp(&b.window.start))
            .then_with(|| a.field.id.cmp(&b.field.id))
            .then_with(|| a.slot.id.cmp(&b.slot.id))
    });

    candidates
}

/// Selects the first `required_umpires` eligible umpires in roster
/// order, or `None` when the crew cannot be filled.
///
/// An umpire is eligible for a window when they are under their daily
/// cap, not already crewed on an overlapping game, and (when
/// availability is respected and they have availability windows on
/// record) some availability window contains the whole game.
pub fn select_crew(
    spec: &ProblemSpec,
    game: &Game,
    window: &TimeWindow,
    ledger: &UsageLedger,
) -> Option<Vec<String>> {
    let required = game.required_umpires as usize;
    if required == 0 {
        return Some(Vec::new());
    }

    let mut crew = Vec::with_capacity(required);
    for umpire in &spec.umpires {
        if umpire_is_eligible(spec, &umpire.id, umpire.max_games_per_day, window, ledger) {
            crew.push(umpire.id.clone());
            if crew.len() == required {
                return Some(crew);
            }
        }
    }

    None
}

fn umpire_is_eligible(
    spec: &ProblemSpec,
    umpire_id: &str,
    max_games_per_day: Option<u32>,
    window: &TimeWindow,
    ledger: &UsageLedger,
) -> bool {
    if let Some(cap) = max_games_per_day {
        if ledger.umpire_games_on(umpire_id, day_key(window.start)) >= cap {
            return false;
        }
    }

    if !ledger.umpire_is_free(umpire_id, window) {
        return false;
    }

    if spec.constraints.hard.respect_umpire_availability
        && spec.has_availability_entries(umpire_id)
    {
        return spec
            .availability_for(umpire_id)
            .any(|a| a.window().contains_window(window));
    }

    true
}
