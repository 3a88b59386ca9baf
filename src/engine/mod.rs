//! The scheduling engine: candidate generation, constraint filtering,
//! greedy commitment, and outcome metrics.
//!
//! # Algorithm
//!
//! `GreedyScheduler` walks the games in input order. For each game it
//! generates an ordered list of feasible slot windows, filters them
//! through the hard constraints, and commits the first survivor that
//! can also fill its umpire crew. Committed assignments are final.
//! The result is not optimal, but it is fast and byte-for-byte
//! reproducible, and every unplaced game carries an explanation.
//!
//! # Summary
//!
//! `ScheduleSummary` computes placement rate, per-field and per-umpire
//! game counts, and a breakdown of unplaced games by reason.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 2
//! - Kendall, Knust, Ribeiro & Urrutia (2010), "Scheduling in sports:
//!   An annotated bibliography"

mod candidates;
mod filter;
mod greedy;
mod summary;
mod usage;

pub use greedy::{solve, GreedyScheduler};
pub use summary::ScheduleSummary;
