//! Deterministic game scheduling for sports leagues.
//!
//! Assigns a season's games to field time-slots and umpire crews under
//! hard constraints. Given identical input, the engine always produces
//! the identical schedule. A game that cannot be placed is part of the
//! result, not an error: it is reported with a reason code and the
//! schedule status drops to `partial`.
//!
//! # Modules
//!
//! - **`models`**: Domain types such as `Season`, `Game`, `Field`,
//!   `FieldSlot`, `Umpire`, `ProblemSpec`, and `Schedule`
//! - **`engine`**: Candidate generation, constraint filtering, the
//!   greedy committer, and outcome metrics
//! - **`validation`**: Structural input checks run before scheduling
//! - **`time`**: Time window arithmetic and calendar helpers
//! - **`error`**: Structural error types
//!
//! # Pipeline
//!
//! A run validates the input, generates ordered slot candidates for
//! each game, filters them through the hard constraints, and commits
//! games one at a time in input order with no backtracking. Placement
//! is earliest-fit within each slot, and a game's field preference
//! outranks chronology when ordering its candidates.
//!
//! # References
//!
//! - Kendall, Knust, Ribeiro & Urrutia (2010), "Scheduling in sports:
//!   An annotated bibliography"
//! - Rasmussen & Trick (2008), "Round robin scheduling - a survey"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod engine;
pub mod error;
pub mod models;
pub mod time;
pub mod validation;
