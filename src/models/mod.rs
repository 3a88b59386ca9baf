//! League scheduling domain models.
//!
//! Provides the data types for describing a season's scheduling
//! problem and its solution. The vocabulary is sports-specific but
//! maps directly onto classic machine-scheduling concepts.
//!
//! # Domain Mappings
//!
//! | matchday | Machine scheduling |
//! |-----------|-----------------------------------|
//! | Game | Job with a release/due window |
//! | FieldSlot | Machine availability window |
//! | Field | Machine with parallel capacity |
//! | Umpire | Secondary renewable resource |
//! | Assignment | Job placement |

mod constraints;
mod field;
mod game;
mod problem;
mod schedule;
mod season;
mod team;
mod umpire;

pub use constraints::{ConstraintSet, HardConstraints, LightingRule};
pub use field::{Field, FieldProperties, FieldSlot};
pub use game::Game;
pub use problem::ProblemSpec;
pub use schedule::{Assignment, Schedule, ScheduleStatus, Unscheduled, UnscheduledReason};
pub use season::{GameDurations, Season};
pub use team::{Team, TeamBlackout};
pub use umpire::{Umpire, UmpireAvailability};
