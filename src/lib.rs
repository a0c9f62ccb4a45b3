//! Towers of Hanoi Library
//!
//! Plans the minimal move sequence for moving a tower of disks between pegs
//! and replays it one move at a time against an explicit peg state.

pub mod config;
pub mod error;
pub mod interactive;
pub mod listing;
mod planner;
pub mod replay;
pub mod session;
pub mod towers;

pub use config::{TowerHeight, DEFAULT_HEIGHT, MAX_HEIGHT};
pub use error::{CommandError, ConfigError, MoveError, ReplayError};
pub use planner::{move_count, plan, plan_iter, Moves};
pub use session::{Session, Step};
pub use towers::{Move, PegId, Towers, NUM_PEGS};
