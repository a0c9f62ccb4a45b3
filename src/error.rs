//! Error types for tower configuration, move application, replay and
//! interactive commands.

use thiserror::Error;

use crate::towers::PegId;

/// Rejected tower height.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("tower height must be a positive integer, got {0:?}")]
    NotANumber(String),

    #[error("tower height must be between 1 and {max}, got {height}")]
    OutOfRange { height: u64, max: u32 },
}

/// A move that cannot be applied to the current peg state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("peg {0} does not exist")]
    InvalidPeg(PegId),

    #[error("move from peg {0} to itself")]
    SamePeg(PegId),

    #[error("peg {0} is empty")]
    EmptyPeg(PegId),

    #[error("disk {disk} cannot be placed on smaller disk {onto}")]
    LargerOnSmaller { disk: u32, onto: u32 },
}

/// Failure found while replaying a move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    #[error("move {index} is illegal: {source}")]
    IllegalMove { index: usize, source: MoveError },

    #[error("sequence ends with {remaining} disk(s) off the target peg")]
    Unsolved { remaining: usize },
}

/// Unusable line in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),

    #[error("`set` needs a tower height")]
    MissingHeight,

    #[error(transparent)]
    Height(#[from] ConfigError),
}
