//! Validated tower height.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Largest accepted tower height. The plan for `n` disks has `2^n - 1`
/// moves, so this keeps interactive sessions and printed plans tractable.
pub const MAX_HEIGHT: u32 = 20;

/// Height used when none is given.
pub const DEFAULT_HEIGHT: u32 = 3;

/// Number of disks in a tower, in `1..=MAX_HEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TowerHeight(u32);

impl TowerHeight {
    pub fn new(height: u32) -> Result<Self, ConfigError> {
        if (1..=MAX_HEIGHT).contains(&height) {
            Ok(Self(height))
        } else {
            Err(ConfigError::OutOfRange {
                height: height.into(),
                max: MAX_HEIGHT,
            })
        }
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for TowerHeight {
    fn default() -> Self {
        Self(DEFAULT_HEIGHT)
    }
}

impl FromStr for TowerHeight {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        // parse wide so that oversized numbers report as out of range
        let height: u64 = trimmed
            .parse()
            .map_err(|_| ConfigError::NotANumber(trimmed.to_string()))?;
        match u32::try_from(height) {
            Ok(height) => Self::new(height),
            Err(_) => Err(ConfigError::OutOfRange {
                height,
                max: MAX_HEIGHT,
            }),
        }
    }
}

impl fmt::Display for TowerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
