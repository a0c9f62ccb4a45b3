//! A puzzle being stepped through: peg state plus the moves not yet applied.

use std::collections::VecDeque;

use tracing::info;

use crate::config::TowerHeight;
use crate::planner::plan;
use crate::towers::{Move, PegId, Towers};

const SOURCE: PegId = 0;
const TARGET: PegId = 1;
const SPARE: PegId = 2;

/// Result of advancing a session by one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based position of the move in the plan.
    pub number: usize,
    pub mv: Move,
    /// Size of the disk that moved.
    pub disk: u32,
}

/// Puzzle state driven one move at a time, from peg 0 to peg 1.
#[derive(Debug, Clone)]
pub struct Session {
    height: TowerHeight,
    towers: Towers,
    pending: VecDeque<Move>,
    applied: usize,
}

impl Session {
    pub fn new(height: TowerHeight) -> Self {
        let mut session = Self {
            height,
            towers: Towers::new(height.get()),
            pending: VecDeque::new(),
            applied: 0,
        };
        session.restart();
        session
    }

    /// Replaces the puzzle with a fresh one of the given height.
    pub fn set_height(&mut self, height: TowerHeight) {
        self.height = height;
        self.restart();
    }

    /// Restacks all disks on the source peg and replans.
    pub fn restart(&mut self) {
        let disks = self.height.get();
        self.towers.reset(disks);
        self.pending = plan(disks, SOURCE, TARGET, SPARE).into();
        self.applied = 0;
        info!(disks, moves = self.pending.len(), "session started");
    }

    /// Applies the next planned move.
    ///
    /// # Panics
    ///
    /// Panics if every move has already been applied; check
    /// [`is_finished`](Self::is_finished) first.
    pub fn step(&mut self) -> Step {
        let Some(mv) = self.pending.pop_front() else {
            panic!(
                "no moves left: all {} moves already applied",
                self.applied
            );
        };
        let disk = self.towers.apply(mv);
        self.applied += 1;
        Step {
            number: self.applied,
            mv,
            disk,
        }
    }

    pub fn height(&self) -> TowerHeight {
        self.height
    }

    pub fn towers(&self) -> &Towers {
        &self.towers
    }

    /// Number of moves still to apply.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    /// Number of moves applied since the last (re)start.
    pub fn applied(&self) -> usize {
        self.applied
    }

    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }
}
