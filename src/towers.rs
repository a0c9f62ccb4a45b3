//! Peg state: three stacks of disks and the moves applied to them.
//!
//! Disks are identified by size, `1..=disks`. Each peg is stored bottom to
//! top, so a valid peg is strictly decreasing.

use std::fmt;

use tracing::trace;

use crate::error::MoveError;

/// Index of a peg, in `0..NUM_PEGS`.
pub type PegId = usize;

/// Number of pegs in the puzzle.
pub const NUM_PEGS: usize = 3;

/// Transfer of the top disk of `from` onto `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: PegId,
    pub to: PegId,
}

impl Move {
    pub const fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }
}

impl From<(PegId, PegId)> for Move {
    fn from((from, to): (PegId, PegId)) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Current arrangement of disks across the three pegs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Towers {
    pegs: [Vec<u32>; NUM_PEGS],
    disks: u32,
}

impl Towers {
    /// Creates the canonical configuration: all disks on peg 0.
    pub fn new(disks: u32) -> Self {
        Self::stacked_on(disks, 0)
    }

    /// Creates the canonical configuration with all disks on `peg`.
    ///
    /// # Panics
    ///
    /// Panics if `peg` is not a valid peg index.
    pub fn stacked_on(disks: u32, peg: PegId) -> Self {
        assert!(peg < NUM_PEGS, "peg {peg} does not exist");
        let mut pegs: [Vec<u32>; NUM_PEGS] = Default::default();
        pegs[peg] = (1..=disks).rev().collect();
        Self { pegs, disks }
    }

    /// Discards the current state and restacks `disks` disks on peg 0.
    pub fn reset(&mut self, disks: u32) {
        for peg in &mut self.pegs {
            peg.clear();
        }
        self.pegs[0].extend((1..=disks).rev());
        self.disks = disks;
    }

    /// Total number of disks in play.
    pub fn disks(&self) -> u32 {
        self.disks
    }

    /// Disk sizes on `peg`, bottom to top.
    pub fn peg(&self, peg: PegId) -> &[u32] {
        &self.pegs[peg]
    }

    /// All pegs, each bottom to top.
    pub fn pegs(&self) -> &[Vec<u32>; NUM_PEGS] {
        &self.pegs
    }

    /// Size of the top disk on `peg`, if any.
    pub fn top(&self, peg: PegId) -> Option<u32> {
        self.pegs[peg].last().copied()
    }

    /// Whether every disk sits on `peg`.
    pub fn is_solved_on(&self, peg: PegId) -> bool {
        self.pegs[peg].len() == self.disks as usize
    }

    /// Checks that each size `1..=disks` appears exactly once and that every
    /// peg is strictly decreasing from bottom to top.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.disks as usize + 1];
        for peg in &self.pegs {
            if peg.windows(2).any(|pair| pair[0] <= pair[1]) {
                return false;
            }
            for &disk in peg {
                if disk == 0 || disk > self.disks || seen[disk as usize] {
                    return false;
                }
                seen[disk as usize] = true;
            }
        }
        seen[1..].iter().all(|&present| present)
    }

    /// Applies a move after checking that it is legal.
    ///
    /// On error the state is left untouched. Returns the size of the moved
    /// disk.
    pub fn try_apply(&mut self, mv: Move) -> Result<u32, MoveError> {
        for peg in [mv.from, mv.to] {
            if peg >= NUM_PEGS {
                return Err(MoveError::InvalidPeg(peg));
            }
        }
        if mv.from == mv.to {
            return Err(MoveError::SamePeg(mv.from));
        }

        let disk = self.top(mv.from).ok_or(MoveError::EmptyPeg(mv.from))?;
        if let Some(onto) = self.top(mv.to) {
            if onto < disk {
                return Err(MoveError::LargerOnSmaller { disk, onto });
            }
        }

        self.pegs[mv.from].pop();
        self.pegs[mv.to].push(disk);
        trace!(%mv, disk, "applied move");
        Ok(disk)
    }

    /// Applies a move that is known to be legal, returning the moved disk.
    ///
    /// # Panics
    ///
    /// Panics if the move is illegal for the current state, e.g. its source
    /// peg is empty. This only happens when the caller has applied moves out
    /// of the order they were planned in.
    pub fn apply(&mut self, mv: Move) -> u32 {
        match self.try_apply(mv) {
            Ok(disk) => disk,
            Err(err) => panic!("move {mv} is out of sync with peg state: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stacks_all_disks_on_first_peg() {
        let towers = Towers::new(4);
        assert_eq!(towers.peg(0), &[4, 3, 2, 1]);
        assert!(towers.peg(1).is_empty());
        assert!(towers.peg(2).is_empty());
        assert!(towers.is_consistent());
    }

    #[test]
    fn test_stacked_on_uses_given_peg() {
        let towers = Towers::stacked_on(3, 2);
        assert_eq!(towers.peg(2), &[3, 2, 1]);
        assert!(towers.is_solved_on(2));
        assert!(!towers.is_solved_on(0));
    }

    #[test]
    fn test_zero_disks_is_trivially_solved() {
        let towers = Towers::new(0);
        assert!(towers.is_consistent());
        assert!(towers.is_solved_on(1));
    }

    #[test]
    fn test_apply_moves_top_disk() {
        let mut towers = Towers::new(1);
        let disk = towers.apply(Move::new(0, 1));
        assert_eq!(disk, 1);
        assert!(towers.peg(0).is_empty());
        assert_eq!(towers.peg(1), &[1]);
    }

    #[test]
    #[should_panic(expected = "peg 1 is empty")]
    fn test_apply_from_empty_peg_panics() {
        let mut towers = Towers::new(2);
        towers.apply(Move::new(1, 2));
    }

    #[test]
    #[should_panic(expected = "cannot be placed on smaller disk")]
    fn test_apply_onto_smaller_disk_panics() {
        let mut towers = Towers::new(2);
        towers.apply(Move::new(0, 1));
        towers.apply(Move::new(0, 1));
    }

    #[test]
    fn test_try_apply_rejects_without_mutating() {
        let mut towers = Towers::new(3);
        towers.apply(Move::new(0, 2));
        let before = towers.clone();

        assert_eq!(
            towers.try_apply(Move::new(0, 2)),
            Err(MoveError::LargerOnSmaller { disk: 2, onto: 1 })
        );
        assert_eq!(towers.try_apply(Move::new(1, 0)), Err(MoveError::EmptyPeg(1)));
        assert_eq!(towers.try_apply(Move::new(2, 2)), Err(MoveError::SamePeg(2)));
        assert_eq!(towers.try_apply(Move::new(0, 3)), Err(MoveError::InvalidPeg(3)));
        assert_eq!(towers, before);
    }

    #[test]
    fn test_reset_restores_canonical_configuration() {
        let mut towers = Towers::new(3);
        towers.apply(Move::new(0, 1));
        towers.apply(Move::new(0, 2));

        towers.reset(5);
        assert_eq!(towers, Towers::new(5));

        towers.reset(2);
        assert_eq!(towers.peg(0), &[2, 1]);
        assert!(towers.peg(1).is_empty());
        assert!(towers.peg(2).is_empty());
        assert_eq!(towers.disks(), 2);
    }

    #[test]
    fn test_is_consistent_detects_bad_order() {
        let mut towers = Towers::new(2);
        towers.pegs = [vec![], vec![1, 2], vec![]];
        assert!(!towers.is_consistent());

        towers.pegs = [vec![2], vec![2], vec![]];
        assert!(!towers.is_consistent());

        towers.pegs = [vec![], vec![2, 1], vec![]];
        assert!(towers.is_consistent());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(2, 0).to_string(), "2 -> 0");
        assert_eq!(Move::from((0, 1)), Move::new(0, 1));
    }
}
