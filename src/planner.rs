//! Move generation for the Towers of Hanoi.
//!
//! The minimal solution for `n` disks moves the top `n - 1` disks onto the
//! spare peg, moves the largest disk to the target, then moves the `n - 1`
//! disks from the spare peg onto it. It has exactly `2^n - 1` moves, which is
//! also the lower bound, so the sequence is never shortened or padded.

use std::iter::FusedIterator;

use tracing::debug;

use crate::towers::{Move, PegId, NUM_PEGS};

/// Number of moves in the minimal solution for `disks` disks: `2^disks - 1`.
///
/// # Panics
///
/// Panics if `disks > 64`.
pub const fn move_count(disks: u32) -> u64 {
    assert!(disks <= 64, "move count does not fit in u64");
    if disks == 0 {
        0
    } else {
        u64::MAX >> (64 - disks)
    }
}

/// Plans the moves that transfer `disks` disks from `from` to `to`.
///
/// Zero disks yield an empty plan.
pub fn plan(disks: u32, from: PegId, to: PegId, spare: PegId) -> Vec<Move> {
    debug_assert_distinct_pegs(from, to, spare);

    let capacity = usize::try_from(move_count(disks)).unwrap_or(usize::MAX);
    let mut moves = Vec::with_capacity(capacity);
    fill_moves(disks, from, to, spare, &mut moves);

    debug!(disks, from, to, moves = moves.len(), "planned moves");
    moves
}

fn fill_moves(disks: u32, from: PegId, to: PegId, spare: PegId, moves: &mut Vec<Move>) {
    if disks == 0 {
        return;
    }
    fill_moves(disks - 1, from, spare, to, moves);
    moves.push(Move::new(from, to));
    fill_moves(disks - 1, spare, to, from, moves);
}

/// Lazily produces the same sequence as [`plan`].
///
/// Memory use is bounded by the number of disks rather than the number of
/// moves.
pub fn plan_iter(disks: u32, from: PegId, to: PegId, spare: PegId) -> Moves {
    debug_assert_distinct_pegs(from, to, spare);

    let mut stack = Vec::with_capacity(disks as usize);
    if disks > 0 {
        stack.push(Frame {
            disks,
            from,
            to,
            spare,
            expanded: false,
        });
    }

    Moves {
        stack,
        remaining: move_count(disks),
    }
}

fn debug_assert_distinct_pegs(from: PegId, to: PegId, spare: PegId) {
    debug_assert!(
        from < NUM_PEGS && to < NUM_PEGS && spare < NUM_PEGS,
        "peg ids must be below {NUM_PEGS}"
    );
    debug_assert!(
        from != to && to != spare && from != spare,
        "pegs must be distinct, got {from}, {to}, {spare}"
    );
}

/// One pending subproblem of the lazy planner.
#[derive(Clone, Copy)]
struct Frame {
    disks: u32,
    from: PegId,
    to: PegId,
    spare: PegId,
    /// Set once the `disks - 1` disks above have been scheduled onto `spare`.
    expanded: bool,
}

/// Iterator returned by [`plan_iter`].
///
/// Walks the recursion with an explicit stack instead of call frames.
pub struct Moves {
    stack: Vec<Frame>,
    remaining: u64,
}

impl Iterator for Moves {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        while let Some(frame) = self.stack.pop() {
            if frame.expanded {
                // upper disks are parked on the spare peg; move the largest
                // and then bring them back on top of it
                if frame.disks > 1 {
                    self.stack.push(Frame {
                        disks: frame.disks - 1,
                        from: frame.spare,
                        to: frame.to,
                        spare: frame.from,
                        expanded: false,
                    });
                }
                self.remaining -= 1;
                return Some(Move::new(frame.from, frame.to));
            }

            self.stack.push(Frame {
                expanded: true,
                ..frame
            });
            if frame.disks > 1 {
                self.stack.push(Frame {
                    disks: frame.disks - 1,
                    from: frame.from,
                    to: frame.spare,
                    spare: frame.to,
                    expanded: false,
                });
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Moves {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::towers::Towers;

    fn moves(pairs: &[(PegId, PegId)]) -> Vec<Move> {
        pairs.iter().copied().map(Move::from).collect()
    }

    #[test]
    fn test_move_count() {
        assert_eq!(move_count(0), 0);
        assert_eq!(move_count(1), 1);
        assert_eq!(move_count(10), 1023);
        assert_eq!(move_count(64), u64::MAX);
    }

    #[test]
    fn test_plan_length_is_two_to_the_n_minus_one() {
        for disks in 0..=12 {
            let plan = plan(disks, 0, 1, 2);
            assert_eq!(
                plan.len() as u64,
                move_count(disks),
                "wrong plan length for {disks} disks"
            );
        }
    }

    #[test]
    fn test_zero_disks_plan_is_empty() {
        assert!(plan(0, 0, 1, 2).is_empty());
        assert_eq!(plan_iter(0, 0, 1, 2).next(), None);
    }

    #[test]
    fn test_one_disk() {
        assert_eq!(plan(1, 0, 1, 2), moves(&[(0, 1)]));
    }

    #[test]
    fn test_two_disks() {
        assert_eq!(plan(2, 0, 1, 2), moves(&[(0, 2), (0, 1), (2, 1)]));
    }

    #[test]
    fn test_three_disks_start_and_end_with_direct_move() {
        let plan = plan(3, 0, 1, 2);
        assert_eq!(plan.len(), 7);
        assert_eq!(plan.first(), Some(&Move::new(0, 1)));
        assert_eq!(plan.last(), Some(&Move::new(0, 1)));
    }

    #[test]
    fn test_plan_is_deterministic() {
        assert_eq!(plan(9, 2, 0, 1), plan(9, 2, 0, 1));
    }

    #[test]
    fn test_replay_keeps_every_peg_descending() {
        for disks in 1..=8 {
            let mut towers = Towers::new(disks);
            for mv in plan(disks, 0, 1, 2) {
                towers.apply(mv);
                assert!(towers.is_consistent(), "invalid state after {mv}");
            }
            let expected: Vec<u32> = (1..=disks).rev().collect();
            assert_eq!(towers.peg(1), expected.as_slice());
            assert!(towers.peg(0).is_empty());
            assert!(towers.peg(2).is_empty());
        }
    }

    #[test]
    fn test_arbitrary_source_and_target() {
        let mut towers = Towers::stacked_on(5, 2);
        for mv in plan(5, 2, 0, 1) {
            towers.apply(mv);
        }
        assert!(towers.is_solved_on(0));
        assert!(towers.is_consistent());
    }

    #[test]
    fn test_lazy_plan_matches_recursive_plan() {
        for disks in 0..=10 {
            let lazy: Vec<Move> = plan_iter(disks, 1, 2, 0).collect();
            assert_eq!(lazy, plan(disks, 1, 2, 0), "mismatch for {disks} disks");
        }
    }

    #[test]
    fn test_lazy_plan_stack_stays_bounded() {
        let disks = 12;
        let mut iter = plan_iter(disks, 0, 1, 2);
        while iter.next().is_some() {
            assert!(iter.stack.len() <= disks as usize);
        }
    }

    #[test]
    fn test_lazy_plan_size_hint_counts_down() {
        let mut iter = plan_iter(4, 0, 1, 2);
        assert_eq!(iter.size_hint(), (15, Some(15)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (13, Some(13)));
        assert_eq!(iter.by_ref().count(), 13);
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.next(), None);
    }
}
