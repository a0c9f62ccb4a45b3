//! Checked replay of a move sequence.
//!
//! Confirms that a sequence is legal, that it ends with every disk on the
//! target peg, and whether it ever returns to a configuration it has already
//! been in. An optimal solution visits `2^n` distinct configurations.

use rustc_hash::FxHashSet;

use crate::error::ReplayError;
use crate::towers::{Move, PegId, Towers};

/// Peg index of each disk, indexed by `size - 1`.
///
/// Since every peg is sorted, this fully determines the peg state.
type ConfigurationKey = Vec<u8>;

/// Summary of a successful replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Replay {
    /// Number of moves applied.
    pub moves: usize,
    /// Distinct configurations seen, including the starting one.
    pub distinct_configurations: usize,
}

impl Replay {
    /// Whether some configuration was reached more than once.
    pub fn revisits_configuration(&self) -> bool {
        self.distinct_configurations != self.moves + 1
    }
}

/// Replays `moves` against `disks` disks stacked on `from` and checks that
/// they all end up on `to`.
pub fn replay(disks: u32, moves: &[Move], from: PegId, to: PegId) -> Result<Replay, ReplayError> {
    let mut towers = Towers::stacked_on(disks, from);
    let mut seen: FxHashSet<ConfigurationKey> = FxHashSet::default();
    seen.insert(configuration_key(&towers));

    for (index, &mv) in moves.iter().enumerate() {
        towers
            .try_apply(mv)
            .map_err(|source| ReplayError::IllegalMove { index, source })?;
        seen.insert(configuration_key(&towers));
    }

    if !towers.is_solved_on(to) {
        return Err(ReplayError::Unsolved {
            remaining: disks as usize - towers.peg(to).len(),
        });
    }

    Ok(Replay {
        moves: moves.len(),
        distinct_configurations: seen.len(),
    })
}

fn configuration_key(towers: &Towers) -> ConfigurationKey {
    let mut key = vec![0u8; towers.disks() as usize];
    for (peg_index, peg) in towers.pegs().iter().enumerate() {
        for &disk in peg {
            key[disk as usize - 1] = peg_index as u8;
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MoveError;
    use crate::planner::plan;

    #[test]
    fn test_optimal_plan_never_revisits() {
        for disks in 0..=10 {
            let report = replay(disks, &plan(disks, 0, 1, 2), 0, 1).unwrap();
            assert_eq!(report.moves + 1, 1 << disks);
            assert_eq!(report.distinct_configurations, 1 << disks);
            assert!(!report.revisits_configuration());
        }
    }

    #[test]
    fn test_detour_is_reported_as_revisit() {
        let mut moves = vec![Move::new(0, 2), Move::new(2, 0)];
        moves.extend(plan(2, 0, 1, 2));

        let report = replay(2, &moves, 0, 1).unwrap();
        assert_eq!(report.moves, 5);
        assert_eq!(report.distinct_configurations, 4);
        assert!(report.revisits_configuration());
    }

    #[test]
    fn test_illegal_move_is_located() {
        let moves = [Move::new(0, 1), Move::new(0, 1)];
        assert_eq!(
            replay(2, &moves, 0, 1),
            Err(ReplayError::IllegalMove {
                index: 1,
                source: MoveError::LargerOnSmaller { disk: 2, onto: 1 },
            })
        );
    }

    #[test]
    fn test_incomplete_plan_is_unsolved() {
        let mut moves = plan(3, 0, 1, 2);
        moves.pop();
        assert_eq!(
            replay(3, &moves, 0, 1),
            Err(ReplayError::Unsolved { remaining: 1 })
        );
    }

    #[test]
    fn test_plan_to_other_target() {
        let report = replay(4, &plan(4, 1, 2, 0), 1, 2).unwrap();
        assert_eq!(report.moves, 15);
        assert!(matches!(
            replay(4, &plan(4, 1, 2, 0), 1, 0),
            Err(ReplayError::Unsolved { remaining: 4 })
        ));
    }
}
