//! Plain-text listings of peg state and move plans.

use crate::session::Step;
use crate::towers::{Move, Towers};

/// Formats each peg on its own line, disks bottom to top.
///
/// ```text
/// 0 | 3 2
/// 1 | 1
/// 2 |
/// ```
pub fn format_towers(towers: &Towers) -> String {
    let mut output = String::new();
    for (peg_index, peg) in towers.pegs().iter().enumerate() {
        output.push_str(&format!("{peg_index} |"));
        for disk in peg {
            output.push_str(&format!(" {disk}"));
        }
        output.push('\n');
    }
    output
}

/// Formats a single applied step, e.g. `3: disk 1 2 -> 1`.
pub fn format_step(step: &Step) -> String {
    format!("{}: disk {} {}", step.number, step.disk, step.mv)
}

/// Formats a numbered plan, one move per line, with the size of each moved
/// disk.
///
/// # Panics
///
/// Panics if `moves` cannot be applied in order starting from `start`.
pub fn format_plan(start: &Towers, moves: &[Move]) -> String {
    let mut towers = start.clone();
    let mut output = String::new();
    for (index, &mv) in moves.iter().enumerate() {
        let step = Step {
            number: index + 1,
            mv,
            disk: towers.apply(mv),
        };
        output.push_str(&format_step(&step));
        output.push('\n');
    }
    output
}
