//! The machine's heuristic move selection.
//!
//! There is no search. The machine follows a fixed plan keyed on the
//! round number:
//!
//! 1. Round 1 takes the center.
//! 2. Round 2 takes a corner whose opposite corner is also free.
//! 3. Later rounds first try to claim the corner opposite one the machine
//!    already holds, then block rows where the human has two marks, and
//!    otherwise take the first free square scanning column by column.
//!
//! Existing marks are never moved or removed.

use crate::types::{Board, Cell, Coord, GRID_SIZE};
use serde::Serialize;
use tracing::{debug, instrument};

/// Opposite corners, as `(first, opposite)`, in priority order.
///
/// Round 2 claims `first` of the first pair with both corners free. The
/// finish scan claims `opposite` of the first pair whose `first` the
/// machine holds.
pub const CORNER_PAIRS: [(Coord, Coord); 4] = [
    (Coord::TOP_RIGHT, Coord::BOTTOM_LEFT),
    (Coord::BOTTOM_RIGHT, Coord::TOP_LEFT),
    (Coord::TOP_LEFT, Coord::BOTTOM_RIGHT),
    (Coord::BOTTOM_LEFT, Coord::TOP_RIGHT),
];

/// Which branch of the heuristic produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Tactic {
    /// Opening move on the center square.
    Center,
    /// Second move on a corner with a free opposite.
    OpenCorner,
    /// Claimed the corner opposite one already held.
    Finish,
    /// Filled the gap in one or more rows holding two human marks.
    Block,
    /// First free square in column-major order.
    Fill,
}

/// Marks placed by the machine in one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
pub struct MachineMove {
    /// Branch that placed the marks.
    tactic: Tactic,
    /// Squares marked, in placement order.
    placed: Vec<Coord>,
}

impl MachineMove {
    fn single(tactic: Tactic, at: Coord) -> Self {
        Self {
            tactic,
            placed: vec![at],
        }
    }
}

/// Plays the machine's move for `round` directly onto `board`.
///
/// Returns `None` when no branch found a square to take, in which case
/// the board is unchanged.
#[instrument(skip(board))]
pub fn play(board: &mut Board, round: usize) -> Option<MachineMove> {
    let played = match round {
        1 => Some(center(board)),
        2 => open_corner(board),
        _ => finish(board)
            .or_else(|| block_rows(board))
            .or_else(|| fill(board)),
    };

    match &played {
        Some(mv) => debug!(tactic = %mv.tactic, placed = ?mv.placed, "Machine moved"),
        None => debug!("No square available"),
    }
    played
}

fn center(board: &mut Board) -> MachineMove {
    board.set(Coord::CENTER, Cell::Machine);
    MachineMove::single(Tactic::Center, Coord::CENTER)
}

fn open_corner(board: &mut Board) -> Option<MachineMove> {
    let (first, _) = CORNER_PAIRS
        .iter()
        .find(|(first, opposite)| board.is_empty(*first) && board.is_empty(*opposite))?;
    board.set(*first, Cell::Machine);
    Some(MachineMove::single(Tactic::OpenCorner, *first))
}

fn finish(board: &mut Board) -> Option<MachineMove> {
    let (_, opposite) = CORNER_PAIRS
        .iter()
        .find(|(first, opposite)| board.get(*first) == Cell::Machine && board.is_empty(*opposite))?;
    board.set(*opposite, Cell::Machine);
    Some(MachineMove::single(Tactic::Finish, *opposite))
}

/// Blocks every row holding two human marks and a gap.
///
/// The scan does not stop at the first blocked row: a later row that also
/// qualifies is blocked in the same pass.
fn block_rows(board: &mut Board) -> Option<MachineMove> {
    let mut placed = Vec::new();
    for row in 0..GRID_SIZE {
        let cells = board.rows()[row];
        let human = cells.iter().filter(|c| **c == Cell::Human).count();
        if human != GRID_SIZE - 1 {
            continue;
        }
        if let Some(col) = cells.iter().position(|c| *c == Cell::Empty)
            && let Some(at) = Coord::new(row, col)
        {
            board.set(at, Cell::Machine);
            placed.push(at);
        }
    }

    (!placed.is_empty()).then_some(MachineMove {
        tactic: Tactic::Block,
        placed,
    })
}

fn fill(board: &mut Board) -> Option<MachineMove> {
    let at = (0..GRID_SIZE)
        .flat_map(|col| (0..GRID_SIZE).filter_map(move |row| Coord::new(row, col)))
        .find(|at| board.is_empty(*at))?;
    board.set(at, Cell::Machine);
    Some(MachineMove::single(Tactic::Fill, at))
}
