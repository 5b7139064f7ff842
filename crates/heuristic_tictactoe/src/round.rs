//! Round counting derived from board contents.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Last round the heuristic plays before the game is called stale.
pub const LAST_ROUND: usize = 4;

/// Current round: one more than the number of machine marks on the board.
///
/// Round 1 means the machine has not moved yet.
#[instrument(skip(board))]
pub fn round(board: &Board) -> usize {
    board.count(Cell::Machine) + 1
}

/// True once the round passes [`LAST_ROUND`].
pub fn is_stale(round: usize) -> bool {
    round > LAST_ROUND
}

/// Human-readable round label, numbered by machine moves made so far.
pub fn round_label(round: usize) -> String {
    format!("round #{}", round.saturating_sub(1))
}
