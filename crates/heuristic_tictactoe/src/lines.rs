//! Win detection against the eight fixed winning lines.

use crate::types::{Board, Cell, Coord, GRID_SIZE, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Boolean 3x3 mask, `true` where a line requires a mark.
pub type Mask = [[bool; GRID_SIZE]; GRID_SIZE];

/// Identifier of a winning line, in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum LineId {
    /// Top row.
    #[strum(serialize = "row 1")]
    #[serde(rename = "row 1")]
    Row1,
    /// Middle row.
    #[strum(serialize = "row 2")]
    #[serde(rename = "row 2")]
    Row2,
    /// Bottom row.
    #[strum(serialize = "row 3")]
    #[serde(rename = "row 3")]
    Row3,
    /// Left column.
    #[strum(serialize = "column 1")]
    #[serde(rename = "column 1")]
    Column1,
    /// Middle column.
    #[strum(serialize = "column 2")]
    #[serde(rename = "column 2")]
    Column2,
    /// Right column.
    #[strum(serialize = "column 3")]
    #[serde(rename = "column 3")]
    Column3,
    /// Diagonal from the top-left corner.
    #[strum(serialize = "top left to bottom right")]
    #[serde(rename = "top left to bottom right")]
    TopLeftToBottomRight,
    /// Diagonal from the top-right corner.
    #[strum(serialize = "top right to bottom left")]
    #[serde(rename = "top right to bottom left")]
    TopRightToBottomLeft,
}

/// A winning line: its identifier and the squares it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    mask: Mask,
}

impl Line {
    /// Line identifier.
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Squares required by this line.
    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// True when the line covers `at`.
    pub fn contains(&self, at: Coord) -> bool {
        self.mask[at.row()][at.col()]
    }

    /// Looks up the line with the given identifier.
    pub fn by_id(id: LineId) -> &'static Line {
        // LINES is declared in LineId order.
        &LINES[id as usize]
    }
}

const T: bool = true;
const F: bool = false;

/// All winning lines in declaration order: rows, columns, diagonals.
pub static LINES: [Line; 8] = [
    Line {
        id: LineId::Row1,
        mask: [[T, T, T], [F, F, F], [F, F, F]],
    },
    Line {
        id: LineId::Row2,
        mask: [[F, F, F], [T, T, T], [F, F, F]],
    },
    Line {
        id: LineId::Row3,
        mask: [[F, F, F], [F, F, F], [T, T, T]],
    },
    Line {
        id: LineId::Column1,
        mask: [[T, F, F], [T, F, F], [T, F, F]],
    },
    Line {
        id: LineId::Column2,
        mask: [[F, T, F], [F, T, F], [F, T, F]],
    },
    Line {
        id: LineId::Column3,
        mask: [[F, F, T], [F, F, T], [F, F, T]],
    },
    Line {
        id: LineId::TopLeftToBottomRight,
        mask: [[T, F, F], [F, T, F], [F, F, T]],
    },
    Line {
        id: LineId::TopRightToBottomLeft,
        mask: [[F, F, T], [F, T, F], [T, F, F]],
    },
];

/// Returns the first line, in declaration order, fully held by `player`.
///
/// The board is first reduced to a mask of the player's squares. A line
/// matches when intersecting it with that mask gives the line back
/// unchanged, so other squares never affect the result.
#[instrument(skip(board), fields(player = ?player))]
pub fn is_winner(board: &Board, player: Player) -> Option<&'static Line> {
    let target = Cell::from(player);
    let mut held: Mask = [[false; GRID_SIZE]; GRID_SIZE];
    for (i, row) in board.rows().iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            held[i][j] = *cell == target;
        }
    }

    let found = LINES.iter().find(|line| {
        let mut test: Mask = [[false; GRID_SIZE]; GRID_SIZE];
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                test[i][j] = line.mask[i][j] && held[i][j];
            }
        }
        test == line.mask
    });

    if let Some(line) = found {
        debug!(line = %line.id, "Line completed");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn fill(line: &Line, cell: Cell) -> Board {
        let mut board = Board::new();
        for at in Board::coords().filter(|at| line.contains(*at)) {
            board.set(at, cell);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(is_winner(&board, Player::Human).is_none());
        assert!(is_winner(&board, Player::Machine).is_none());
    }

    #[test]
    fn test_lines_declared_in_id_order() {
        let ids: Vec<_> = LINES.iter().map(Line::id).collect();
        let expected: Vec<_> = LineId::iter().collect();
        assert_eq!(ids, expected);
        for id in LineId::iter() {
            assert_eq!(Line::by_id(id).id(), id);
        }
    }

    #[test]
    fn test_every_line_has_three_squares() {
        for line in &LINES {
            let covered = line.mask().iter().flatten().filter(|b| **b).count();
            assert_eq!(covered, GRID_SIZE, "{}", line.id());
        }
    }

    #[test]
    fn test_each_line_detected_for_each_player() {
        for line in &LINES {
            for player in [Player::Human, Player::Machine] {
                let board = fill(line, player.into());
                let found = is_winner(&board, player).map(Line::id);
                assert_eq!(found, Some(line.id()), "{player:?} on {}", line.id());
                assert!(is_winner(&board, player.opponent()).is_none());
            }
        }
    }

    #[test]
    fn test_other_squares_do_not_matter() {
        for line in &LINES {
            let mut board = fill(line, Cell::Human);
            for at in Board::coords().filter(|at| !line.contains(*at)) {
                board.set(at, Cell::Machine);
            }
            assert_eq!(
                is_winner(&board, Player::Human).map(Line::id),
                Some(line.id())
            );
        }
    }

    #[test]
    fn test_partial_line_never_matches() {
        for line in &LINES {
            let squares: Vec<_> = Board::coords().filter(|at| line.contains(*at)).collect();
            for skip in &squares {
                let mut board = Board::new();
                for at in squares.iter().filter(|at| *at != skip) {
                    board.set(*at, Cell::Machine);
                }
                assert!(
                    is_winner(&board, Player::Machine).is_none(),
                    "{} matched without {skip}",
                    line.id()
                );
            }
        }
    }

    #[test]
    fn test_first_line_in_declaration_order_wins() {
        // Row 1 and column 1 both complete.
        let mut board = Board::new();
        for at in Board::coords().filter(|at| at.row() == 0 || at.col() == 0) {
            board.set(at, Cell::Human);
        }
        let found = is_winner(&board, Player::Human).map(Line::id);
        assert_eq!(found, Some(LineId::Row1));
    }

    #[test]
    fn test_line_names() {
        assert_eq!(LineId::Row1.to_string(), "row 1");
        assert_eq!(LineId::Column3.as_ref(), "column 3");
        assert_eq!(
            LineId::TopRightToBottomLeft.to_string(),
            "top right to bottom left"
        );
        assert_eq!(
            serde_json::to_string(&LineId::TopLeftToBottomRight).unwrap(),
            "\"top left to bottom right\""
        );
    }
}
