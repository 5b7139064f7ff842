//! Core domain types for the heuristic tic-tac-toe board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const GRID_SIZE: usize = 3;

/// A participant in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The person submitting the board.
    Human,
    /// The heuristic strategy.
    Machine,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Machine,
            Player::Machine => Player::Human,
        }
    }

    /// Signed wire value of this player's mark.
    pub fn value(self) -> i64 {
        match self {
            Player::Human => 1,
            Player::Machine => -1,
        }
    }

    /// Marker shown on the board.
    pub fn marker(self) -> &'static str {
        match self {
            Player::Human => "O",
            Player::Machine => "X",
        }
    }
}

/// A single square on the board.
///
/// The sign of [`Cell::value`] carries player identity: `0` is empty,
/// `+1` the human, `-1` the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by the human.
    Human,
    /// Marked by the machine.
    Machine,
}

impl Cell {
    /// Maps a signed wire value to a cell. Unknown values are empty.
    pub fn from_value(value: i64) -> Self {
        match value {
            1 => Cell::Human,
            -1 => Cell::Machine,
            _ => Cell::Empty,
        }
    }

    /// Signed wire value of this cell.
    pub fn value(self) -> i64 {
        match self {
            Cell::Empty => 0,
            Cell::Human => 1,
            Cell::Machine => -1,
        }
    }

    /// Owner of the cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Machine => Some(Player::Machine),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Human => Cell::Human,
            Player::Machine => Cell::Machine,
        }
    }
}

/// Row/column address of a cell, both in `0..GRID_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Top-left corner.
    pub const TOP_LEFT: Coord = Coord { row: 0, col: 0 };
    /// Top-right corner.
    pub const TOP_RIGHT: Coord = Coord { row: 0, col: 2 };
    /// Center square.
    pub const CENTER: Coord = Coord {
        row: GRID_SIZE / 2,
        col: GRID_SIZE / 2,
    };
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Coord = Coord { row: 2, col: 0 };
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Coord = Coord { row: 2, col: 2 };

    /// Creates a coordinate, or `None` when either index is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Self { row, col })
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col
    }

    /// True for the four corner squares.
    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == GRID_SIZE - 1) && (self.col == 0 || self.col == GRID_SIZE - 1)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Dense 3x3 board in row-major order.
///
/// Every square always holds one of the three [`Cell`] values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit rows.
    pub fn from_rows(cells: [[Cell; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Overwrites the cell at the given coordinate.
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at) == Cell::Empty
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Number of squares holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().flatten().filter(|c| **c == cell).count()
    }

    /// True when no empty square remains.
    pub fn is_full(&self) -> bool {
        self.count(Cell::Empty) == 0
    }

    /// All coordinates in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Coord { row, col }))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line = row
                .iter()
                .map(|cell| cell.player().map_or(".", Player::marker))
                .collect::<Vec<_>>()
                .join("|");
            f.write_str(&line)?;
            if i < GRID_SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_from_value() {
        assert_eq!(Cell::from_value(0), Cell::Empty);
        assert_eq!(Cell::from_value(1), Cell::Human);
        assert_eq!(Cell::from_value(-1), Cell::Machine);
        assert_eq!(Cell::from_value(7), Cell::Empty);
        assert_eq!(Cell::from_value(-3), Cell::Empty);
    }

    #[test]
    fn test_cell_value_sign_matches_player() {
        assert_eq!(Cell::from(Player::Human).value(), Player::Human.value());
        assert_eq!(Cell::from(Player::Machine).value(), Player::Machine.value());
        assert_eq!(Cell::Empty.value(), 0);
    }

    #[test]
    fn test_coord_bounds() {
        assert_eq!(Coord::new(2, 2), Some(Coord::BOTTOM_RIGHT));
        assert_eq!(Coord::new(3, 0), None);
        assert_eq!(Coord::new(0, 3), None);
    }

    #[test]
    fn test_corners() {
        let corners: Vec<_> = Board::coords().filter(|c| c.is_corner()).collect();
        assert_eq!(
            corners,
            vec![
                Coord::TOP_LEFT,
                Coord::TOP_RIGHT,
                Coord::BOTTOM_LEFT,
                Coord::BOTTOM_RIGHT
            ]
        );
        assert!(!Coord::CENTER.is_corner());
    }

    #[test]
    fn test_board_count_and_full() {
        let mut board = Board::new();
        assert_eq!(board.count(Cell::Empty), 9);
        board.set(Coord::CENTER, Cell::Machine);
        assert_eq!(board.count(Cell::Machine), 1);
        assert!(!board.is_full());

        for at in Board::coords() {
            board.set(at, Cell::Human);
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Coord::TOP_LEFT, Cell::Human);
        board.set(Coord::CENTER, Cell::Machine);
        assert_eq!(board.to_string(), "O|.|.\n-+-+-\n.|X|.\n-+-+-\n.|.|.");
    }
}
