//! Heuristic tic-tac-toe engine.
//!
//! Plays one round per request against a human using a fixed heuristic.
//! Nothing is kept between requests: the client re-submits the whole board
//! every turn and the engine re-derives everything from it.
//!
//! # Architecture
//!
//! - **Normalizer**: sparse submission to dense [`Board`]
//! - **Win detection**: [`is_winner`] against the eight [`LINES`]
//! - **Round counter**: [`round`] and staleness from machine marks
//! - **Strategy**: [`play`] places the machine's move
//! - **Engine**: [`evaluate`] ties the above into a [`Turn`]
//!
//! # Example
//!
//! ```
//! use heuristic_tictactoe::{Cell, Coord, GameStatus, Submission, evaluate};
//!
//! let turn = evaluate(&Submission::fresh());
//! assert_eq!(turn.board().get(Coord::CENTER), Cell::Machine);
//! assert_eq!(turn.status(), &GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod lines;
mod normalize;
mod round;
mod strategy;
mod types;

pub use engine::{GameStatus, Submission, Turn, evaluate};
pub use lines::{LINES, Line, LineId, Mask, is_winner};
pub use normalize::{RawBoard, RawValue, normalize};
pub use round::{LAST_ROUND, is_stale, round, round_label};
pub use strategy::{CORNER_PAIRS, MachineMove, Tactic, play};
pub use types::{Board, Cell, Coord, GRID_SIZE, Player};
