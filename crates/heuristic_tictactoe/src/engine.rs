//! One request's worth of play.
//!
//! [`evaluate`] is a pure function of the [`Submission`]: the board is
//! rebuilt from scratch, the machine answers, and the resulting [`Turn`]
//! carries everything the page needs to render the next round-trip.

use crate::lines::{Line, LineId, is_winner};
use crate::normalize::{RawBoard, normalize};
use crate::round::{is_stale, round, round_label};
use crate::strategy::{MachineMove, play};
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Board data handed over by the request layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Submission {
    /// Whether the client re-submitted a board. A fresh visit starts empty.
    resubmitted: bool,
    /// Cells as submitted.
    board: RawBoard,
}

impl Submission {
    /// Submission for a brand-new game.
    pub fn fresh() -> Self {
        Self::default()
    }

    /// Re-submission of an existing board.
    pub fn from_board(board: RawBoard) -> Self {
        Self::new(true, board)
    }

    /// Board the engine should start from.
    fn starting_board(&self) -> Board {
        if self.resubmitted {
            normalize(&self.board)
        } else {
            Board::new()
        }
    }
}

/// Outcome of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "state", content = "line", rename_all = "snake_case")]
pub enum GameStatus {
    /// The human moves next.
    #[display("Your turn ...")]
    InProgress,
    /// The submitted board already had a human line.
    #[display("Human won, completed: {_0}")]
    HumanWon(LineId),
    /// The machine completed a line.
    #[display("Machine won, completed: {_0}")]
    MachineWon(LineId),
    /// The heuristic ran out of rounds without a line.
    #[display("Stale game!")]
    Stale,
}

impl GameStatus {
    /// True for every state but [`GameStatus::InProgress`].
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Line completed by the winner, if any.
    pub fn line(&self) -> Option<LineId> {
        match self {
            GameStatus::HumanWon(line) | GameStatus::MachineWon(line) => Some(*line),
            GameStatus::InProgress | GameStatus::Stale => None,
        }
    }
}

/// Result of evaluating one submission.
///
/// Serializes with the derived message, closed flag and round label
/// alongside the stored fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, derive_getters::Getters)]
#[serde(into = "TurnReport")]
pub struct Turn {
    /// Board after the machine's move.
    board: Board,
    /// Game state.
    status: GameStatus,
    /// What the machine played, if it played.
    machine_move: Option<MachineMove>,
    /// Round computed after the machine's move.
    round: usize,
}

impl Turn {
    /// Status message shown to the player.
    pub fn message(&self) -> String {
        self.status.to_string()
    }

    /// True once the game is over and the board is read-only.
    pub fn closed(&self) -> bool {
        self.status.is_terminal()
    }

    /// Winning line, used to highlight its squares.
    pub fn winning_line(&self) -> Option<&'static Line> {
        self.status.line().map(Line::by_id)
    }

    /// Round label, numbered by machine moves made so far.
    pub fn round_label(&self) -> String {
        round_label(self.round)
    }
}

#[derive(Serialize)]
struct TurnReport {
    board: Board,
    status: GameStatus,
    message: String,
    closed: bool,
    machine_move: Option<MachineMove>,
    round: usize,
    round_label: String,
}

impl From<Turn> for TurnReport {
    fn from(turn: Turn) -> Self {
        Self {
            message: turn.message(),
            closed: turn.closed(),
            round_label: turn.round_label(),
            board: turn.board,
            status: turn.status,
            machine_move: turn.machine_move,
            round: turn.round,
        }
    }
}

/// Evaluates one submission.
///
/// A human line on the submitted board ends the game before the machine
/// moves. Otherwise the machine plays once and the game is checked for a
/// machine line, then for staleness.
#[instrument(skip(submission), fields(resubmitted = submission.resubmitted))]
pub fn evaluate(submission: &Submission) -> Turn {
    let mut board = submission.starting_board();

    if let Some(line) = is_winner(&board, Player::Human) {
        let current = round(&board);
        info!(line = %line.id(), "Human won");
        return Turn {
            board,
            status: GameStatus::HumanWon(line.id()),
            machine_move: None,
            round: current,
        };
    }

    let current = round(&board);
    let machine_move = play(&mut board, current);
    let next = round(&board);

    let status = if let Some(line) = is_winner(&board, Player::Machine) {
        GameStatus::MachineWon(line.id())
    } else if is_stale(next) {
        GameStatus::Stale
    } else {
        GameStatus::InProgress
    };

    info!(%status, round = next, "Turn evaluated");
    Turn {
        board,
        status,
        machine_move,
        round: next,
    }
}
