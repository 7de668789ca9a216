//! A playable game session: one board, a side to move, and the handoff
//! rules the host observes to drive rendering and computer turns.

use crate::strategy::Strategy;
use othello_core::{Board, Cell, Location, MoveError, MoveList, Player};
use tracing::debug;

/// Whether play continues.
///
/// `GameOver` is tracked for hosts that want a terminal screen, but the
/// handoff rules below never produce it: a side with no moves hands the turn
/// to Black instead of ending the game.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    InProgress,
    GameOver,
}

/// Emitted after every applied move so the host can re-render and decide
/// whether to schedule the computer's reply.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TurnChange {
    /// The side holding the turn after the handoff.
    pub to_move: Player,
}

/// The complete state of one human-versus-computer game.
pub struct Session {
    board: Board,
    to_move: Player,
    status: Status,
    computer: Player,
}

impl Session {
    /// Start from the standard opening, Black to move, with `computer`
    /// playing that color.
    pub fn new(computer: Player) -> Self {
        Self::from_position(Board::new(), Player::default(), computer)
    }

    /// Resume from an arbitrary position.
    pub fn from_position(board: Board, to_move: Player, computer: Player) -> Self {
        Self {
            board,
            to_move,
            status: Status::InProgress,
            computer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn computer(&self) -> Player {
        self.computer
    }

    pub fn is_computer_turn(&self) -> bool {
        self.to_move == self.computer
    }

    /// Legal moves for the side currently holding the turn.
    pub fn legal_moves(&self) -> MoveList {
        self.board.legal_moves(self.to_move)
    }

    /// Piece counts as (black, white).
    pub fn score(&self) -> (usize, usize) {
        (self.board.count(Cell::Black), self.board.count(Cell::White))
    }

    /// Apply a move for the side to move, then hand the turn off.
    /// On error nothing changes.
    pub fn play(&mut self, loc: Location) -> Result<TurnChange, MoveError> {
        let next = self.board.apply_move(self.to_move, loc)?;
        debug!(player = %self.to_move, %loc, "move applied");
        self.board = next;
        Ok(self.hand_off())
    }

    /// Like [`Session::play`], for raw row/column input from a pointer or
    /// text UI.
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<TurnChange, MoveError> {
        let loc = Location::from_coords(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.play(loc)
    }

    /// Let `strategy` choose and apply a move for the computer.
    ///
    /// Legal moves are enumerated here, at decision time, so a reply
    /// scheduled long ago still acts on the current position. Returns `None`
    /// when the computer does not hold the turn or has no move.
    pub fn play_computer_move(&mut self, strategy: &mut dyn Strategy) -> Option<TurnChange> {
        if !self.is_computer_turn() {
            return None;
        }
        let loc = strategy.select_move(&self.board, self.to_move)?;
        debug!(strategy = strategy.name(), %loc, "computer move selected");
        // The strategy proposes from the current position; a rejection here
        // means the strategy itself is broken, and the request is dropped.
        self.play(loc).ok()
    }

    fn hand_off(&mut self) -> TurnChange {
        let next = !self.to_move;
        // A side left without moves never passes; the turn always falls
        // back to Black, whichever side is stuck.
        self.to_move = if self.board.legal_moves(next).is_empty() {
            Player::Black
        } else {
            next
        };
        debug!(to_move = %self.to_move, "turn changed");
        TurnChange {
            to_move: self.to_move,
        }
    }
}

impl Default for Session {
    /// A fresh game with the computer playing White, as hosts conventionally
    /// set it up.
    fn default() -> Self {
        Self::new(Player::White)
    }
}
