//! The 8x8 grid and the core move rules.
//!
//! A [`Board`] is a plain value: operations take it by copy and return a new
//! one, so a rejected move leaves nothing half-applied. The board knows
//! nothing about turns; callers decide who moves next.

use crate::location::{Direction, Location, MoveList};
use crate::EDGE_LENGTH;
use std::fmt;
use thiserror::Error;

/// The contents of a single square.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Cell {
    Empty,
    Black,
    White,
}

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    Black,
    White,
}

impl Default for Player {
    /// The starting player (Black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// The other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl Player {
    /// The cell color this player's pieces show.
    pub fn cell(self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Why a requested placement was rejected.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    /// The square is occupied, or placing there captures no opponent run.
    #[error("illegal move at {0}")]
    Illegal(Location),
    /// The coordinates address no square on the board.
    #[error("coordinates ({row}, {col}) are outside the board")]
    OutOfBounds { row: usize, col: usize },
}

/// The full state of the grid.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Board {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Board {
    /// The standard opening position: White on (3,3) and (4,4), Black on
    /// (3,4) and (4,3).
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells }
    }

    /// A board with every square empty.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The contents of the square at `loc`.
    pub fn get(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    /// How many squares currently show `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&square| square == cell)
            .count()
    }

    /// Whether `player` may place a piece at `loc`: the square is empty and
    /// at least one direction captures an opponent run.
    pub fn is_legal_move(&self, player: Player, loc: Location) -> bool {
        self.get(loc) == Cell::Empty
            && Direction::ALL
                .iter()
                .any(|&dir| self.captures_toward(player, loc, dir))
    }

    /// Every legal move for `player`, scanning the grid row-major so each
    /// square is considered exactly once. Pure query.
    pub fn legal_moves(&self, player: Player) -> MoveList {
        Location::all()
            .filter(|&loc| self.is_legal_move(player, loc))
            .collect()
    }

    /// Place a piece for `player` at `loc` and flip every captured run.
    ///
    /// Each of the eight directions is resolved against the position as it
    /// stood at placement time; flips committed for one direction never feed
    /// into another. Fails without effect when the move is not legal.
    pub fn apply_move(self, player: Player, loc: Location) -> Result<Self, MoveError> {
        if !self.is_legal_move(player, loc) {
            return Err(MoveError::Illegal(loc));
        }

        let mut flips = Vec::new();
        for dir in Direction::ALL {
            self.collect_run(player, loc, dir, &mut flips);
        }

        let mut next = self;
        next.cells[loc.row()][loc.col()] = player.cell();
        for square in flips {
            next.cells[square.row()][square.col()] = player.cell();
        }
        Ok(next)
    }

    /// Walk outward from `loc` and report whether the run of opponent pieces
    /// in `dir` is closed off by one of `player`'s pieces.
    fn captures_toward(&self, player: Player, loc: Location, dir: Direction) -> bool {
        let mut saw_opponent = false;
        let mut cursor = loc.step(dir);

        while let Some(square) = cursor {
            match self.get(square) {
                Cell::Empty => return false,
                cell if cell == player.cell() => return saw_opponent,
                _ => {
                    saw_opponent = true;
                    cursor = square.step(dir);
                }
            }
        }

        // Ran off the edge without finding a closing piece.
        false
    }

    /// Append the opponent run captured in `dir` to `flips`, or nothing when
    /// the run ends at the edge or at an empty square.
    fn collect_run(&self, player: Player, loc: Location, dir: Direction, flips: &mut Vec<Location>) {
        let start = flips.len();
        let mut cursor = loc.step(dir);

        while let Some(square) = cursor {
            match self.get(square) {
                cell if cell == (!player).cell() => {
                    flips.push(square);
                    cursor = square.step(dir);
                }
                cell if cell == player.cell() => return,
                _ => break,
            }
        }

        // Unbounded run: discard it.
        flips.truncate(start);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Format the board as a bordered grid: `#` Black, `O` White, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for (row, squares) in self.cells.iter().enumerate() {
            write!(f, "\n {} ", row + 1)?;
            for square in squares {
                let glyph = match square {
                    Cell::Empty => '.',
                    Cell::Black => '#',
                    Cell::White => 'O',
                };
                write!(f, "{} ", glyph)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
#[error("invalid board string")]
pub struct ParseBoardError;

/// Parse a board from 64 square glyphs (`#`, `O`, `.`), whitespace ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut glyphs = s.chars().filter(|c| !c.is_whitespace());
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];

        for row in cells.iter_mut() {
            for square in row.iter_mut() {
                *square = match glyphs.next() {
                    Some('#') => Cell::Black,
                    Some('O') => Cell::White,
                    Some('.') => Cell::Empty,
                    _ => return Err(ParseBoardError),
                };
            }
        }

        if glyphs.next().is_some() {
            return Err(ParseBoardError);
        }

        Ok(Self { cells })
    }
}
