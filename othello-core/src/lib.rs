//! `othello-core` is a small, self-contained Othello rules library for game
//! hosts and UIs.
//!
//! The crate has two levels:
//!
//!  - [`Location`], [`Direction`], and [`MoveList`] address squares on the
//!    board and carry legal-move sets.
//!  - [`Board`] owns the 8x8 grid and implements the rules themselves:
//!    legal-move enumeration and move application with flipping.
//!
//! Every operation is pure and synchronous. Boards are plain `Copy` values;
//! applying a move returns a new board, and a rejected move returns the
//! original untouched. Whose turn it is, and what happens when a side has no
//! moves, are decisions left to the hosting layer.

pub mod test_utils;

mod board;
mod location;

pub use board::*;
pub use location::*;

/// The number of squares on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of squares on an Othello board.
pub const NUM_SPACES: usize = 64;
