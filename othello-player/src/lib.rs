//! Turn orchestration and computer move selection on top of [`othello_core`].
//!
//! [`Session`] owns a live game: the board, the side to move, and the
//! handoff rules that govern observable play. [`Strategy`] is the seam for
//! choosing the computer's moves; [`RandomStrategy`] picks uniformly at
//! random. Hosts drive the session from their own event loop: apply the
//! human's move, watch the returned [`TurnChange`], and schedule the
//! computer's reply whenever it holds the turn.

pub mod session;
pub mod strategy;

pub use session::{Session, Status, TurnChange};
pub use strategy::{RandomStrategy, Strategy};
