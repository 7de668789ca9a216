//! Move-selection strategies for the computer side.

use othello_core::{Board, Location, Player};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A way of choosing the computer's next move.
///
/// Implementations must enumerate legal moves from the board they are handed
/// rather than trusting a list computed earlier; the host may invoke them at
/// any time after a delay.
pub trait Strategy {
    /// Choose a move for `player`, or `None` when no legal move exists.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Location>;

    /// Display name for logs and UIs.
    fn name(&self) -> &str;
}

/// Selects uniformly at random among the legal moves.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A strategy with reproducible choices, for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<Location> {
        let moves = board.legal_moves(player);
        if moves.is_empty() {
            return None;
        }
        moves.get(self.rng.gen_range(0..moves.len()))
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_proposes_legal_moves() {
        let board = Board::new();
        let mut strategy = RandomStrategy::new();

        for _ in 0..100 {
            let mv = strategy.select_move(&board, Player::Black).unwrap();
            assert!(board.legal_moves(Player::Black).contains(mv));
        }
    }

    #[test]
    fn returns_none_without_legal_moves() {
        let board = Board::empty();
        let mut strategy = RandomStrategy::new();

        assert_eq!(strategy.select_move(&board, Player::Black), None);
        assert_eq!(strategy.select_move(&board, Player::White), None);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let board = Board::new();
        let mut first = RandomStrategy::seeded(7);
        let mut second = RandomStrategy::seeded(7);

        for _ in 0..20 {
            assert_eq!(
                first.select_move(&board, Player::Black),
                second.select_move(&board, Player::Black)
            );
        }
    }
}
