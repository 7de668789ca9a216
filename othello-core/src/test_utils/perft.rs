//! "Perft" move-path enumeration: count the positions reachable from the
//! starting board at a fixed depth, alternating players strictly.
//!
//! The node counts for shallow depths are well known, so this doubles as a
//! whole-engine check on the move rules. The first stuck position appears at
//! depth 9; below that, strict alternation matches the published table.

use crate::{Board, Player};

/// Count the move paths of length `depth` from the starting position.
pub fn run_perft(depth: u32) -> u64 {
    positions_below(Board::new(), Player::Black, depth)
}

fn positions_below(board: Board, player: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = board.legal_moves(player);
    if moves.is_empty() {
        return 1;
    }

    moves
        .into_iter()
        .map(|mv| {
            let next = board.apply_move(player, mv).unwrap();
            positions_below(next, !player, depth - 1)
        })
        .sum()
}

#[test]
fn perft_01() {
    assert_eq!(run_perft(1), 4);
}

#[test]
fn perft_02() {
    assert_eq!(run_perft(2), 12);
}

#[test]
fn perft_03() {
    assert_eq!(run_perft(3), 56);
}

#[test]
fn perft_04() {
    assert_eq!(run_perft(4), 244);
}

#[test]
fn perft_05() {
    assert_eq!(run_perft(5), 1396);
}

#[test]
fn perft_06() {
    assert_eq!(run_perft(6), 8200);
}

#[test]
fn perft_07() {
    assert_eq!(run_perft(7), 55092);
}
