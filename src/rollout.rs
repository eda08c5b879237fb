//! Rollout policy: random playout to a terminal position
//!
//! Simulations are finished with uniformly random legal moves, passing any
//! side that has none, until the game ends. No heuristic evaluation and no
//! depth cutoff: every rollout reaches an actual terminal position, which
//! is guaranteed because each ply either fills a cell or is a pass, and a
//! double pass is terminal.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Color};

/// Plays uniformly random moves on `board` until the game is over and
/// scores the outcome.
///
/// `to_move` is the side to act first; `perspective` is the color the
/// reward is measured for, which is always the engine's own color no matter
/// whose turn it is at the starting position.
///
/// Returns 1.0 for a win, 0.0 for a loss and 0.5 for a tie.
pub fn random_playout<R: Rng>(
    board: &mut Board,
    mut to_move: Color,
    perspective: Color,
    rng: &mut R,
) -> f64 {
    loop {
        let moves = board.valid_moves(to_move);
        if let Some(&mv) = moves.choose(rng) {
            let applied = board.apply_move(mv, to_move);
            assert!(applied, "rollout picked an illegal move");
            to_move = to_move.opponent();
        } else if board.valid_moves(to_move.opponent()).is_empty() {
            // Neither side can move
            break;
        } else {
            // Pass
            to_move = to_move.opponent();
        }
    }

    match board.winner() {
        Some(winner) if winner == perspective => 1.0,
        Some(_) => 0.0,
        None => 0.5,
    }
}
