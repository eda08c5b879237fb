//! The move-selection capability and the uniform-random player
//!
//! Anything that can pick a move for a fixed color is a [`Player`]. The
//! game driver only ever talks to this trait; [`RandomPlayer`] here and
//! [`MctsPlayer`](crate::MctsPlayer) are the two implementations.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Color, Coord};

/// A move selector for one fixed color
pub trait Player {
    /// The color this player moves for
    fn color(&self) -> Color;

    /// Picks a move on the given board, or `None` to pass
    ///
    /// `None` is the pass signal: the player's color has no legal move.
    /// The board is never mutated.
    fn choose_move(&mut self, board: &Board) -> Option<Coord>;
}

/// A player that picks uniformly among its legal moves
pub struct RandomPlayer {
    color: Color,
    rng: StdRng,
}

impl RandomPlayer {
    /// Creates a random player; `seed` fixes its move sequence
    pub fn new(color: Color, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomPlayer { color, rng }
    }
}

impl Player for RandomPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &Board) -> Option<Coord> {
        board.valid_moves(self.color).choose(&mut self.rng).copied()
    }
}
