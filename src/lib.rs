//! # othello-mcts
//!
//! An Othello/Reversi engine that selects moves with Monte Carlo Tree
//! Search.
//!
//! The crate provides the game rules (board state, move legality, the
//! flank-and-flip mechanics) and two move pickers behind a common
//! [`Player`] trait: a uniform-random baseline and the MCTS engine. The
//! search runs a fixed number of simulation passes, reports incremental
//! progress, and can optionally keep its tree between successive moves by
//! re-rooting it along the move actually played.
//!
//! ## Basic usage
//!
//! ```
//! use othello_mcts::{Board, Color, MctsConfig, MctsPlayer, Player};
//!
//! fn main() -> othello_mcts::Result<()> {
//!     let board = Board::new(8)?;
//!
//!     let config = MctsConfig::default()
//!         .with_iterations(200)
//!         .with_seed(7);
//!     let mut engine = MctsPlayer::new(Color::Black, config)?;
//!
//!     match engine.choose_move(&board) {
//!         Some(mv) => println!("Black plays {}", mv),
//!         None => println!("Black has to pass"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## How the search works
//!
//! Each iteration works on a private copy of the caller's board:
//!
//! 1. **Selection**: descend from the root through fully-expanded nodes,
//!    picking children by UCB1.
//! 2. **Expansion**: leave the tree by trying one random untried move and
//!    creating a node for the resulting position.
//! 3. **Simulation**: finish the game with uniformly random moves.
//! 4. **Backpropagation**: credit the outcome to every node on the path.
//!
//! Rewards are always scored from the engine's own color, so
//! backpropagation applies the same scalar at every depth. After the
//! budget is spent, the most-visited root child is the answer.
//!
//! A side with no legal move is a *pass*, represented as `None` from
//! [`Player::choose_move`]. A pass is a normal game event, not an error.

pub mod board;
pub mod config;
pub mod mcts;
pub mod player;
pub mod rollout;
pub mod stats;
pub mod tree;

pub use board::{Board, Color, Coord};
pub use config::MctsConfig;
pub use mcts::MctsPlayer;
pub use player::{Player, RandomPlayer};
pub use stats::SearchStatistics;

/// Error type for board and engine construction
#[derive(thiserror::Error, Debug)]
pub enum OthelloError {
    /// The requested board size is not playable
    #[error("invalid board size {0}: must be 4, 6 or 8")]
    InvalidBoardSize(usize),

    /// The engine configuration cannot be searched with
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A board diagram does not describe a playable board
    #[error("invalid board diagram: {0}")]
    InvalidDiagram(String),
}

/// Result type for fallible operations in this crate
pub type Result<T> = std::result::Result<T, OthelloError>;
