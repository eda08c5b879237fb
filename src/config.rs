//! Configuration options for the MCTS player
//!
//! This module defines the parameters that control the behavior of the
//! search: the iteration budget, the exploration constant, the random seed,
//! and whether the search tree is retained between successive moves.

use crate::{OthelloError, Result};

/// Configuration for the MCTS player
///
/// Use the builder methods to customize a configuration:
///
/// ```
/// use othello_mcts::MctsConfig;
///
/// let config = MctsConfig::default()
///     .with_iterations(5_000)
///     .with_exploration_constant(1.0)
///     .with_seed(42)
///     .with_tree_reuse(true);
/// ```
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Number of simulation passes per `choose_move` call
    ///
    /// The search stops after this many iterations; there is no time limit.
    pub iterations: usize,

    /// Exploration constant for UCB1
    ///
    /// Controls the balance between exploration and exploitation. Higher
    /// values favor less-visited children.
    pub exploration_constant: f64,

    /// Seed for the engine's random source
    ///
    /// With a fixed seed, a fixed iteration budget and a fixed starting
    /// board, the search is deterministic. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Whether to retain the search tree between successive moves
    ///
    /// When enabled, [`MctsPlayer::notify_move`](crate::MctsPlayer::notify_move)
    /// re-roots the retained tree along the move actually played instead of
    /// starting the next search from scratch.
    pub reuse_tree: bool,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            iterations: 1_000,
            exploration_constant: 1.4,
            seed: None,
            reuse_tree: false,
        }
    }
}

impl MctsConfig {
    /// Sets the iteration budget
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the exploration constant
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables tree reuse between moves
    pub fn with_tree_reuse(mut self, reuse: bool) -> Self {
        self.reuse_tree = reuse;
        self
    }

    /// Checks the configuration for values the search cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(OthelloError::InvalidConfiguration(
                "iteration budget must be at least 1".into(),
            ));
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(OthelloError::InvalidConfiguration(format!(
                "exploration constant must be finite and non-negative, got {}",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}
