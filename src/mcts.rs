//! Monte Carlo Tree Search player
//!
//! This module orchestrates the four phases of the search (selection,
//! expansion, simulation, backpropagation) over a fixed iteration budget,
//! and optionally carries the search tree from one move to the next by
//! re-rooting it along the move actually played.
//!
//! Rewards are always measured from the player's own color, at every depth
//! of the tree. Backpropagation therefore adds the same scalar to each node
//! on the path with no sign flip; the UCB1 exploitation term at opponent
//! nodes reads accordingly.

use std::time::Instant;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Coord};
use crate::config::MctsConfig;
use crate::player::Player;
use crate::rollout::random_playout;
use crate::stats::SearchStatistics;
use crate::tree::{NodeId, SearchTree};
use crate::Result;

/// A player that picks moves with Monte Carlo Tree Search
///
/// Each instance searches for one fixed color. Instances are independent
/// and safe to move to a worker thread, but a single instance must not be
/// called from multiple threads at once; the search assumes exclusive
/// access to its tree and random source.
pub struct MctsPlayer {
    color: Color,
    config: MctsConfig,
    rng: StdRng,

    /// Tree kept between moves when `config.reuse_tree` is on
    retained: Option<SearchTree>,

    /// Statistics from the most recent search
    statistics: SearchStatistics,
}

impl MctsPlayer {
    /// Creates a player searching for `color` with the given configuration
    ///
    /// Fails with [`OthelloError::InvalidConfiguration`](crate::OthelloError)
    /// if the configuration cannot be searched with (zero iterations, or a
    /// non-finite exploration constant).
    pub fn new(color: Color, config: MctsConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(MctsPlayer {
            color,
            config,
            rng,
            retained: None,
            statistics: SearchStatistics::new(),
        })
    }

    /// Returns statistics from the most recent `choose_move` call
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Picks a move, reporting search progress through `progress`
    ///
    /// The callback observes `(completed, total)` once per completed
    /// iteration, strictly increasing, and reaches `total` exactly once.
    /// With tree reuse, visits already carried by the retained root count
    /// against the budget; a root at or over budget reports completion
    /// immediately without searching.
    ///
    /// Returns `None`, without searching, if `color` has no legal move.
    /// That is the pass signal, not an error.
    pub fn choose_move_with_progress<F>(&mut self, board: &Board, mut progress: F) -> Option<Coord>
    where
        F: FnMut(usize, usize),
    {
        let root_moves = board.valid_moves(self.color);
        if root_moves.is_empty() {
            trace!("{} has no legal move, passing", self.color);
            return None;
        }

        let start = Instant::now();
        let total = self.config.iterations;

        let mut tree = match self.retained.take() {
            Some(tree) if self.config.reuse_tree => tree,
            _ => SearchTree::new(self.color, root_moves),
        };
        assert_eq!(
            tree.node(tree.root()).to_move,
            self.color,
            "retained tree is out of step with the game"
        );

        self.statistics = SearchStatistics::new();

        let carried = (tree.node(tree.root()).visits as usize).min(total);
        if carried >= total {
            debug!(
                "retained root already carries {} visits, skipping search",
                tree.node(tree.root()).visits
            );
            progress(total, total);
        } else {
            for done in carried..total {
                self.run_iteration(&mut tree, board);
                progress(done + 1, total);
            }
            self.statistics.iterations = total - carried;
        }

        let chosen = self.best_move(&tree);
        self.statistics.total_time = start.elapsed();
        self.statistics.tree_size = tree.node_count();
        debug!(
            "{} picks {:?}: {}",
            self.color,
            chosen,
            self.statistics.summary()
        );

        if self.config.reuse_tree {
            self.retained = Some(tree);
        }
        chosen
    }

    /// Advances the retained tree along a move actually played, by either
    /// side
    ///
    /// `Some(mv)` re-roots onto the matching child when one exists and
    /// otherwise discards the tree; `None` (a pass) always discards, since
    /// pass edges are not represented in the tree. Does nothing when tree
    /// reuse is disabled.
    pub fn notify_move(&mut self, mv: Option<Coord>) {
        let Some(mut tree) = self.retained.take() else {
            return;
        };

        let Some(mv) = mv else {
            debug!("pass played, discarding retained tree");
            return;
        };

        match tree.find_child(tree.root(), mv) {
            Some(child) => {
                tree.reroot(child);
                debug!("re-rooted onto {}, {} nodes retained", mv, tree.node_count());
                self.retained = Some(tree);
            }
            None => {
                debug!("{} was never expanded, discarding retained tree", mv);
            }
        }
    }

    /// Runs one iteration: selection, expansion, simulation,
    /// backpropagation
    fn run_iteration(&mut self, tree: &mut SearchTree, board: &Board) {
        // The iteration works on a throwaway copy; the caller's board is
        // never mutated.
        let mut working = board.clone();
        let mut to_move = self.color;
        let mut node = tree.root();
        let mut depth = 0usize;

        // 1. Selection: descend while there is nothing left to expand
        while tree.node(node).is_fully_expanded() && !tree.node(node).children.is_empty() {
            node = self.select_child(tree, node);
            let mv = tree
                .node(node)
                .mv
                .expect("non-root node carries its producing move");
            let applied = working.apply_move(mv, to_move);
            assert!(applied, "tree held an illegal move for this position");
            to_move = to_move.opponent();
            depth += 1;
        }
        debug_assert_eq!(to_move, tree.node(node).to_move);

        // 2. Expansion: try one untried move, chosen uniformly
        if !tree.node(node).is_fully_expanded() {
            let untried = &tree.node(node).untried;
            let mv = untried[self.rng.gen_range(0..untried.len())];
            let applied = working.apply_move(mv, to_move);
            assert!(applied, "untried list held an illegal move");

            let next = to_move.opponent();
            let next_untried = working.valid_moves(next);
            node = tree.add_child(node, mv, next, next_untried);
            to_move = next;
            depth += 1;
        }

        // 3. Simulation: random playout from the reached position
        let reward = random_playout(&mut working, to_move, self.color, &mut self.rng);

        // 4. Backpropagation: the reward is from the engine's fixed
        // perspective, so every node on the path takes it unflipped
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let n = tree.node_mut(id);
            n.visits += 1;
            n.reward += reward;
            cursor = n.parent;
        }

        self.statistics.max_depth = self.statistics.max_depth.max(depth);
    }

    /// Picks the child maximizing UCB1:
    /// `value + c * sqrt(2 * ln(parent_visits) / child_visits)`,
    /// with unvisited children scoring infinity.
    fn select_child(&self, tree: &SearchTree, parent: NodeId) -> NodeId {
        let log_parent = (tree.node(parent).visits as f64).ln();
        let c = self.config.exploration_constant;

        let mut best = None;
        let mut best_score = f64::NEG_INFINITY;
        for &child_id in &tree.node(parent).children {
            let child = tree.node(child_id);
            let score = if child.visits == 0 {
                f64::INFINITY
            } else {
                child.value() + c * (2.0 * log_parent / child.visits as f64).sqrt()
            };
            if score > best_score {
                best_score = score;
                best = Some(child_id);
            }
        }
        best.expect("selection entered a node with no children")
    }

    /// Returns the most-visited root child's move; ties break to the
    /// smaller coordinate in canonical row-major order.
    fn best_move(&self, tree: &SearchTree) -> Option<Coord> {
        let mut best: Option<(u64, Coord)> = None;
        for &child_id in &tree.node(tree.root()).children {
            let child = tree.node(child_id);
            let mv = child
                .mv
                .expect("non-root node carries its producing move");
            let better = match best {
                None => true,
                Some((visits, coord)) => {
                    child.visits > visits || (child.visits == visits && mv < coord)
                }
            };
            if better {
                best = Some((child.visits, mv));
            }
        }
        best.map(|(_, mv)| mv)
    }
}

impl Player for MctsPlayer {
    fn color(&self) -> Color {
        self.color
    }

    fn choose_move(&mut self, board: &Board) -> Option<Coord> {
        self.choose_move_with_progress(board, |_, _| {})
    }
}
