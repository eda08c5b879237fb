//! Statistics collected during a search
//!
//! The engine records one [`SearchStatistics`] per `choose_move` call,
//! available afterwards for logging and diagnostics.

use std::time::Duration;

/// Statistics from the most recent MCTS search
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of iterations actually performed
    ///
    /// This is less than the configured budget when a retained tree already
    /// carried enough visits.
    pub iterations: usize,

    /// Wall time spent in the search
    pub total_time: Duration,

    /// Number of nodes in the tree when the search finished
    pub tree_size: usize,

    /// Maximum depth reached during selection/expansion
    pub max_depth: usize,
}

impl SearchStatistics {
    /// Creates an empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            iterations: 0,
            total_time: Duration::from_secs(0),
            tree_size: 1,
            max_depth: 0,
        }
    }

    /// Returns the number of iterations per second
    pub fn iterations_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.iterations as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a one-line summary of the search
    pub fn summary(&self) -> String {
        format!(
            "{} iterations in {:.3}s ({:.0}/s), {} nodes, max depth {}",
            self.iterations,
            self.total_time.as_secs_f64(),
            self.iterations_per_second(),
            self.tree_size,
            self.max_depth
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
