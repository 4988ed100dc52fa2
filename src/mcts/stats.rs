//! Per-decision search diagnostics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics collected during one MCTS decision.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Selection/expansion/simulation/backpropagation cycles run.
    pub iterations: u32,

    /// Nodes added to the tree.
    pub nodes_expanded: u32,

    /// Random rollouts played out (terminal leaves score without one).
    pub simulations: u32,

    /// Deepest node reached by selection or expansion.
    pub max_depth: u16,

    /// Wall-clock search time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record one completed iteration that reached `depth`.
    pub fn record_iteration(&mut self, depth: u16, expanded: bool, rolled_out: bool) {
        self.iterations += 1;
        if rolled_out {
            self.simulations += 1;
        }
        if expanded {
            self.nodes_expanded += 1;
        }
        self.max_depth = self.max_depth.max(depth);
    }

    /// Record the elapsed search time.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.time_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.iterations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.simulations, 0);
        assert_eq!(stats.iterations_per_second(), 0.0);
    }

    #[test]
    fn test_record_iteration() {
        let mut stats = SearchStats::new();
        stats.record_iteration(2, true, true);
        stats.record_iteration(5, false, false);
        stats.record_iteration(3, true, true);

        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.simulations, 2);
        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.max_depth, 5);
    }

    #[test]
    fn test_stats_iterations_per_second() {
        let mut stats = SearchStats::new();
        stats.iterations = 1000;
        stats.set_elapsed(Duration::from_secs(1));

        assert_eq!(stats.time_us, 1_000_000);
        assert_eq!(stats.iterations_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.record_iteration(4, true, true);

        stats.reset();

        assert_eq!(stats, SearchStats::default());
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::new();
        stats.iterations = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats, deserialized);
    }
}
