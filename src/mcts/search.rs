//! Core MCTS search algorithm.
//!
//! Each decision builds a fresh tree rooted at the caller's state and runs a
//! fixed number of selection, expansion, simulation and backpropagation
//! cycles over it. The most-visited root child wins; the tree is then
//! dropped.

use std::time::Instant;

use tracing::{debug, trace};

use crate::agents::Agent;
use crate::core::{Action, AgentError, ConfigError, GameError, GameRng, GameState};

use super::config::MCTSConfig;
use super::node::NodeId;
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// MCTS agent with UCB1 selection and uniform-random rollouts.
///
/// Holds only its configuration, RNG and the statistics of its last
/// decision; no tree survives between calls.
#[derive(Clone, Debug)]
pub struct MCTSAgent {
    name: String,

    /// Search configuration.
    config: MCTSConfig,

    /// Drives expansion order and seeds rollout streams.
    rng: GameRng,

    /// Statistics of the most recent search.
    stats: SearchStats,
}

impl MCTSAgent {
    /// Create a new MCTS agent.
    pub fn new(config: MCTSConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: "MCTS".to_string(),
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
        })
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }

    /// Get statistics from the last search.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Run `num_simulations` iterations from `state` and return the tree.
    ///
    /// The root borrows `state`; search only ever steps clones of it.
    pub fn search<'a, S: GameState>(&mut self, state: &'a S) -> Result<MCTSTree<'a, S>, GameError> {
        let start = Instant::now();
        self.stats.reset();

        let capacity = self.config.num_simulations as usize + 1;
        let mut tree = MCTSTree::with_capacity(state, capacity);
        let mut rollout_rng = self.rng.fork();

        for _ in 0..self.config.num_simulations {
            self.iteration(&mut tree, &mut rollout_rng)?;
        }

        self.stats.set_elapsed(start.elapsed());
        Ok(tree)
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration<S: GameState>(
        &mut self,
        tree: &mut MCTSTree<'_, S>,
        rollout_rng: &mut GameRng,
    ) -> Result<(), GameError> {
        // === SELECTION ===
        let mut current = tree.root();
        loop {
            let node = tree.get(current);
            if !node.is_fully_expanded() || node.is_terminal() {
                break;
            }
            current = tree.best_child(current, self.config.exploration_constant);
        }

        // === EXPANSION ===
        let expanded = !tree.get(current).is_terminal();
        if expanded {
            current = tree.expand(current, &mut self.rng)?;
        }

        // === SIMULATION ===
        let rolled_out = !tree.get(current).is_terminal();
        let reward = tree.get(current).simulate(rollout_rng)?;

        // === BACKPROPAGATION ===
        tree.backpropagate(current, reward);

        let depth = tree.get(current).depth();
        self.stats.record_iteration(depth, expanded, rolled_out);
        trace!(
            iteration = self.stats.iterations,
            node = %current,
            depth,
            reward,
            "MCTS iteration"
        );
        Ok(())
    }

    fn log_decision<S: GameState>(&self, tree: &MCTSTree<'_, S>, root: NodeId, action: Action) {
        let root_node = tree.get(root);
        debug!(
            agent = %self.name,
            action,
            root_visits = root_node.visits(),
            root_value = root_node.mean_value(),
            nodes = tree.len(),
            max_depth = self.stats.max_depth,
            time_us = self.stats.time_us,
            "MCTS selected move"
        );
    }
}

impl<S: GameState> Agent<S> for MCTSAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, state: &S) -> Result<Action, AgentError> {
        if state.is_terminal() {
            return Err(AgentError::NoLegalActions);
        }

        let tree = self.search(state)?;
        let root = tree.root();
        let action = tree.best_action(root);
        self.log_decision(&tree, root, action);
        Ok(action)
    }

    fn reset(&mut self) {
        self.stats.reset();
    }
}
