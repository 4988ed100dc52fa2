//! Depth-limited minimax with alpha-beta pruning.
//!
//! Values are from the perspective of the player choosing at the root.
//! Rewards returned by `step` belong to the mover, so a game-ending move
//! counts as-is on our turns and negated on the opponent's. Positions cut
//! off by the depth limit score a neutral 0.0.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Action, AgentError, ConfigError, GameError, GameState, StepOutcome};

use super::Agent;

/// Minimax search parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxConfig {
    /// Plies searched below the root move before cutting off.
    pub max_depth: u32,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        Self { max_depth: 5 }
    }
}

impl MinimaxConfig {
    /// Create a new config with custom depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Reject a zero depth limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        Ok(())
    }
}

/// Counters for the most recent decision.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// States generated by stepping a clone.
    pub nodes_visited: u64,

    /// Times the remaining siblings were skipped because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Minimax agent with alpha-beta pruning.
#[derive(Clone, Debug)]
pub struct MinimaxAgent {
    name: String,
    config: MinimaxConfig,
    stats: MinimaxStats,
}

impl MinimaxAgent {
    /// Create a new minimax agent.
    pub fn new(config: MinimaxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            name: "Minimax".to_string(),
            config,
            stats: MinimaxStats::default(),
        })
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Get statistics from the last decision.
    pub fn stats(&self) -> &MinimaxStats {
        &self.stats
    }

    /// Best root action and its value, or `None` for a terminal state.
    ///
    /// Every root branch is searched in full; `alpha` only tightens the
    /// windows of later branches.
    pub fn search<S: GameState>(&mut self, state: &S) -> Result<Option<(Action, f64)>, GameError> {
        self.stats = MinimaxStats::default();

        let mut best: Option<(Action, f64)> = None;
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;

        for action in state.legal_actions() {
            let mut next = state.clone();
            let outcome = next.step(action)?;
            self.stats.nodes_visited += 1;

            let value = match outcome {
                StepOutcome::Finished { reward } => reward,
                StepOutcome::Ongoing => self.minimax(&next, 1, alpha, beta, false)?,
            };

            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((action, value));
            }
            alpha = alpha.max(value);
        }

        Ok(best)
    }

    fn minimax<S: GameState>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<f64, GameError> {
        let actions = state.legal_actions();
        if actions.is_empty() || depth >= self.config.max_depth {
            return Ok(Self::evaluate(state));
        }

        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };

        for action in actions {
            let mut next = state.clone();
            let outcome = next.step(action)?;
            self.stats.nodes_visited += 1;

            let value = match outcome {
                StepOutcome::Finished { reward } if maximizing => reward,
                StepOutcome::Finished { reward } => -reward,
                StepOutcome::Ongoing => self.minimax(&next, depth + 1, alpha, beta, !maximizing)?,
            };

            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }

    /// Neutral evaluation for positions cut off by the depth limit.
    fn evaluate<S: GameState>(_state: &S) -> f64 {
        0.0
    }
}

impl<S: GameState> Agent<S> for MinimaxAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, state: &S) -> Result<Action, AgentError> {
        let (action, value) = self.search(state)?.ok_or(AgentError::NoLegalActions)?;
        debug!(
            agent = %self.name,
            action,
            value,
            nodes = self.stats.nodes_visited,
            cutoffs = self.stats.cutoffs,
            "Minimax selected move"
        );
        Ok(action)
    }

    fn reset(&mut self) {
        self.stats = MinimaxStats::default();
    }
}
