//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Selection/expansion/simulation/backpropagation cycles per decision.
    pub num_simulations: u32,

    /// UCB1 exploration constant (default: sqrt(2) = 1.414).
    /// Higher values favor exploration over exploitation.
    pub exploration_constant: f64,

    /// Random seed for expansion order and rollouts.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            exploration_constant: std::f64::consts::SQRT_2,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    /// Create a new config with a custom simulation budget.
    #[must_use]
    pub fn with_simulations(mut self, n: u32) -> Self {
        self.num_simulations = n;
        self
    }

    /// Create a new config with custom exploration constant.
    #[must_use]
    pub fn with_exploration(mut self, c: f64) -> Self {
        self.exploration_constant = c;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject budgets and constants the search cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_simulations == 0 {
            return Err(ConfigError::ZeroSimulations);
        }
        if !self.exploration_constant.is_finite() || self.exploration_constant <= 0.0 {
            return Err(ConfigError::InvalidExplorationConstant(
                self.exploration_constant,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert!((config.exploration_constant - std::f64::consts::SQRT_2).abs() < 0.001);
        assert_eq!(config.num_simulations, 1000);
        assert_eq!(config.seed, 42);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default()
            .with_simulations(200)
            .with_exploration(2.0)
            .with_seed(123);

        assert_eq!(config.num_simulations, 200);
        assert_eq!(config.exploration_constant, 2.0);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let zero = MCTSConfig::default().with_simulations(0);
        assert_eq!(zero.validate(), Err(ConfigError::ZeroSimulations));

        for c in [0.0, -1.0, f64::INFINITY] {
            let config = MCTSConfig::default().with_exploration(c);
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidExplorationConstant(_))
            ));
        }

        let nan = MCTSConfig::default().with_exploration(f64::NAN);
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default().with_simulations(64).with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
