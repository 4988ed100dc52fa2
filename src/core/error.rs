//! Error types.
//!
//! Tree-internal precondition violations (selecting among unvisited
//! children, expanding a node with nothing left to try) are engine defects
//! and panic instead of appearing here.

use thiserror::Error;

use super::state::Action;

/// Errors raised by a game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid action {action}. Legal actions: {legal:?}")]
    InvalidAction { action: Action, legal: Vec<Action> },

    #[error("Invalid action {action}: the game is already over")]
    GameOver { action: Action },
}

/// Rejected agent or match configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("num_simulations must be positive")]
    ZeroSimulations,

    #[error("exploration constant must be a positive finite number, got {0}")]
    InvalidExplorationConstant(f64),

    #[error("max_depth must be positive")]
    ZeroDepth,

    #[error("num_episodes must be positive")]
    ZeroEpisodes,
}

/// Errors surfaced to the match driver by an agent.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no legal actions: the game is already over")]
    NoLegalActions,

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before an action was chosen")]
    Interrupted,
}
