//! Decision-making agents.
//!
//! Agents implement [`Agent`] to define:
//! - How an action is chosen from a state
//! - What, if anything, is cleared between games
//!
//! The match driver calls into `Agent` and never looks inside a strategy.
//! [`MCTSAgent`](crate::mcts::MCTSAgent) lives with the search code.

pub mod human;
pub mod minimax;
pub mod random;

pub use human::HumanAgent;
pub use minimax::{MinimaxAgent, MinimaxConfig, MinimaxStats};
pub use random::RandomAgent;

use crate::core::{Action, AgentError, GameState};

/// A player strategy for games of type `S`.
///
/// ## Implementation Notes
///
/// - `select_action` must return a member of `state.legal_actions()`
/// - `select_action` must not be called on a terminal state; agents answer
///   with `AgentError::NoLegalActions`
/// - The caller's state is never mutated; search works on clones
pub trait Agent<S: GameState> {
    /// Display name used in logs and match summaries.
    fn name(&self) -> &str;

    /// Choose an action for the player to move in `state`.
    fn select_action(&mut self, state: &S) -> Result<Action, AgentError>;

    /// Clear per-game statistics. Called before every game.
    fn reset(&mut self) {}
}
