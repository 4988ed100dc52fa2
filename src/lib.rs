//! # mcts-arena
//!
//! Interchangeable agents playing interchangeable two-player, zero-sum,
//! perfect-information games.
//!
//! ## Design Principles
//!
//! 1. **One State Contract**: Games implement [`GameState`]; every search
//!    strategy is written against it and nothing else.
//!
//! 2. **Search Never Touches the Live Game**: Agents explore clones. The
//!    MCTS root only borrows the caller's state.
//!
//! 3. **Seeded Everything**: Agents and the match driver own a
//!    [`GameRng`], so a configuration plus a seed replays the same games.
//!
//! ## Modules
//!
//! - `core`: Players, actions, the game-state trait, RNG, errors
//! - `games`: Tic-tac-toe and Connect Four
//! - `mcts`: Monte Carlo Tree Search (arena tree, UCB1, random rollouts)
//! - `agents`: The `Agent` trait plus random, minimax and human agents
//! - `arena`: Runs matches between two agents and tallies the results

pub mod agents;
pub mod arena;
pub mod core;
pub mod games;
pub mod mcts;

// Re-export commonly used types
pub use crate::core::{
    Action, AgentError, ConfigError, GameError, GameRng, GameState, Player, StepOutcome,
};

pub use crate::games::{ConnectFour, TicTacToe};

pub use crate::mcts::{MCTSAgent, MCTSConfig, MCTSTree, SearchStats};

pub use crate::agents::{Agent, HumanAgent, MinimaxAgent, MinimaxConfig, RandomAgent};

pub use crate::arena::{run_match, MatchConfig, MatchResults};
