//! Monte Carlo Tree Search.
//!
//! ## Overview
//!
//! Each decision builds a fresh tree rooted at the current state and runs a
//! fixed number of iterations of:
//!
//! 1. **Selection**: descend through fully expanded nodes by UCB1
//! 2. **Expansion**: add one random untried child
//! 3. **Simulation**: uniform-random rollout from the new node
//! 4. **Backpropagation**: add the result up to the root, flipping its sign
//!    at every level
//!
//! The most-visited root child is played. Node values are stored from the
//! perspective of the player to move at that node, which is why UCB1 negates
//! a child's mean value.
//!
//! ## Usage
//!
//! ```rust
//! use mcts_arena::agents::Agent;
//! use mcts_arena::core::GameState;
//! use mcts_arena::games::TicTacToe;
//! use mcts_arena::mcts::{MCTSAgent, MCTSConfig};
//!
//! let mut game = TicTacToe::new();
//! for cell in [0, 3, 1, 4] {
//!     game.step(cell).unwrap();
//! }
//!
//! let config = MCTSConfig::default().with_simulations(500).with_seed(7);
//! let mut agent = MCTSAgent::new(config).unwrap();
//!
//! // Completing the top row wins at once
//! assert_eq!(agent.select_action(&game).unwrap(), 2);
//!
//! // The tree can also be inspected directly
//! let tree = agent.search(&game).unwrap();
//! for (action, visits) in tree.action_visits(tree.root()) {
//!     println!("{}: {} visits", action, visits);
//! }
//! ```

pub mod config;
pub mod node;
pub mod search;
pub mod stats;
pub mod tree;

// Re-export main types
pub use config::MCTSConfig;
pub use node::{MCTSNode, NodeId};
pub use search::MCTSAgent;
pub use stats::SearchStats;
pub use tree::{MCTSTree, TreeStats};
