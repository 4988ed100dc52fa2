//! Match driver: plays series of games between two agents and tallies them.
//!
//! ```
//! use mcts_arena::agents::RandomAgent;
//! use mcts_arena::arena::{run_match, MatchConfig};
//! use mcts_arena::games::TicTacToe;
//!
//! let mut game = TicTacToe::new();
//! let mut a = RandomAgent::new(1);
//! let mut b = RandomAgent::new(2);
//!
//! let results = run_match(&mut game, &mut a, &mut b, &MatchConfig::default()).unwrap();
//! assert_eq!(results.episodes(), 10);
//! ```

pub mod config;
pub mod results;
pub mod runner;

pub use config::MatchConfig;
pub use results::{GameOutcome, MatchResults};
pub use runner::run_match;
