//! Concrete games implementing [`GameState`](crate::core::GameState).
//!
//! - [`TicTacToe`]: 3x3 grid, actions are cells 0-8.
//! - [`ConnectFour`]: 6x7 grid, actions are columns 0-6.

pub mod connect_four;
pub mod tictactoe;

pub use connect_four::ConnectFour;
pub use tictactoe::TicTacToe;
