//! Core types: players, actions, the game-state contract, RNG, errors.
//!
//! Everything here is game-agnostic. Concrete games implement
//! [`GameState`]; search strategies consume it.

pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use error::{AgentError, ConfigError, GameError};
pub use player::Player;
pub use rng::GameRng;
pub use state::{Action, GameState, StepOutcome};
