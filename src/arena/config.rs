//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::ConfigError;

/// Parameters for a series of games between two agents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Games to play.
    pub num_episodes: u32,

    /// Play the final game with the board displayed after every move.
    pub render_last_game: bool,

    /// Seed for game resets (e.g. choosing who starts).
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_episodes: 10,
            render_last_game: false,
            seed: 0,
        }
    }
}

impl MatchConfig {
    /// Create a new config with a custom number of games.
    #[must_use]
    pub fn with_episodes(mut self, n: u32) -> Self {
        self.num_episodes = n;
        self
    }

    /// Display the last game.
    #[must_use]
    pub fn with_render_last_game(mut self, render: bool) -> Self {
        self.render_last_game = render;
        self
    }

    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Reject an empty match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_episodes == 0 {
            return Err(ConfigError::ZeroEpisodes);
        }
        Ok(())
    }
}
