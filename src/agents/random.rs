//! Uniform-random baseline.

use crate::core::{Action, AgentError, GameRng, GameState};

use super::Agent;

/// Plays a legal action chosen uniformly at random.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    name: String,
    rng: GameRng,
}

impl RandomAgent {
    /// Create a random agent with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            name: "Random".to_string(),
            rng: GameRng::new(seed),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl<S: GameState> Agent<S> for RandomAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, state: &S) -> Result<Action, AgentError> {
        self.rng
            .choose(&state.legal_actions())
            .copied()
            .ok_or(AgentError::NoLegalActions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{ConnectFour, TicTacToe};

    #[test]
    fn test_picks_legal_actions() {
        let mut game = ConnectFour::new();
        for _ in 0..5 {
            game.step(0).unwrap();
        }
        let mut agent = RandomAgent::new(1);

        let mut seen = Vec::new();
        for _ in 0..200 {
            let action = agent.select_action(&game).unwrap();
            assert!(game.legal_actions().contains(&action));
            if !seen.contains(&action) {
                seen.push(action);
            }
        }
        assert_eq!(seen.len(), game.legal_actions().len());
    }

    #[test]
    fn test_seed_is_reproducible() {
        let game = TicTacToe::new();
        let mut a = RandomAgent::new(7);
        let mut b = RandomAgent::new(7);

        for _ in 0..20 {
            assert_eq!(
                a.select_action(&game).unwrap(),
                b.select_action(&game).unwrap()
            );
        }
    }

    #[test]
    fn test_terminal_state() {
        let mut game = TicTacToe::new();
        for m in [0, 3, 1, 4, 2] {
            game.step(m).unwrap();
        }
        let mut agent = RandomAgent::new(0).with_name("R");

        assert_eq!(Agent::<TicTacToe>::name(&agent), "R");
        assert!(matches!(
            agent.select_action(&game),
            Err(AgentError::NoLegalActions)
        ));
    }
}
