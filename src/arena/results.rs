//! Match tallies.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of one finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Single winner.
    Winner(Player),
    /// Draw (no winner).
    Draw,
}

impl GameOutcome {
    /// Interpret a final reward, which is from `mover`'s perspective.
    #[must_use]
    pub fn from_reward(mover: Player, reward: f64) -> Self {
        if reward > 0.0 {
            GameOutcome::Winner(mover)
        } else if reward < 0.0 {
            GameOutcome::Winner(mover.opponent())
        } else {
            GameOutcome::Draw
        }
    }
}

/// Aggregate results of a match. Agent 1 always plays `Player::One`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResults {
    pub agent1_wins: u32,
    pub agent2_wins: u32,
    pub draws: u32,

    /// Moves played across all games.
    pub total_plies: u64,
}

impl MatchResults {
    /// Add one finished game.
    pub fn record(&mut self, outcome: GameOutcome, plies: u32) {
        match outcome {
            GameOutcome::Winner(Player::One) => self.agent1_wins += 1,
            GameOutcome::Winner(Player::Two) => self.agent2_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
        self.total_plies += u64::from(plies);
    }

    /// Games played.
    #[must_use]
    pub fn episodes(&self) -> u32 {
        self.agent1_wins + self.agent2_wins + self.draws
    }

    /// Agent 1's share of decisive games (0 when every game was drawn).
    #[must_use]
    pub fn agent1_win_rate(&self) -> f64 {
        let decisive = self.agent1_wins + self.agent2_wins;
        if decisive == 0 {
            0.0
        } else {
            f64::from(self.agent1_wins) / f64::from(decisive)
        }
    }

    /// Mean game length in plies.
    #[must_use]
    pub fn average_plies(&self) -> f64 {
        match self.episodes() {
            0 => 0.0,
            n => self.total_plies as f64 / f64::from(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_reward() {
        assert_eq!(
            GameOutcome::from_reward(Player::Two, 1.0),
            GameOutcome::Winner(Player::Two)
        );
        assert_eq!(
            GameOutcome::from_reward(Player::Two, -1.0),
            GameOutcome::Winner(Player::One)
        );
        assert_eq!(GameOutcome::from_reward(Player::One, 0.0), GameOutcome::Draw);
    }

    #[test]
    fn test_record_and_rates() {
        let mut results = MatchResults::default();
        assert_eq!(results.agent1_win_rate(), 0.0);
        assert_eq!(results.average_plies(), 0.0);

        results.record(GameOutcome::Winner(Player::One), 5);
        results.record(GameOutcome::Winner(Player::One), 7);
        results.record(GameOutcome::Winner(Player::Two), 6);
        results.record(GameOutcome::Draw, 9);

        assert_eq!(results.agent1_wins, 2);
        assert_eq!(results.agent2_wins, 1);
        assert_eq!(results.draws, 1);
        assert_eq!(results.episodes(), 4);
        assert_eq!(results.total_plies, 27);
        assert!((results.agent1_win_rate() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(results.average_plies(), 6.75);
    }

    #[test]
    fn test_all_draws_win_rate_is_zero() {
        let mut results = MatchResults::default();
        results.record(GameOutcome::Draw, 9);
        assert_eq!(results.agent1_win_rate(), 0.0);
    }
}
