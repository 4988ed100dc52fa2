//! The game-state contract every search strategy is written against.
//!
//! ## Perspective conventions
//!
//! - `step` reports its reward from the perspective of the player who just
//!   moved: +1 win, -1 loss, 0 draw.
//! - A non-terminal `step` hands the turn to the opponent. A terminal `step`
//!   does not: `current_player()` still names the mover afterwards.
//! - A finished state has no legal actions.
//!
//! Search code converts rewards between perspectives by comparing the mover
//! captured *before* `step` against the player it is scoring for, so it does
//! not depend on the second rule.

use super::error::GameError;
use super::player::Player;
use super::rng::GameRng;

/// Action identifier (cell or column index).
pub type Action = usize;

/// Result of applying a legal action.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepOutcome {
    /// The game continues; the turn passed to the opponent.
    Ongoing,
    /// The move ended the game.
    Finished {
        /// Reward for the player who made the move.
        reward: f64,
    },
}

impl StepOutcome {
    /// True if the move ended the game.
    #[must_use]
    pub fn is_done(&self) -> bool {
        matches!(self, StepOutcome::Finished { .. })
    }

    /// Reward for the mover, if the game ended.
    #[must_use]
    pub fn reward(&self) -> Option<f64> {
        match *self {
            StepOutcome::Ongoing => None,
            StepOutcome::Finished { reward } => Some(reward),
        }
    }
}

/// A fully-determined position in a two-player sequential game.
///
/// `Clone` is the deep copy search strategies explore with. Implementations
/// must not carry the visual flag over to clones.
pub trait GameState: Clone {
    /// Reinitialize to a playable starting position.
    fn reset(&mut self, rng: &mut GameRng);

    /// Actions valid in this state. Empty exactly when the game is over.
    fn legal_actions(&self) -> Vec<Action>;

    /// Apply `action` in place.
    ///
    /// Fails with [`GameError`] if `action` is not currently legal.
    fn step(&mut self, action: Action) -> Result<StepOutcome, GameError>;

    /// The player to move (or, once finished, the player who moved last).
    fn current_player(&self) -> Player;

    /// Text representation for display.
    fn render(&self) -> String;

    /// True iff there are no legal actions.
    fn is_terminal(&self) -> bool {
        self.legal_actions().is_empty()
    }

    /// Whether `display` prints anything.
    fn is_visual(&self) -> bool;

    /// Toggle the display flag.
    fn set_visual(&mut self, visual: bool);

    /// Print the state if the visual flag is set.
    fn display(&self) {
        if self.is_visual() {
            println!("{}\n", self.render());
        }
    }
}
