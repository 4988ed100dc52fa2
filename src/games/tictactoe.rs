//! Tic-tac-toe on a 3x3 grid.
//!
//! Actions are cell indices, row-major:
//!
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use std::fmt;

use crate::core::{Action, GameError, GameRng, GameState, Player, StepOutcome};

const CELLS: usize = 9;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Tic-tac-toe position.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    board: [Option<Player>; CELLS],
    current: Player,
    /// Set once a move ends the game: `Some(winner)` or `None` for a draw.
    result: Option<Option<Player>>,
    visual: bool,
}

impl TicTacToe {
    /// Empty board with `Player::One` to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_first_player(Player::One)
    }

    /// Empty board with the given player to move.
    #[must_use]
    pub fn with_first_player(first: Player) -> Self {
        Self {
            board: [None; CELLS],
            current: first,
            result: None,
            visual: false,
        }
    }

    /// Enable display after each move.
    #[must_use]
    pub fn visual(mut self) -> Self {
        self.visual = true;
        self
    }

    /// Piece at a cell, if any.
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Player> {
        self.board[cell]
    }

    /// The winner, if the game has been won.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.flatten()
    }

    fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.board[cell] == Some(player)))
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TicTacToe {
    fn clone(&self) -> Self {
        Self {
            board: self.board,
            current: self.current,
            result: self.result,
            visual: false,
        }
    }
}

impl GameState for TicTacToe {
    /// Clear the board; the starting player is chosen uniformly at random.
    fn reset(&mut self, rng: &mut GameRng) {
        self.board = [None; CELLS];
        self.result = None;
        self.current = if rng.gen_bool(0.5) { Player::One } else { Player::Two };
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.result.is_some() {
            return Vec::new();
        }
        (0..CELLS).filter(|&cell| self.board[cell].is_none()).collect()
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver { action });
        }
        if action >= CELLS || self.board[action].is_some() {
            return Err(GameError::InvalidAction {
                action,
                legal: self.legal_actions(),
            });
        }

        let mover = self.current;
        self.board[action] = Some(mover);

        if self.has_line(mover) {
            self.result = Some(Some(mover));
            return Ok(StepOutcome::Finished { reward: 1.0 });
        }
        if self.is_full() {
            self.result = Some(None);
            return Ok(StepOutcome::Finished { reward: 0.0 });
        }

        self.current = mover.opponent();
        Ok(StepOutcome::Ongoing)
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn render(&self) -> String {
        let symbol = |cell: usize| self.board[cell].map_or(' ', Player::symbol);

        let mut lines = vec!["  0   1   2".to_string()];
        for row in 0..3 {
            let cells: Vec<String> = (0..3).map(|col| symbol(row * 3 + col).to_string()).collect();
            lines.push(format!("{} {}", row * 3, cells.join(" | ")));
            if row < 2 {
                lines.push("  -----------".to_string());
            }
        }
        lines.join("\n")
    }

    fn is_visual(&self) -> bool {
        self.visual
    }

    fn set_visual(&mut self, visual: bool) {
        self.visual = visual;
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
