//! Connect Four on a 6x7 grid.
//!
//! Actions are column numbers 0-6. A piece falls to the lowest empty row;
//! four in a line horizontally, vertically or diagonally wins.

use std::fmt;

use crate::core::{Action, GameError, GameRng, GameState, Player, StepOutcome};

/// Number of rows.
pub const ROWS: usize = 6;
/// Number of columns.
pub const COLS: usize = 7;
const NEEDED: usize = 4;

/// Connect Four position. Row 0 is the top of the board.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct ConnectFour {
    board: [[Option<Player>; COLS]; ROWS],
    current: Player,
    result: Option<Option<Player>>,
    visual: bool,
}

impl ConnectFour {
    /// Empty board with `Player::One` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: [[None; COLS]; ROWS],
            current: Player::One,
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
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.board[row][col]
    }

    /// The winner, if the game has been won.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.flatten()
    }

    fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).rev().find(|&row| self.board[row][col].is_none())
    }

    /// Count of `player`'s pieces from (row, col) stepping by (dr, dc),
    /// excluding the starting cell.
    fn run_length(&self, player: Player, row: usize, col: usize, dr: isize, dc: isize) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.board[r as usize][c as usize] == Some(player)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    fn wins_through(&self, player: Player, row: usize, col: usize) -> bool {
        [(0, 1), (1, 0), (1, -1), (1, 1)].iter().any(|&(dr, dc)| {
            1 + self.run_length(player, row, col, dr, dc) + self.run_length(player, row, col, -dr, -dc)
                >= NEEDED
        })
    }
}

impl Default for ConnectFour {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ConnectFour {
    fn clone(&self) -> Self {
        Self {
            board: self.board,
            current: self.current,
            result: self.result,
            visual: false,
        }
    }
}

impl GameState for ConnectFour {
    /// Clear the board; `Player::One` always starts.
    fn reset(&mut self, _rng: &mut GameRng) {
        self.board = [[None; COLS]; ROWS];
        self.current = Player::One;
        self.result = None;
    }

    fn legal_actions(&self) -> Vec<Action> {
        if self.result.is_some() {
            return Vec::new();
        }
        (0..COLS).filter(|&col| self.board[0][col].is_none()).collect()
    }

    fn step(&mut self, action: Action) -> Result<StepOutcome, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver { action });
        }
        let row = match (action < COLS).then(|| self.lowest_empty_row(action)).flatten() {
            Some(row) => row,
            None => {
                return Err(GameError::InvalidAction {
                    action,
                    legal: self.legal_actions(),
                })
            }
        };

        let mover = self.current;
        self.board[row][action] = Some(mover);

        if self.wins_through(mover, row, action) {
            self.result = Some(Some(mover));
            return Ok(StepOutcome::Finished { reward: 1.0 });
        }
        if self.board[0].iter().all(Option::is_some) {
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
        let header: Vec<String> = (0..COLS).map(|c| c.to_string()).collect();
        let mut lines = vec![
            format!("  {}", header.join(" ")),
            format!("  {}", "-".repeat(COLS * 2 - 1)),
        ];
        for row in &self.board {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or('.', Player::symbol).to_string())
                .collect();
            lines.push(format!("  {}", cells.join(" ")));
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

impl fmt::Display for ConnectFour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
