//! Interactive agent reading actions from a text stream.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::core::{Action, AgentError, GameState};

use super::Agent;

/// Prompts a person for each move.
///
/// Generic over its input and output so it can be driven by stdin/stdout or
/// by in-memory buffers.
#[derive(Debug)]
pub struct HumanAgent<R, W> {
    name: String,
    input: R,
    output: W,
}

impl HumanAgent<BufReader<Stdin>, Stdout> {
    /// Human agent on the process's stdin and stdout.
    ///
    /// Several of these can share stdin: the one-byte buffer never holds
    /// data past the end of the line just read.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::with_capacity(1, io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanAgent<R, W> {
    /// Human agent on arbitrary streams.
    pub fn new(input: R, output: W) -> Self {
        Self {
            name: "Human".to_string(),
            input,
            output,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Consume the agent, returning its streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<S: GameState, R: BufRead, W: Write> Agent<S> for HumanAgent<R, W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn select_action(&mut self, state: &S) -> Result<Action, AgentError> {
        let legal = state.legal_actions();
        if legal.is_empty() {
            return Err(AgentError::NoLegalActions);
        }

        let mut line = String::new();
        loop {
            write!(self.output, "{}, enter your action {:?}: ", self.name, legal)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output, "\nGame interrupted by user.")?;
                return Err(AgentError::Interrupted);
            }

            match line.trim().parse::<Action>() {
                Ok(action) if legal.contains(&action) => return Ok(action),
                Ok(_) => writeln!(self.output, "Invalid action! Must be one of {:?}", legal)?,
                Err(_) => writeln!(self.output, "Invalid input! Please enter a number.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::TicTacToe;
    use std::io::Cursor;

    fn human(input: &str) -> HumanAgent<Cursor<Vec<u8>>, Vec<u8>> {
        HumanAgent::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_reads_legal_action() {
        let game = TicTacToe::new();
        let mut agent = human("4\n");

        assert_eq!(agent.select_action(&game).unwrap(), 4);

        let (_, output) = agent.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output, "Human, enter your action [0, 1, 2, 3, 4, 5, 6, 7, 8]: ");
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut game = TicTacToe::new();
        game.step(0).unwrap();
        let mut agent = human("abc\n0\n 7 \n").with_name("Ada");

        assert_eq!(agent.select_action(&game).unwrap(), 7);

        let (_, output) = agent.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid input! Please enter a number."));
        assert!(output.contains("Invalid action! Must be one of [1, 2, 3, 4, 5, 6, 7, 8]"));
        assert_eq!(output.matches("Ada, enter your action").count(), 3);
    }

    #[test]
    fn test_end_of_input_interrupts() {
        let game = TicTacToe::new();
        let mut agent = human("x\n");

        assert!(matches!(
            agent.select_action(&game),
            Err(AgentError::Interrupted)
        ));
    }
}
