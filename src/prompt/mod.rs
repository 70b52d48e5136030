pub mod confirm;
pub mod rating;

pub use confirm::{ask_another, parse_answer, Answer};
pub use rating::collect_rating;

use std::fmt;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Line-oriented terminal: prompts go to `output`, answers come from `input`.
///
/// Generic so the whole questionnaire can run against in-memory buffers.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write a line of text followed by a newline
    pub fn say(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Prompt user with a message and return their trimmed input.
    ///
    /// End-of-input yields `PromptError::InputClosed`.
    pub fn ask(&mut self, message: &str) -> Result<String, PromptError> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Err(PromptError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[derive(Debug)]
pub enum PromptError {
    /// Standard input reached end-of-file while waiting for an answer
    InputClosed,
    Io(io::Error),
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::InputClosed => write!(f, "Input closed before an answer was given"),
            PromptError::Io(e) => write!(f, "Console I/O failed: {}", e),
        }
    }
}

impl std::error::Error for PromptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromptError::InputClosed => None,
            PromptError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PromptError {
    fn from(e: io::Error) -> Self {
        PromptError::Io(e)
    }
}
