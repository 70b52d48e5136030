use std::io::{BufRead, Write};

use super::{Console, PromptError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Yes,
    No,
}

/// Case-insensitive y/yes or n/no; anything else is `None`
pub fn parse_answer(input: &str) -> Option<Answer> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}

/// Ask whether to run another evaluation, repeating until the answer is clear
pub fn ask_another<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Answer, PromptError> {
    loop {
        let input = console.ask("Would you like to evaluate another idea? (y/n): ")?;
        match parse_answer(&input) {
            Some(answer) => return Ok(answer),
            None => {
                tracing::debug!("unrecognised yes/no answer: {:?}", input);
                console.say("Please enter 'y' for yes or 'n' for no.")?;
            }
        }
    }
}
