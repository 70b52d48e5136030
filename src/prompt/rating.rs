use std::io::{BufRead, Write};

use super::{Console, PromptError};
use crate::config::{Question, RATING_MAX, RATING_MIN};
use crate::scoring::Rating;

/// Ask `question` until the answer is a whole number in range.
///
/// Invalid answers print feedback and re-ask the same question; only a
/// closed or failing console ends the loop early.
pub fn collect_rating<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &Question,
) -> Result<Rating, PromptError> {
    let prompt = format!("Rating ({}-{}): ", RATING_MIN, RATING_MAX);
    loop {
        console.say(&format!("\n📝 {}", question))?;
        let input = console.ask(&prompt)?;

        match input.parse::<Rating>() {
            Ok(rating) => return Ok(rating),
            Err(e) => {
                tracing::debug!("rejected rating for '{}': {}", question.text, e);
                console.say(&e.user_message())?;
            }
        }
    }
}
