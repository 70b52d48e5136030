use std::io::{BufRead, Write};

use anyhow::Result;

use crate::config::Question;
use crate::output::{format_progress, format_question_header};
use crate::prompt::{collect_rating, Console};
use crate::scoring::EvaluationSession;

/// Run one evaluation: ask every question in order and return the filled session.
pub fn run_evaluation<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    questions: &[Question],
) -> Result<EvaluationSession> {
    let count = questions.len();
    let mut session = EvaluationSession::new(count);

    for (idx, question) in questions.iter().enumerate() {
        let position = idx + 1;
        console.say(&format_question_header(position, count))?;

        let rating = collect_rating(console, question)?;
        session.record(rating)?;

        console.say(&format_progress(session.answered(), count))?;
    }

    tracing::debug!(
        "evaluation finished: total {} ({})",
        session.total(),
        session.band().label()
    );
    Ok(session)
}
