use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::config::{Question, Settings};
use crate::evaluation::run_evaluation;
use crate::output::{format_banner, format_farewell, format_report, rule, REPORT_RULE_WIDTH};
use crate::prompt::{ask_another, Answer, Console};

/// Run evaluations until the user declines another one.
///
/// Every pass builds a fresh session, so no rating or total leaks from one
/// idea into the next. Returns the total of each completed session in order.
pub fn run_sessions<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    questions: &[Question],
    settings: &Settings,
) -> Result<Vec<u32>> {
    let mut totals = Vec::new();

    loop {
        let number = totals.len() + 1;
        tracing::debug!("starting evaluation session {}", number);

        console.say(&format_banner(settings.use_colors))?;
        let session = run_evaluation(console, questions)
            .with_context(|| format!("Evaluation session {} did not finish", number))?;

        console.say(&format_report(questions, &session, settings.use_colors))?;
        totals.push(session.total());

        console.say(&format!("\n{}", rule(REPORT_RULE_WIDTH)))?;
        match ask_another(console).context("No answer to the restart question")? {
            Answer::Yes => {
                tracing::debug!("session {} done (total {}), restarting", number, session.total());
                console.say(&format!("\n{}", rule(REPORT_RULE_WIDTH)))?;
            }
            Answer::No => {
                console.say(&format_farewell())?;
                break;
            }
        }
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QUESTIONS;
    use crate::prompt::test_support::{scripted, written};
    use crate::prompt::PromptError;

    fn script(sessions: &[(&'static str, &'static str)]) -> Vec<&'static str> {
        let mut lines = Vec::new();
        for (rating, answer) in sessions {
            lines.extend([*rating; 10]);
            lines.push(*answer);
        }
        lines
    }

    #[test]
    fn test_single_session_then_quit() {
        let mut console = scripted(&script(&[("8", "n")]));
        let totals = run_sessions(&mut console, &QUESTIONS, &Settings::plain()).unwrap();
        assert_eq!(totals, vec![80]);

        let out = written(console);
        assert!(out.starts_with("🚀 Idea Evaluation Tool\n"));
        assert!(out.contains("🏆 TOTAL SCORE: 80/100"));
        assert!(out.contains("🔥 Excellent!"));
        assert!(out.trim_end().ends_with("👋 Thanks for using the Idea Evaluation Tool!"));
    }

    #[test]
    fn test_restart_gives_independent_total() {
        let mut console = scripted(&script(&[("10", "y"), ("1", "no")]));
        let totals = run_sessions(&mut console, &QUESTIONS, &Settings::plain()).unwrap();
        assert_eq!(totals, vec![100, 10]);

        let out = written(console);
        assert_eq!(out.matches("🚀 Idea Evaluation Tool").count(), 2);
        assert_eq!(out.matches("🎉 EVALUATION COMPLETE!").count(), 2);
        assert!(out.contains("🏆 TOTAL SCORE: 100/100"));
        assert!(out.contains("🏆 TOTAL SCORE: 10/100"));
        assert!(out.contains("🛑 Low score."));
    }

    #[test]
    fn test_many_restarts_run_in_a_loop() {
        let mut sessions = vec![("7", "YES"); 50];
        sessions.push(("7", "N"));
        let mut console = scripted(&script(&sessions));
        let totals = run_sessions(&mut console, &QUESTIONS, &Settings::plain()).unwrap();
        assert_eq!(totals.len(), 51);
        assert!(totals.iter().all(|t| *t == 70));
    }

    #[test]
    fn test_unclear_answer_does_not_restart() {
        let mut lines = script(&[("5", "sure")]);
        lines.push("n");
        let mut console = scripted(&lines);
        let totals = run_sessions(&mut console, &QUESTIONS, &Settings::plain()).unwrap();
        assert_eq!(totals, vec![50]);
        assert!(written(console).contains("Please enter 'y' for yes or 'n' for no."));
    }

    #[test]
    fn test_closed_input_surfaces_through_context() {
        let mut console = scripted(&["5", "5"]);
        let err = run_sessions(&mut console, &QUESTIONS, &Settings::plain()).unwrap_err();
        let closed = err
            .chain()
            .any(|e| matches!(e.downcast_ref::<PromptError>(), Some(PromptError::InputClosed)));
        assert!(closed, "{:#}", err);
    }

    #[test]
    fn test_closed_input_at_restart_question() {
        let mut console = scripted(&["9"; 10]);
        let err = run_sessions(&mut console, &QUESTIONS, &Settings::plain()).unwrap_err();
        assert!(format!("{:#}", err).contains("restart question"));
    }
}
