use owo_colors::OwoColorize;

use crate::config::{max_total, Question, RATING_MAX};
use crate::scoring::{EvaluationSession, InterpretationBand};

const FILLED_CELL: char = '█';
const EMPTY_CELL: char = '░';
const STAR: &str = "⭐";

/// Width of the heavy rules framing the report
pub const REPORT_RULE_WIDTH: usize = 50;

/// Width of the rule under the opening title
const BANNER_RULE_WIDTH: usize = 40;

/// A horizontal rule of `=` characters
pub fn rule(width: usize) -> String {
    "=".repeat(width)
}

/// Title block printed at the start of every session
pub fn format_banner(use_colors: bool) -> String {
    let title = "🚀 Idea Evaluation Tool";
    let title = if use_colors {
        title.bold().to_string()
    } else {
        title.to_string()
    };
    format!(
        "{}\n{}\nRate each criterion from 1-{} (where {} is best)",
        title,
        rule(BANNER_RULE_WIDTH),
        RATING_MAX,
        RATING_MAX
    )
}

/// "📊 Question i of N", preceded by a blank line
pub fn format_question_header(position: usize, count: usize) -> String {
    format!("\n📊 Question {} of {}", position, count)
}

/// Filled/empty bar of `count` cells with `done` of them filled
pub fn format_progress_bar(done: usize, count: usize) -> String {
    let done = done.min(count);
    let mut bar = String::with_capacity(count * FILLED_CELL.len_utf8());
    bar.extend(std::iter::repeat(FILLED_CELL).take(done));
    bar.extend(std::iter::repeat(EMPTY_CELL).take(count - done));
    bar
}

/// Progress line shown after each answer
pub fn format_progress(done: usize, count: usize) -> String {
    format!(
        "Progress: [{}] {}/{}",
        format_progress_bar(done, count),
        done,
        count
    )
}

/// One star per rating point
pub fn format_stars(value: u8) -> String {
    STAR.repeat(usize::from(value))
}

/// Apply the band's traffic-light colour
fn paint(text: &str, band: InterpretationBand, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match band {
        InterpretationBand::Excellent | InterpretationBand::Good => text.green().to_string(),
        InterpretationBand::Moderate => text.yellow().to_string(),
        InterpretationBand::BelowAverage | InterpretationBand::Low => text.red().to_string(),
    }
}

/// Full end-of-session report: every rating, the total and its interpretation.
///
/// Questions and ratings are paired by position; only the plain question
/// text is shown.
pub fn format_report(
    questions: &[Question],
    session: &EvaluationSession,
    use_colors: bool,
) -> String {
    let band = session.band();
    let heading = if use_colors {
        "🎉 EVALUATION COMPLETE!".bold().to_string()
    } else {
        "🎉 EVALUATION COMPLETE!".to_string()
    };

    let mut lines = vec![
        String::new(),
        rule(REPORT_RULE_WIDTH),
        heading,
        rule(REPORT_RULE_WIDTH),
        String::new(),
        "📋 Your Ratings:".to_string(),
    ];

    for (idx, (question, rating)) in questions.iter().zip(session.ratings()).enumerate() {
        lines.push(format!(
            "{:2}. {}: {}/{} {}",
            idx + 1,
            question.text,
            rating,
            RATING_MAX,
            format_stars(rating.value())
        ));
    }

    let total = format!("{}/{}", session.total(), max_total(questions.len()));
    lines.push(String::new());
    lines.push(format!("🏆 TOTAL SCORE: {}", paint(&total, band, use_colors)));
    lines.push(String::new());
    lines.push(format!(
        "💡 Interpretation: {}",
        paint(band.message(), band, use_colors)
    ));

    lines.join("\n")
}

/// Parting line once the user declines another session
pub fn format_farewell() -> String {
    "\n👋 Thanks for using the Idea Evaluation Tool!".to_string()
}
