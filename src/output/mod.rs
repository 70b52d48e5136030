pub mod formatter;

pub use formatter::{
    format_banner, format_farewell, format_progress, format_progress_bar, format_question_header,
    format_report, format_stars, rule, REPORT_RULE_WIDTH,
};
