mod questions;

pub use questions::{max_total, Question, QUESTIONS, RATING_MAX, RATING_MIN};

use std::io::IsTerminal;

/// Display settings resolved once at startup.
///
/// Nothing is read from disk or the environment; the question set is
/// compiled in and colour follows whether stdout is a terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    pub use_colors: bool,
}

impl Settings {
    /// Detect settings for the current process
    pub fn detect() -> Self {
        Self {
            use_colors: should_use_colors(),
        }
    }

    /// Settings with every terminal decoration switched off
    pub fn plain() -> Self {
        Self { use_colors: false }
    }
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}
