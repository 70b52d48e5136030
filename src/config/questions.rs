use std::fmt;

/// Lowest accepted rating for a single question
pub const RATING_MIN: u8 = 1;

/// Highest accepted rating for a single question
pub const RATING_MAX: u8 = 10;

/// One evaluation criterion.
///
/// The plain text and the decorative emoji are kept apart so the report can
/// show the bare question while prompts show both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub decoration: &'static str,
}

impl Question {
    pub const fn new(text: &'static str, decoration: &'static str) -> Self {
        Self { text, decoration }
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.decoration.is_empty() {
            write!(f, "{}", self.text)
        } else {
            write!(f, "{} {}", self.text, self.decoration)
        }
    }
}

/// The fixed, ordered question set. A question's identity is its position.
pub const QUESTIONS: [Question; 10] = [
    Question::new("How excited are you about this idea?", "😍"),
    Question::new("What's your level of expertise?", "🎓"),
    Question::new("How confident are you that people want this?", "🎯"),
    Question::new("How straightforward would it be?", "⚡"),
    Question::new("How quickly could you complete this?", "⏱️"),
    Question::new("How strong is your unique angle or differentiation?", "💎"),
    Question::new("How relevant will this idea be in 5 years' time?", "🔮"),
    Question::new("How low-maintenance will this be?", "🧘"),
    Question::new("How well does this fit with your strategy?", "🎯"),
    Question::new("How many doors would this open to other opportunities?", "🚪"),
];

/// Highest possible total for a question set of the given length
pub fn max_total(question_count: usize) -> u32 {
    question_count as u32 * u32::from(RATING_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_set_has_ten_entries() {
        assert_eq!(QUESTIONS.len(), 10);
        assert_eq!(max_total(QUESTIONS.len()), 100);
    }

    #[test]
    fn test_display_joins_text_and_decoration() {
        let q = Question::new("How excited are you about this idea?", "😍");
        assert_eq!(q.to_string(), "How excited are you about this idea? 😍");
    }

    #[test]
    fn test_display_without_decoration() {
        let q = Question::new("Plain question?", "");
        assert_eq!(q.to_string(), "Plain question?");
    }

    #[test]
    fn test_text_never_carries_decoration() {
        for q in &QUESTIONS {
            assert!(!q.text.contains(q.decoration), "{:?}", q);
            assert!(q.text.ends_with('?'));
        }
    }
}
