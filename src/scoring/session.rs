use std::fmt;

use super::band::InterpretationBand;
use super::rating::Rating;

/// Ratings collected during one pass over the question set.
///
/// A fresh session is built for every run; nothing carries over between
/// sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationSession {
    question_count: usize,
    ratings: Vec<Rating>,
    total: u32,
}

impl EvaluationSession {
    pub fn new(question_count: usize) -> Self {
        Self {
            question_count,
            ratings: Vec::with_capacity(question_count),
            total: 0,
        }
    }

    /// Append the rating for the next unanswered question
    pub fn record(&mut self, rating: Rating) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::AlreadyComplete {
                question_count: self.question_count,
            });
        }
        self.ratings.push(rating);
        self.total += u32::from(rating.value());
        Ok(())
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn answered(&self) -> usize {
        self.ratings.len()
    }

    pub fn question_count(&self) -> usize {
        self.question_count
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_complete(&self) -> bool {
        self.ratings.len() >= self.question_count
    }

    pub fn band(&self) -> InterpretationBand {
        InterpretationBand::for_score(self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    AlreadyComplete { question_count: usize },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::AlreadyComplete { question_count } => write!(
                f,
                "All {} questions already have a rating",
                question_count
            ),
        }
    }
}

impl std::error::Error for SessionError {}
