use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::config::{RATING_MAX, RATING_MIN};

/// A validated answer to one question, always within `RATING_MIN..=RATING_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, RatingError> {
        if (i64::from(RATING_MIN)..=i64::from(RATING_MAX)).contains(&value) {
            Ok(Rating(value as u8))
        } else {
            Err(RatingError::OutOfRange(value.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    /// Trims the input and parses it as a signed integer.
    /// Integers too large for `i64` still count as out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.parse::<i64>() {
            Ok(value) => Rating::new(value),
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    Err(RatingError::OutOfRange(s.to_string()))
                }
                _ => Err(RatingError::NotANumber(s.to_string())),
            },
        }
    }
}

/// Why a line of input was not accepted as a rating
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    NotANumber(String),
    OutOfRange(String),
}

impl RatingError {
    /// Feedback shown to the user before re-prompting
    pub fn user_message(&self) -> String {
        match self {
            RatingError::NotANumber(_) => format!(
                "❌ Please enter a valid number between {} and {}.",
                RATING_MIN, RATING_MAX
            ),
            RatingError::OutOfRange(_) => format!(
                "❌ Please enter a number between {} and {}.",
                RATING_MIN, RATING_MAX
            ),
        }
    }
}

impl fmt::Display for RatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingError::NotANumber(input) => write!(f, "'{}' is not a whole number", input),
            RatingError::OutOfRange(input) => write!(
                f,
                "{} is outside {}-{}",
                input, RATING_MIN, RATING_MAX
            ),
        }
    }
}

impl std::error::Error for RatingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_valid_value_parses() {
        for r in 1..=10u8 {
            let rating: Rating = r.to_string().parse().unwrap();
            assert_eq!(rating.value(), r);
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        assert_eq!(" 7 \n".parse::<Rating>().unwrap().value(), 7);
        assert_eq!("\t10".parse::<Rating>().unwrap().value(), 10);
    }

    #[test]
    fn test_sign_and_zero_padding_accepted() {
        assert_eq!("+5".parse::<Rating>().unwrap().value(), 5);
        assert_eq!("03".parse::<Rating>().unwrap().value(), 3);
    }

    #[test]
    fn test_non_numeric_is_parse_error() {
        for input in ["abc", "", "5.5", "five", "1 0", "--3"] {
            assert!(
                matches!(input.parse::<Rating>(), Err(RatingError::NotANumber(_))),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_out_of_range_is_range_error() {
        for input in ["0", "11", "-1", "100"] {
            assert!(
                matches!(input.parse::<Rating>(), Err(RatingError::OutOfRange(_))),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_overflow_is_range_error() {
        let result = "99999999999999999999999".parse::<Rating>();
        assert!(matches!(result, Err(RatingError::OutOfRange(_))));
        let result = "-99999999999999999999999".parse::<Rating>();
        assert!(matches!(result, Err(RatingError::OutOfRange(_))));
    }

    #[test]
    fn test_user_messages_differ_by_failure() {
        let parse = RatingError::NotANumber("abc".to_string()).user_message();
        let range = RatingError::OutOfRange("11".to_string()).user_message();
        assert_eq!(parse, "❌ Please enter a valid number between 1 and 10.");
        assert_eq!(range, "❌ Please enter a number between 1 and 10.");
    }
}
