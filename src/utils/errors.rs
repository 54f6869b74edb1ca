use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Invalid range: start={start}, end={end}, length={length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },
    #[error("Number must be non-negative, got {0}")]
    NegativeNumber(i64),
    #[error("Word must be {expected} letters long, got {found}")]
    InvalidWordLength { expected: usize, found: usize },
    #[error("Not an alphabetic letter: {0:?}")]
    InvalidLetter(char),
    #[error("No letter corresponds to {0}, expected a value in 1..=26")]
    LetterOutOfRange(u64),
    #[error("Number does not fit in 64 bits: {0}")]
    NumberTooLarge(String),
}
