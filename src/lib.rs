//! numcore - A library for reducing integers and words to their numeric core
//!
//! A number's digits are cut into 4 contiguous groups and folded left to right
//! with every ordering of subtract, divide and multiply. The smallest positive
//! integer result wins, and the search repeats on it until at most 3 digits
//! remain. Words use their letters' alphabet positions as the 4 numbers.

pub mod expression;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use expression::{Expression, ExpressionError, Operator, calc_core_candidate};
pub use solver::{CoreConfig, CoreReport, CoreSolver, ReductionStep, SolverError};
pub use utils::{
    UtilsError, core_to_letter, validate_number, validate_word, word_codes, word_to_number,
};

/// Find the numeric core of a non-negative integer
///
/// This is a convenience function that creates a default solver.
///
/// # Errors
///
/// This function will return an error if:
/// * The number is negative
/// * Some reduction level has no positive integer candidate
///
/// # Examples
///
/// ```
/// use numcore::numeric_core;
///
/// assert_eq!(numeric_core(86455), Ok(18));
/// assert!(numeric_core(-1).is_err());
/// ```
pub fn numeric_core(number: i64) -> Result<u64, SolverError> {
    CoreSolver::default().integer_core(number)
}

/// Find the numeric core of a 4-letter word
///
/// # Errors
///
/// This function will return an error if:
/// * The word is not exactly 4 ASCII letters
/// * No operator ordering folds the letter codes to a positive integer
///
/// # Examples
///
/// ```
/// use numcore::{core_to_letter, numeric_core_word};
///
/// let core = numeric_core_word("zzzz");
/// assert_eq!(core, Ok(25));
/// assert_eq!(core_to_letter(25), Ok('y'));
/// ```
pub fn numeric_core_word(word: &str) -> Result<u64, SolverError> {
    CoreSolver::default().word_core(word)
}
