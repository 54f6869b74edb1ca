use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the number is negative.
pub fn validate_number(number: i64) -> Result<u64, UtilsError> {
    debug!("Validating number: {}", number);

    u64::try_from(number).map_err(|_| {
        warn!("Number is negative: {}", number);
        UtilsError::NegativeNumber(number)
    })
}

/// # Errors
///
/// Returns an error if the word does not have exactly `expected_len` characters
/// or contains any non-ASCII-letter characters.
pub fn validate_word(word: &str, expected_len: usize) -> Result<(), UtilsError> {
    debug!("Validating word: '{}'", word);

    let found = word.chars().count();
    if found != expected_len {
        warn!("Word '{}' has {} letters, expected {}", word, found, expected_len);
        return Err(UtilsError::InvalidWordLength {
            expected: expected_len,
            found,
        });
    }

    if let Some(bad) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
        warn!("Word contains non-letter characters: '{}'", word);
        return Err(UtilsError::InvalidLetter(bad));
    }

    debug!("Word validation successful");
    Ok(())
}
