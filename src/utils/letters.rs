use log::debug;

use crate::utils::errors::UtilsError;

const ALPHABET_LEN: u64 = 26;

/// 1-indexed alphabet position of an ASCII letter, case-insensitive (`a` = 1, `z` = 26)
///
/// # Errors
///
/// Returns `InvalidLetter` for anything that is not an ASCII letter.
pub fn letter_code(letter: char) -> Result<u64, UtilsError> {
    if !letter.is_ascii_alphabetic() {
        return Err(UtilsError::InvalidLetter(letter));
    }
    Ok(u64::from(letter.to_ascii_lowercase() as u8 - b'a') + 1)
}

/// Letter codes of every character in `word`
///
/// # Errors
///
/// Fails on the first non-letter character.
pub fn word_codes(word: &str) -> Result<Vec<u64>, UtilsError> {
    let codes = word.chars().map(letter_code).collect::<Result<Vec<_>, _>>()?;
    debug!("Letter codes of '{}': {:?}", word, codes);
    Ok(codes)
}

/// Lowercase letter at 1-indexed alphabet position `core`.
///
/// Values outside `1..=26` have no letter; they are reported rather than
/// wrapped around the alphabet.
///
/// # Errors
///
/// Returns `LetterOutOfRange` when `core` is 0 or greater than 26.
pub fn core_to_letter(core: u64) -> Result<char, UtilsError> {
    if !(1..=ALPHABET_LEN).contains(&core) {
        return Err(UtilsError::LetterOutOfRange(core));
    }
    let offset = u8::try_from(core - 1).map_err(|_| UtilsError::LetterOutOfRange(core))?;
    Ok(char::from(b'a' + offset))
}

/// Concatenate the decimal letter codes of `word` into one number (`"abz"` -> 1226)
///
/// # Errors
///
/// Returns an error for non-letters, an empty word, or a concatenation that
/// does not fit in 64 bits.
pub fn word_to_number(word: &str) -> Result<u64, UtilsError> {
    let digits: String = word_codes(word)?
        .iter()
        .map(|code| code.to_string())
        .collect();

    if digits.is_empty() {
        return Err(UtilsError::InvalidWordLength {
            expected: 1,
            found: 0,
        });
    }

    digits
        .parse::<u64>()
        .map_err(|_| UtilsError::NumberTooLarge(digits.clone()))
}
