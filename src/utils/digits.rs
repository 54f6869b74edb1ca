use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Decimal digit sequence of a non-negative integer
pub fn digit_sequence(number: u64) -> String {
    number.to_string()
}

/// Number of decimal digits in `number` (zero has one digit)
pub fn digit_count(number: u64) -> usize {
    number.checked_ilog10().map_or(1, |exp| exp as usize + 1)
}

/// Parse `digits[start..end]` as a group value.
///
/// Leading zeros collapse, so `"055"` becomes 55.
///
/// # Errors
///
/// Returns an error if the provided indices are out of bounds or invalid,
/// or if the selected slice cannot be parsed into a numeric value.
pub fn digits_to_number(digits: &str, start: usize, end: usize) -> Result<u64, UtilsError> {
    debug!("Converting digits[{}..{}] from '{}'", start, end, digits);

    if start >= digits.len() || end > digits.len() || start >= end {
        warn!(
            "Invalid range: start={}, end={}, length={}",
            start,
            end,
            digits.len()
        );
        return Err(UtilsError::InvalidRange {
            start,
            end,
            length: digits.len(),
        });
    }

    let slice = digits.get(start..end).ok_or(UtilsError::InvalidRange {
        start,
        end,
        length: digits.len(),
    })?;

    if !slice.bytes().all(|b| b.is_ascii_digit()) {
        return Err(UtilsError::InvalidDigitString(slice.to_string()));
    }

    let result = slice
        .parse::<u64>()
        .map_err(|_| UtilsError::NumberTooLarge(slice.to_string()))?;
    debug!("Converted '{}' to {}", slice, result);
    Ok(result)
}

/// Parse every block of a partition into its group value
///
/// # Errors
///
/// Fails on the first block that [`digits_to_number`] rejects.
pub fn partition_values(digits: &str, partition: &[(usize, usize)]) -> Result<Vec<u64>, UtilsError> {
    partition
        .iter()
        .map(|&(start, end)| digits_to_number(digits, start, end))
        .collect()
}
