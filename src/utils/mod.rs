//! Digit, partition, ordering and letter helpers shared by the core searches

mod digits;
mod errors;
mod letters;
mod orderings;
mod partitions;
mod validation;

pub use digits::{digit_count, digit_sequence, digits_to_number, partition_values};
pub use errors::UtilsError;
pub use letters::{core_to_letter, letter_code, word_codes, word_to_number};
pub use orderings::operator_orderings;
pub use partitions::generate_partitions;
pub use validation::{validate_number, validate_word};

#[cfg(test)]
mod tests;
