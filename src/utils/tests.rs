use crate::expression::Operator;
use crate::utils::{
    UtilsError, core_to_letter, digit_count, digit_sequence, digits_to_number,
    generate_partitions, letter_code, operator_orderings, partition_values, validate_number,
    validate_word, word_codes, word_to_number,
};

#[test]
fn test_generate_partitions_single_block() {
    let partitions = generate_partitions(0, 3, 1);
    assert_eq!(partitions, vec![vec![(0, 3)]]);
}

#[test]
fn test_generate_partitions_four_blocks_of_five_digits() {
    // 86455 has 4 gaps, choosing 3 of them gives 4 partitions
    let partitions = generate_partitions(0, 5, 4);
    let expected = vec![
        vec![(0, 2), (2, 3), (3, 4), (4, 5)],
        vec![(0, 1), (1, 3), (3, 4), (4, 5)],
        vec![(0, 1), (1, 2), (2, 4), (4, 5)],
        vec![(0, 1), (1, 2), (2, 3), (3, 5)],
    ];
    assert_eq!(partitions, expected);
}

#[test]
fn test_generate_partitions_exact_fit() {
    let partitions = generate_partitions(0, 4, 4);
    assert_eq!(partitions, vec![vec![(0, 1), (1, 2), (2, 3), (3, 4)]]);
}

#[test]
fn test_generate_partitions_impossible() {
    assert_eq!(generate_partitions(0, 3, 4), Vec::<Vec<(usize, usize)>>::new());
    assert_eq!(generate_partitions(0, 1, 4), Vec::<Vec<(usize, usize)>>::new());
    assert_eq!(generate_partitions(0, 5, 0), Vec::<Vec<(usize, usize)>>::new());
}

#[test]
fn test_generate_partitions_count_is_binomial() {
    // 19 digits: C(18, 3) = 816
    let partitions = generate_partitions(0, 19, 4);
    assert_eq!(partitions.len(), 816);
    for partition in &partitions {
        assert_eq!(partition.len(), 4);
        if let (Some(first), Some(last)) = (partition.first(), partition.last()) {
            assert_eq!(first.0, 0);
            assert_eq!(last.1, 19);
        }
        for pair in partition.windows(2) {
            if let [current, next] = pair {
                assert_eq!(current.1, next.0);
                assert!(current.0 < current.1);
            }
        }
    }
}

#[test]
fn test_operator_orderings_are_permutations() {
    use Operator::{Divide, Multiply, Subtract};

    let orderings = operator_orderings(&[Subtract, Divide, Multiply], 3);
    let expected = vec![
        vec![Subtract, Divide, Multiply],
        vec![Subtract, Multiply, Divide],
        vec![Divide, Subtract, Multiply],
        vec![Divide, Multiply, Subtract],
        vec![Multiply, Subtract, Divide],
        vec![Multiply, Divide, Subtract],
    ];
    assert_eq!(orderings, expected);
}

#[test]
fn test_operator_orderings_partial_length() {
    use Operator::{Divide, Multiply, Subtract};

    let orderings = operator_orderings(&[Subtract, Divide, Multiply], 2);
    assert_eq!(orderings.len(), 6);
    assert!(orderings.iter().all(|o| o.len() == 2 && o[0] != o[1]));

    assert_eq!(operator_orderings(&[Subtract, Divide, Multiply], 0), vec![Vec::new()]);
    assert!(operator_orderings(&[Subtract, Divide, Multiply], 4).is_empty());
}

#[test]
fn test_digit_sequence_and_count() {
    assert_eq!(digit_sequence(86455), "86455");
    assert_eq!(digit_sequence(0), "0");
    assert_eq!(digit_count(0), 1);
    assert_eq!(digit_count(9), 1);
    assert_eq!(digit_count(999), 3);
    assert_eq!(digit_count(1000), 4);
    assert_eq!(digit_count(u64::MAX), 20);
}

#[test]
fn test_digits_to_number() {
    assert_eq!(digits_to_number("12345", 0, 3), Ok(123));
    assert_eq!(digits_to_number("12345", 2, 5), Ok(345));
    assert_eq!(digits_to_number("12345", 1, 4), Ok(234));
}

#[test]
fn test_digits_to_number_keeps_leading_zero_groups() {
    assert_eq!(digits_to_number("1055", 1, 4), Ok(55));
    assert_eq!(digits_to_number("1000", 1, 4), Ok(0));
}

#[test]
fn test_digits_to_number_invalid_range() {
    assert!(digits_to_number("12345", 0, 10).is_err());
    assert!(digits_to_number("12345", 5, 3).is_err());
    assert!(digits_to_number("12345", 2, 2).is_err());
}

#[test]
fn test_digits_to_number_rejects_signs() {
    assert_eq!(
        digits_to_number("+12", 0, 3),
        Err(UtilsError::InvalidDigitString("+12".to_string()))
    );
}

#[test]
fn test_partition_values() {
    let values = partition_values("86455", &[(0, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(values, Ok(vec![86, 4, 5, 5]));
}

#[test]
fn test_letter_codes() {
    assert_eq!(letter_code('a'), Ok(1));
    assert_eq!(letter_code('Z'), Ok(26));
    assert_eq!(letter_code('1'), Err(UtilsError::InvalidLetter('1')));
    assert_eq!(word_codes("AbCd"), Ok(vec![1, 2, 3, 4]));
}

#[test]
fn test_core_to_letter() {
    assert_eq!(core_to_letter(1), Ok('a'));
    assert_eq!(core_to_letter(25), Ok('y'));
    assert_eq!(core_to_letter(26), Ok('z'));
    assert_eq!(core_to_letter(0), Err(UtilsError::LetterOutOfRange(0)));
    assert_eq!(core_to_letter(27), Err(UtilsError::LetterOutOfRange(27)));
}

#[test]
fn test_word_to_number() {
    assert_eq!(word_to_number("abz"), Ok(1226));
    assert_eq!(word_to_number("JAZZ"), Ok(1012626));
    assert!(word_to_number("").is_err());
    assert!(word_to_number("a-b").is_err());
    assert!(matches!(
        word_to_number("zzzzzzzzzzzz"),
        Err(UtilsError::NumberTooLarge(_))
    ));
}

#[test]
fn test_validate_number() {
    assert_eq!(validate_number(0), Ok(0));
    assert_eq!(validate_number(86455), Ok(86455));
    assert_eq!(validate_number(-1), Err(UtilsError::NegativeNumber(-1)));
}

#[test]
fn test_validate_word() {
    assert!(validate_word("abcd", 4).is_ok());
    assert!(validate_word("WoRd", 4).is_ok());
    assert_eq!(
        validate_word("abc", 4),
        Err(UtilsError::InvalidWordLength {
            expected: 4,
            found: 3
        })
    );
    assert_eq!(
        validate_word("abcde", 4),
        Err(UtilsError::InvalidWordLength {
            expected: 4,
            found: 5
        })
    );
    assert_eq!(validate_word("ab1d", 4), Err(UtilsError::InvalidLetter('1')));
}
