use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;
use crate::expression::eval::calc_core_candidate;

#[test]
fn test_subtract_then_divide_is_fractional() {
    // 8 - 6 = 2, 2 / 4 = 0.5, 0.5 * 5 = 2.5
    let result = calc_core_candidate(&[8, 6, 4, 5], &["s", "d", "m"]);
    assert!(matches!(result, Err(ExpressionError::InvalidResult(_))));
}

#[test]
fn test_divide_then_multiply() {
    let result = calc_core_candidate(&[9, 3, 2], &["d", "m"]);
    assert_eq!(result, Ok(6));
}

#[test]
fn test_fold_has_no_precedence() {
    // 20 - 2 * 3 is (20 - 2) * 3 = 54, not 14
    let expr = Expression::new(vec![20, 2, 3], vec![Operator::Subtract, Operator::Multiply]);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate(), Ok(54));
    }
}

#[test]
fn test_fractional_intermediate_can_recover() {
    // 86 / 4 = 21.5, 21.5 * 2 = 43
    let result = calc_core_candidate(&[86, 4, 2], &["d", "m"]);
    assert_eq!(result, Ok(43));
}

#[test]
fn test_division_by_zero() {
    let result = calc_core_candidate(&[7, 0, 3, 1], &["d", "s", "m"]);
    assert_eq!(result, Err(ExpressionError::DivisionByZero));
}

#[test]
fn test_zero_result_is_invalid() {
    let result = calc_core_candidate(&[9, 9, 9, 9], &["s", "d", "m"]);
    assert!(matches!(result, Err(ExpressionError::InvalidResult(_))));
}

#[test]
fn test_negative_result_is_invalid() {
    // 1 * 2 = 2, 2 - 3 = -1, -1 / 4 = -0.25
    let result = calc_core_candidate(&[1, 2, 3, 4], &["m", "s", "d"]);
    assert!(matches!(result, Err(ExpressionError::InvalidResult(_))));
}

#[test]
fn test_invalid_result_reports_exact_value() {
    let result = calc_core_candidate(&[1, 2], &["d"]);
    assert_eq!(result, Err(ExpressionError::InvalidResult("1/2".to_string())));
}

#[test]
fn test_unknown_operator() {
    let result = calc_core_candidate(&[1, 2, 3], &["s", "x"]);
    assert_eq!(
        result,
        Err(ExpressionError::UnknownOperator("x".to_string()))
    );
}

#[test]
fn test_arity_mismatch() {
    let expr = Expression::new(vec![1, 2, 3], vec![Operator::Subtract]);
    assert_eq!(
        expr,
        Err(ExpressionError::ArityMismatch {
            numbers: 3,
            operators: 1
        })
    );

    let expr = Expression::new(Vec::new(), Vec::new());
    assert!(expr.is_err());
}

#[test]
fn test_single_number_is_its_own_value() {
    let expr = Expression::new(vec![42], Vec::new());
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(expr.evaluate(), Ok(42));
    }
}

#[test]
fn test_large_values_stay_exact() {
    // 99999999999 / 3 = 33333333333 exactly, then * 3 - 1
    let result = calc_core_candidate(&[99_999_999_999, 3, 3, 1], &["d", "m", "s"]);
    assert_eq!(result, Ok(99_999_999_998));
}

#[test]
fn test_operator_tags_round_trip() {
    for op in [Operator::Subtract, Operator::Divide, Operator::Multiply] {
        let tag = op.tag().to_string();
        assert_eq!(Operator::try_from(tag.as_str()), Ok(op));
    }
}

#[test]
fn test_expression_display() {
    let expr = Expression::from_tags(vec![86, 4, 5, 5], &["s", "d", "m"]);
    assert!(expr.is_ok());
    if let Ok(expr) = expr {
        assert_eq!(format!("{}", expr), "86 - 4 / 5 * 5");
    }
}
