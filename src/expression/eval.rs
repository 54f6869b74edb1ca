use log::debug;
use num_rational::Ratio;
use num_traits::{CheckedDiv, CheckedMul, CheckedSub, ToPrimitive, Zero};

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Exact value of a partially folded expression
type Value = Ratio<i128>;

#[inline]
fn is_positive_integer(value: &Value) -> bool {
    value.is_integer() && *value > Value::zero()
}

impl Expression {
    /// Fold the numbers left to right and return the result as a core candidate.
    ///
    /// Division is exact, so `2 / 4` stays `1/2` instead of truncating to zero.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - a divisor is zero
    /// - the final value is zero, negative or fractional
    /// - an intermediate value leaves the 128-bit rational range
    pub fn evaluate(&self) -> Result<u64, ExpressionError> {
        debug!("Evaluating expression: {}", self);

        let (first, rest) = self
            .numbers
            .split_first()
            .ok_or(ExpressionError::ArityMismatch {
                numbers: 0,
                operators: self.operators.len(),
            })?;

        let mut acc = Value::from_integer(i128::from(*first));
        for (&number, &op) in rest.iter().zip(&self.operators) {
            let operand = Value::from_integer(i128::from(number));
            let next = match op {
                Operator::Subtract => acc.checked_sub(&operand),
                Operator::Divide => {
                    if operand.is_zero() {
                        debug!("Division by zero attempted");
                        return Err(ExpressionError::DivisionByZero);
                    }
                    acc.checked_div(&operand)
                }
                Operator::Multiply => acc.checked_mul(&operand),
            };
            acc = next.ok_or(ExpressionError::Overflow)?;
        }

        if !is_positive_integer(&acc) {
            debug!("Expression folded to non-core value {}", acc);
            return Err(ExpressionError::InvalidResult(acc.to_string()));
        }

        let value = acc.to_integer().to_u64().ok_or(ExpressionError::Overflow)?;
        debug!("Expression evaluated to: {}", value);
        Ok(value)
    }
}

/// Evaluate numbers against textual operator tags in one step.
///
/// ```
/// use numcore::calc_core_candidate;
///
/// assert_eq!(calc_core_candidate(&[9, 3, 2], &["d", "m"]), Ok(6));
/// assert!(calc_core_candidate(&[8, 6, 4, 5], &["s", "d", "m"]).is_err());
/// ```
///
/// # Errors
///
/// Fails with any [`ExpressionError`] raised while building or folding.
pub fn calc_core_candidate(numbers: &[u64], tags: &[&str]) -> Result<u64, ExpressionError> {
    Expression::from_tags(numbers.to_vec(), tags)?.evaluate()
}

#[cfg(test)]
mod tests_inner_helpers {
    use super::{Value, is_positive_integer};

    #[test]
    fn test_is_positive_integer() {
        assert!(is_positive_integer(&Value::from_integer(1)));
        assert!(is_positive_integer(&Value::from_integer(42)));
        assert!(is_positive_integer(&Value::new(8, 4)));
        assert!(!is_positive_integer(&Value::from_integer(0)));
        assert!(!is_positive_integer(&Value::from_integer(-3)));
        assert!(!is_positive_integer(&Value::new(1, 2)));
        assert!(!is_positive_integer(&Value::new(-10, 5)));
    }
}
