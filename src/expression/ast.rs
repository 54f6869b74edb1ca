use crate::expression::errors::ExpressionError;

/// Binary operators available to a core fold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Subtract,
    Divide,
    Multiply,
}

impl Operator {
    /// Single-character tag of the operator (`s`, `d` or `m`)
    pub fn tag(self) -> char {
        match self {
            Operator::Subtract => 's',
            Operator::Divide => 'd',
            Operator::Multiply => 'm',
        }
    }

    /// Arithmetic symbol used when rendering an expression
    pub fn symbol(self) -> char {
        match self {
            Operator::Subtract => '-',
            Operator::Divide => '/',
            Operator::Multiply => '*',
        }
    }
}

/// A flat sequence of numbers joined by operators, folded strictly left to right.
///
/// There is no precedence: `8 - 6 / 4` means `(8 - 6) / 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub(crate) numbers: Vec<u64>,
    pub(crate) operators: Vec<Operator>,
}

impl TryFrom<&str> for Operator {
    type Error = ExpressionError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        match tag {
            "s" => Ok(Operator::Subtract),
            "d" => Ok(Operator::Divide),
            "m" => Ok(Operator::Multiply),
            other => Err(ExpressionError::UnknownOperator(other.to_string())),
        }
    }
}

impl Expression {
    /// # Errors
    ///
    /// Returns `ArityMismatch` unless there is at least one number and exactly
    /// one operator fewer than numbers.
    pub fn new(numbers: Vec<u64>, operators: Vec<Operator>) -> Result<Self, ExpressionError> {
        if numbers.is_empty() || operators.len() + 1 != numbers.len() {
            return Err(ExpressionError::ArityMismatch {
                numbers: numbers.len(),
                operators: operators.len(),
            });
        }
        Ok(Self { numbers, operators })
    }

    /// Build an expression from textual operator tags such as `["s", "d", "m"]`
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` for a tag outside `s`, `d`, `m`, or
    /// `ArityMismatch` when the counts do not line up.
    pub fn from_tags(numbers: Vec<u64>, tags: &[&str]) -> Result<Self, ExpressionError> {
        let operators = tags
            .iter()
            .map(|tag| Operator::try_from(*tag))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(numbers, operators)
    }

    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }
}
