use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Unknown operator: {0}")]
    UnknownOperator(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Invalid result: {0}")]
    InvalidResult(String),
    #[error("Cannot fold {numbers} numbers with {operators} operators")]
    ArityMismatch { numbers: usize, operators: usize },
    #[error("Arithmetic overflow while folding")]
    Overflow,
}
