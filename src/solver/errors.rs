use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] UtilsError),
    #[error("No valid candidate for {0}")]
    Unsolvable(String),
    #[error("Gave up after {depth} reductions, last value {value}")]
    DepthExceeded { depth: usize, value: u64 },
    #[error("Reduction made no progress: {from} -> {to}")]
    NoProgress { from: u64, to: u64 },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
