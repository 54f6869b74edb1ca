//! Left-to-right folding of number sequences with subtract, divide and multiply

mod ast;
mod display;
mod errors;
mod eval;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use eval::calc_core_candidate;

#[cfg(test)]
mod tests;
