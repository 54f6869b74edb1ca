use crate::expression::Operator;

// Shape of the puzzle
pub const GROUP_COUNT: usize = 4;
pub const OPERATORS: [Operator; 3] = [Operator::Subtract, Operator::Divide, Operator::Multiply];

// A core has at most this many decimal digits
pub const MAX_CORE_DIGITS: usize = 3;
pub const MAX_RECURSION_DEPTH: usize = 20;
