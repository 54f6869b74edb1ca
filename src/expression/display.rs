use std::fmt;

use crate::expression::ast::{Expression, Operator};

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut numbers = self.numbers.iter();
        if let Some(first) = numbers.next() {
            write!(f, "{}", first)?;
        }
        for (number, op) in numbers.zip(&self.operators) {
            write!(f, " {} {}", op, number)?;
        }
        Ok(())
    }
}
