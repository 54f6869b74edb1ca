use crate::expression::Expression;

/// One level of the search: the winning expression for a single input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReductionStep {
    /// The number or word this level started from
    pub source: String,
    pub expression: Expression,
    pub value: u64,
    pub candidates: usize,
    pub valid: usize,
}

/// Outcome of a core search together with every reduction that led to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreReport {
    pub core: u64,
    pub steps: Vec<ReductionStep>,
}

impl CoreReport {
    /// Number of reduction levels used; zero when the input already was a core
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}
