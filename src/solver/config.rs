use crate::solver::constants::{GROUP_COUNT, MAX_CORE_DIGITS, MAX_RECURSION_DEPTH, OPERATORS};
use crate::solver::errors::SolverError;

/// Configuration for the core searches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Number of groups a digit sequence is cut into; words must have this many letters
    pub group_count: usize,
    pub max_core_digits: usize,
    /// Maximum number of reduction levels before giving up
    pub max_depth: usize,
    /// Evaluate the candidates of each level on the rayon pool
    pub parallel: bool,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            group_count: GROUP_COUNT,
            max_core_digits: MAX_CORE_DIGITS,
            max_depth: MAX_RECURSION_DEPTH,
            parallel: true,
        }
    }
}

impl CoreConfig {
    /// # Errors
    ///
    /// Returns `InvalidConfig` when:
    /// - `group_count` is below 2 or needs more distinct operators than exist
    /// - a value with `max_core_digits + 1` digits cannot be cut into `group_count` groups
    /// - `max_depth` is zero
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.group_count < 2 || self.group_count > OPERATORS.len() + 1 {
            return Err(SolverError::InvalidConfig(format!(
                "group_count must be between 2 and {}, got {}",
                OPERATORS.len() + 1,
                self.group_count
            )));
        }
        if self.max_core_digits + 1 < self.group_count {
            return Err(SolverError::InvalidConfig(format!(
                "a {}-digit value cannot be cut into {} groups",
                self.max_core_digits + 1,
                self.group_count
            )));
        }
        if self.max_depth == 0 {
            return Err(SolverError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
