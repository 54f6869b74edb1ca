use log::{debug, info, trace, warn};
use rayon::prelude::*;

use crate::expression::Expression;
use crate::solver::config::CoreConfig;
use crate::solver::constants::OPERATORS;
use crate::solver::errors::SolverError;
use crate::solver::report::{CoreReport, ReductionStep};
use crate::utils::{
    digit_count, digit_sequence, generate_partitions, operator_orderings, partition_values,
    validate_number, validate_word, word_codes,
};

/// Minimum valid candidate of one level, with the counts behind it
struct LevelOutcome {
    best: Option<(u64, Expression)>,
    candidates: usize,
    valid: usize,
}

fn evaluate_candidate(expr: &Expression) -> Option<u64> {
    match expr.evaluate() {
        Ok(value) => Some(value),
        Err(e) => {
            trace!("Discarding {}: {}", expr, e);
            None
        }
    }
}

/// Searches for the numeric core of integers and words
pub struct CoreSolver {
    config: CoreConfig,
}

impl CoreSolver {
    /// Create a solver with a custom configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the configuration does not describe a solvable puzzle.
    pub fn new(config: CoreConfig) -> Result<Self, SolverError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Numeric core of a non-negative integer
    ///
    /// # Errors
    ///
    /// See [`CoreSolver::explain_integer`].
    pub fn integer_core(&self, number: i64) -> Result<u64, SolverError> {
        self.explain_integer(number).map(|report| report.core)
    }

    /// Numeric core of a word with one letter per group
    ///
    /// # Errors
    ///
    /// See [`CoreSolver::explain_word`].
    pub fn word_core(&self, word: &str) -> Result<u64, SolverError> {
        self.explain_word(word).map(|report| report.core)
    }

    /// Reduce an integer to its core, keeping every reduction step.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `number` is negative
    /// * some level has no valid candidate (this includes `0`)
    /// * the reduction exceeds the configured depth or stops shrinking
    pub fn explain_integer(&self, number: i64) -> Result<CoreReport, SolverError> {
        let value = validate_number(number)?;
        self.explain_value(value)
    }

    /// Same as [`CoreSolver::explain_integer`] for an already validated value.
    ///
    /// Values that already fit in a core are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `Unsolvable` for `0` or when a level has no valid candidate,
    /// and `DepthExceeded`/`NoProgress` if the reduction does not converge.
    pub fn explain_value(&self, value: u64) -> Result<CoreReport, SolverError> {
        info!("Searching for the numeric core of {}", value);

        if value == 0 {
            warn!("Zero has no positive core");
            return Err(SolverError::Unsolvable(value.to_string()));
        }

        self.reduce(value, Vec::new())
    }

    /// Reduce a word to its core, keeping every reduction step.
    ///
    /// Each letter becomes its alphabet position and the codes are folded
    /// with every operator ordering; no partitioning is involved.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * the word length differs from the group count or it contains non-letters
    /// * no ordering yields a positive integer
    /// * a follow-up integer reduction fails
    pub fn explain_word(&self, word: &str) -> Result<CoreReport, SolverError> {
        info!("Searching for the numeric core of '{}'", word);

        validate_word(word, self.config.group_count)?;
        let codes = word_codes(word)?;

        let outcome = self.evaluate_level(&[codes]);
        let step = Self::select(word.to_string(), outcome)?;
        info!("Reduced '{}' to {} via {}", word, step.value, step.expression);

        let start = step.value;
        self.reduce(start, vec![step])
    }

    /// Repeat integer levels until the value has at most `max_core_digits` digits
    fn reduce(
        &self,
        mut current: u64,
        mut steps: Vec<ReductionStep>,
    ) -> Result<CoreReport, SolverError> {
        while digit_count(current) > self.config.max_core_digits {
            if steps.len() >= self.config.max_depth {
                warn!(
                    "Depth limit {} reached while reducing {}",
                    self.config.max_depth, current
                );
                return Err(SolverError::DepthExceeded {
                    depth: steps.len(),
                    value: current,
                });
            }

            let step = self.integer_level(current)?;
            if step.value >= current {
                return Err(SolverError::NoProgress {
                    from: current,
                    to: step.value,
                });
            }

            info!(
                "Reduced {} to {} via {}",
                current, step.value, step.expression
            );
            current = step.value;
            steps.push(step);
        }

        info!("Numeric core is {} after {} reductions", current, steps.len());
        Ok(CoreReport {
            core: current,
            steps,
        })
    }

    /// One partition-and-fold pass over the digits of `number`
    fn integer_level(&self, number: u64) -> Result<ReductionStep, SolverError> {
        let digits = digit_sequence(number);
        let partitions = generate_partitions(0, digits.len(), self.config.group_count);

        let operand_sets: Vec<Vec<u64>> = partitions
            .iter()
            .filter_map(|partition| match partition_values(&digits, partition) {
                Ok(values) => Some(values),
                Err(e) => {
                    debug!("Skipping partition {:?}: {}", partition, e);
                    None
                }
            })
            .collect();

        let outcome = self.evaluate_level(&operand_sets);
        Self::select(digits, outcome)
    }

    /// Evaluate every operand set against every operator ordering
    fn evaluate_level(&self, operand_sets: &[Vec<u64>]) -> LevelOutcome {
        let orderings = operator_orderings(&OPERATORS, self.config.group_count - 1);

        let candidates: Vec<Expression> = operand_sets
            .iter()
            .flat_map(|numbers| {
                orderings
                    .iter()
                    .filter_map(move |ordering| {
                        Expression::new(numbers.clone(), ordering.clone()).ok()
                    })
            })
            .collect();

        debug!(
            "Evaluating {} candidates ({} operand sets x {} orderings)",
            candidates.len(),
            operand_sets.len(),
            orderings.len()
        );

        let results: Vec<Option<u64>> = if self.config.parallel {
            candidates.par_iter().map(evaluate_candidate).collect()
        } else {
            candidates.iter().map(evaluate_candidate).collect()
        };

        let total = candidates.len();
        let valid = results.iter().flatten().count();
        let best = candidates
            .into_iter()
            .zip(results)
            .filter_map(|(expr, result)| result.map(|value| (value, expr)))
            .min_by_key(|(value, _)| *value);

        LevelOutcome {
            best,
            candidates: total,
            valid,
        }
    }

    fn select(source: String, outcome: LevelOutcome) -> Result<ReductionStep, SolverError> {
        let LevelOutcome {
            best,
            candidates,
            valid,
        } = outcome;

        match best {
            Some((value, expression)) => {
                debug!(
                    "Best of {} valid candidates out of {} for {}: {} = {}",
                    valid, candidates, source, expression, value
                );
                Ok(ReductionStep {
                    source,
                    expression,
                    value,
                    candidates,
                    valid,
                })
            }
            None => {
                warn!("No valid candidate among {} for {}", candidates, source);
                Err(SolverError::Unsolvable(source))
            }
        }
    }
}

impl Default for CoreSolver {
    fn default() -> Self {
        Self {
            config: CoreConfig::default(),
        }
    }
}
