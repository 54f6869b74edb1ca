mod config;
pub mod constants;
mod core;
mod errors;
mod report;

pub use config::CoreConfig;
pub use self::core::CoreSolver;
pub use errors::SolverError;
pub use report::{CoreReport, ReductionStep};
