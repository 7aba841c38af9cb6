//! Column design errors.

use sw_solver::SolverError;
use sw_vle::VleError;
use thiserror::Error;

pub type ColumnResult<T> = Result<T, ColumnError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColumnError {
    /// Compositions must satisfy `0 < xB < xF < xD < 1`.
    #[error("Invalid composition range: {what} (xB = {x_bottoms}, xF = {x_feed}, xD = {x_distillate})")]
    InvalidCompositionRange {
        what: &'static str,
        x_bottoms: f64,
        x_feed: f64,
        x_distillate: f64,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Stage limit of {max_stages} exceeded (liquid still at x = {x:.6})")]
    StageLimitExceeded { max_stages: usize, x: f64 },

    #[error("Numerical error: {0}")]
    Numerical(#[from] SolverError),

    #[error("Equilibrium error: {0}")]
    Vle(#[from] VleError),
}
