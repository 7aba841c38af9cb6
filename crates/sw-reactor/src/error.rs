//! Reactor sizing errors.

use sw_solver::SolverError;
use thiserror::Error;

pub type ReactorResult<T> = Result<T, ReactorError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReactorError {
    /// Stage conversions must be strictly increasing on [0, 1).
    #[error("Invalid conversion {value} at reactor {index}: {what}")]
    InvalidConversion {
        index: usize,
        value: f64,
        what: &'static str,
    },

    #[error("Non-physical rate parameter: {what} = {value}")]
    NonPhysical { what: &'static str, value: f64 },

    #[error("Unknown {what}: {name}")]
    Unknown { what: &'static str, name: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numerical error: {0}")]
    Numerical(#[from] SolverError),
}
