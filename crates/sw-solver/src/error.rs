//! Error types for solver operations.

use sw_core::error::CoreError;
use thiserror::Error;

/// Errors that can occur while solving scalar problems.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Root not bracketed: f({a}) = {fa}, f({b}) = {fb}")]
    NoBracket { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<CoreError> for SolverError {
    fn from(e: CoreError) -> Self {
        SolverError::Numeric {
            what: e.to_string(),
        }
    }
}
