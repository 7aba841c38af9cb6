//! Property lookup and evaluation errors.

use sw_solver::SolverError;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur during property lookups and calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PropsError {
    /// Name did not match any catalog entry or alias.
    #[error("Unknown substance: {name}")]
    UnknownSubstance { name: String },

    /// Non-physical values (non-positive pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Root finding failed (e.g., boiling point did not converge).
    #[error("Numerical error: {0}")]
    Numerical(#[from] SolverError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PropsError::UnknownSubstance {
            name: "unobtainium".into(),
        };
        assert!(err.to_string().contains("unobtainium"));

        let err = PropsError::from(SolverError::ConvergenceFailed {
            what: "boiling point".into(),
        });
        assert!(err.to_string().contains("boiling point"));
    }
}
