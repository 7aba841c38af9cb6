//! Equilibrium errors.

use sw_props::PropsError;
use sw_solver::SolverError;
use thiserror::Error;

pub type VleResult<T> = Result<T, VleError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VleError {
    /// A composition (or component ordering) that the curve cannot represent.
    #[error("Invalid composition range: {what} ({value})")]
    InvalidCompositionRange { what: &'static str, value: f64 },

    /// Both components have the same vapor pressure curve; x(T) divides by zero.
    #[error("Components have identical volatility")]
    IdenticalVolatility,

    #[error("Temperature {t_c:.3} °C outside the boiling range [{lo_c:.3}, {hi_c:.3}] °C")]
    OutsideBoilingRange { t_c: f64, lo_c: f64, hi_c: f64 },

    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Numerical error: {0}")]
    Numerical(#[from] SolverError),

    #[error("Property error: {0}")]
    Props(#[from] PropsError),
}

/// Mole fractions must lie on [0, 1].
pub(crate) fn check_fraction(value: f64, what: &'static str) -> VleResult<f64> {
    sw_core::ensure_fraction(value, what)
        .map_err(|_| VleError::InvalidCompositionRange { what, value })
}
