//! The equilibrium-curve abstraction used by the column stepper.

use crate::error::{VleError, VleResult};
use sw_core::linspace;
use sw_core::units::Temperature;

/// (x, y) composition pair on the equilibrium curve.
///
/// `temperature` is set by models that know it (Raoult); constant-α curves
/// leave it empty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquilibriumPoint {
    /// Liquid mole fraction of the light component
    pub x: f64,
    /// Vapor mole fraction of the light component
    pub y: f64,
    pub temperature: Option<Temperature>,
}

/// Binary equilibrium curve expressed in light-component mole fractions.
///
/// Implementations must be monotone: `y_from_x` increasing on [0, 1] with
/// `y ≥ x`, and `x_from_y` its inverse.
pub trait EquilibriumModel: Send + Sync {
    /// Vapor composition in equilibrium with liquid `x`.
    fn y_from_x(&self, x: f64) -> VleResult<f64>;

    /// Liquid composition in equilibrium with vapor `y`.
    fn x_from_y(&self, y: f64) -> VleResult<f64>;

    /// Short human-readable description for reports.
    fn describe(&self) -> String;

    /// Sample `n` points along the curve, ordered by increasing `x`.
    fn sample_curve(&self, n: usize) -> VleResult<Vec<EquilibriumPoint>> {
        if n < 2 {
            return Err(VleError::InvalidArg {
                what: "curve needs at least 2 points",
            });
        }
        linspace(0.0, 1.0, n)
            .into_iter()
            .map(|x| {
                Ok(EquilibriumPoint {
                    x,
                    y: self.y_from_x(x)?,
                    temperature: None,
                })
            })
            .collect()
    }
}

impl<M: EquilibriumModel + ?Sized> EquilibriumModel for Box<M> {
    fn y_from_x(&self, x: f64) -> VleResult<f64> {
        (**self).y_from_x(x)
    }

    fn x_from_y(&self, y: f64) -> VleResult<f64> {
        (**self).x_from_y(y)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn sample_curve(&self, n: usize) -> VleResult<Vec<EquilibriumPoint>> {
        (**self).sample_curve(n)
    }
}
