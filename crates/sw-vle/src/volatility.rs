//! Constant relative volatility equilibrium.

use crate::error::{VleError, VleResult, check_fraction};
use crate::model::EquilibriumModel;

/// `y = αx / (1 + (α − 1)x)` with α > 1 for the light component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantVolatility {
    alpha: f64,
}

impl ConstantVolatility {
    pub fn new(alpha: f64) -> VleResult<Self> {
        if !alpha.is_finite() || alpha <= 0.0 {
            return Err(VleError::NonPhysical {
                what: "relative volatility must be positive and finite",
            });
        }
        if alpha == 1.0 {
            return Err(VleError::IdenticalVolatility);
        }
        if alpha < 1.0 {
            return Err(VleError::InvalidCompositionRange {
                what: "relative volatility of the light component must exceed 1",
                value: alpha,
            });
        }
        Ok(Self { alpha })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }
}

impl EquilibriumModel for ConstantVolatility {
    fn y_from_x(&self, x: f64) -> VleResult<f64> {
        let x = check_fraction(x, "liquid mole fraction")?;
        Ok(self.alpha * x / (1.0 + (self.alpha - 1.0) * x))
    }

    fn x_from_y(&self, y: f64) -> VleResult<f64> {
        let y = check_fraction(y, "vapor mole fraction")?;
        Ok(y / (self.alpha - (self.alpha - 1.0) * y))
    }

    fn describe(&self) -> String {
        format!("constant relative volatility α = {:.3}", self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_non_separating_alpha() {
        assert_eq!(ConstantVolatility::new(1.0), Err(VleError::IdenticalVolatility));
        assert!(matches!(
            ConstantVolatility::new(0.4),
            Err(VleError::InvalidCompositionRange { .. })
        ));
        assert!(matches!(
            ConstantVolatility::new(f64::NAN),
            Err(VleError::NonPhysical { .. })
        ));
    }

    #[test]
    fn endpoints_are_pure_components() {
        let m = ConstantVolatility::new(2.5).unwrap();
        assert_eq!(m.y_from_x(0.0).unwrap(), 0.0);
        assert!((m.y_from_x(1.0).unwrap() - 1.0).abs() < 1e-15);
        assert!((m.y_from_x(0.5).unwrap() - 2.5 / 3.5).abs() < 1e-15);
    }

    #[test]
    fn out_of_range_composition_rejected() {
        let m = ConstantVolatility::new(2.5).unwrap();
        assert!(matches!(
            m.y_from_x(1.1),
            Err(VleError::InvalidCompositionRange { .. })
        ));
        assert!(matches!(
            m.x_from_y(-0.1),
            Err(VleError::InvalidCompositionRange { .. })
        ));
    }

    #[test]
    fn sampled_curve_lies_above_diagonal() {
        let m = ConstantVolatility::new(2.5).unwrap();
        let curve = m.sample_curve(11).unwrap();
        assert_eq!(curve.len(), 11);
        for p in curve {
            assert!(p.y >= p.x);
            assert!(p.temperature.is_none());
        }
    }

    proptest! {
        #[test]
        fn inverse_round_trip(alpha in 1.05_f64..10.0, x in 0.0_f64..=1.0) {
            let m = ConstantVolatility::new(alpha).unwrap();
            let y = m.y_from_x(x).unwrap();
            let back = m.x_from_y(y).unwrap();
            prop_assert!((back - x).abs() < 1e-12);
        }
    }
}
