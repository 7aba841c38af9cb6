//! Rate laws expressed as Levenspiel ordinates.

use crate::error::{ReactorError, ReactorResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rate law of `A → products`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kinetics {
    /// `−rA = k·cA`
    FirstOrder,
    /// `−rA = k·cA²`
    SecondOrder,
    /// `−rA = k·cA / (0.5 + 1.2·k·cA)²`
    #[serde(alias = "lh")]
    LangmuirHinshelwood,
}

/// Rate constant and inlet concentration. Ordinates are per unit molar feed
/// rate of A, so volumes come out in the units of `1 / (k·cA0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateParams {
    pub k: f64,
    pub c_a0: f64,
}

impl Default for RateParams {
    fn default() -> Self {
        Self { k: 1.0, c_a0: 0.5 }
    }
}

impl RateParams {
    pub fn new(k: f64, c_a0: f64) -> ReactorResult<Self> {
        let params = Self { k, c_a0 };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> ReactorResult<()> {
        for (what, value) in [("k", self.k), ("cA0", self.c_a0)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ReactorError::NonPhysical { what, value });
            }
        }
        Ok(())
    }
}

impl Kinetics {
    pub const ALL: [Kinetics; 3] = [
        Kinetics::FirstOrder,
        Kinetics::SecondOrder,
        Kinetics::LangmuirHinshelwood,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Kinetics::FirstOrder => "first_order",
            Kinetics::SecondOrder => "second_order",
            Kinetics::LangmuirHinshelwood => "langmuir_hinshelwood",
        }
    }

    /// Levenspiel ordinate `F_A0 / (−rA)` at conversion `x`, per unit `F_A0`.
    ///
    /// Diverges as `x → 1`; callers keep `x < 1`.
    pub fn ordinate(&self, x: f64, params: &RateParams) -> f64 {
        let RateParams { k, c_a0 } = *params;
        let remaining = 1.0 - x;
        match self {
            Kinetics::FirstOrder => 1.0 / (k * c_a0 * remaining),
            Kinetics::SecondOrder => 1.0 / (k * c_a0 * c_a0 * remaining * remaining),
            Kinetics::LangmuirHinshelwood => {
                let adsorption = 0.5 + 1.2 * k * c_a0 * remaining;
                adsorption * adsorption / (k * c_a0 * remaining)
            }
        }
    }
}

impl fmt::Display for Kinetics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Kinetics {
    type Err = ReactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "first_order" | "first" | "1" => Ok(Kinetics::FirstOrder),
            "second_order" | "second" | "2" => Ok(Kinetics::SecondOrder),
            "langmuir_hinshelwood" | "lh" => Ok(Kinetics::LangmuirHinshelwood),
            _ => Err(ReactorError::Unknown {
                what: "kinetics",
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ordinates_at_zero_conversion() {
        let params = RateParams::new(2.0, 0.5).unwrap();
        assert_eq!(Kinetics::FirstOrder.ordinate(0.0, &params), 1.0);
        assert_eq!(Kinetics::SecondOrder.ordinate(0.0, &params), 2.0);
        // (0.5 + 1.2)^2 / 1
        let lh = Kinetics::LangmuirHinshelwood.ordinate(0.0, &params);
        assert!((lh - 2.89).abs() < 1e-12);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("First-Order".parse::<Kinetics>().unwrap(), Kinetics::FirstOrder);
        assert_eq!("2".parse::<Kinetics>().unwrap(), Kinetics::SecondOrder);
        assert_eq!("LH".parse::<Kinetics>().unwrap(), Kinetics::LangmuirHinshelwood);
        assert!(matches!(
            "zeroth".parse::<Kinetics>(),
            Err(ReactorError::Unknown { .. })
        ));
        for kinetics in Kinetics::ALL {
            assert_eq!(kinetics.key().parse::<Kinetics>().unwrap(), kinetics);
        }
    }

    #[test]
    fn rejects_non_positive_parameters() {
        assert!(matches!(
            RateParams::new(0.0, 1.0),
            Err(ReactorError::NonPhysical { what: "k", .. })
        ));
        assert!(matches!(
            RateParams::new(1.0, -2.0),
            Err(ReactorError::NonPhysical { what: "cA0", .. })
        ));
    }

    proptest! {
        #[test]
        fn power_law_ordinates_grow_with_conversion(
            x1 in 0.0_f64..0.95,
            dx in 0.001_f64..0.04,
            k in 0.01_f64..10.0,
            c in 0.01_f64..10.0,
        ) {
            let params = RateParams::new(k, c).unwrap();
            for kinetics in [Kinetics::FirstOrder, Kinetics::SecondOrder] {
                prop_assert!(kinetics.ordinate(x1 + dx, &params) > kinetics.ordinate(x1, &params));
            }
        }
    }
}
