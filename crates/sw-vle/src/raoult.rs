//! Ideal binary equilibrium from Raoult's law.
//!
//! At total pressure P and temperature T between the two boiling points:
//!
//! ```text
//! x = (P − Psat_h(T)) / (Psat_l(T) − Psat_h(T))
//! y = x · Psat_l(T) / P
//! ```

use crate::error::{VleError, VleResult, check_fraction};
use crate::model::{EquilibriumModel, EquilibriumPoint};
use sw_core::linspace;
use sw_core::units::{Pressure, Temperature, degc, to_degc, to_mmhg};
use sw_props::{AntoineCoefficients, Substance, boiling_point_with_config};
use sw_solver::{RootConfig, newton_then_brent};
use tracing::debug;

/// Temperature slack when checking the boiling range [°C]
const RANGE_SLACK_C: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct RaoultBinary {
    light: AntoineCoefficients,
    heavy: AntoineCoefficients,
    components: Option<(Substance, Substance)>,
    pressure: Pressure,
    p_mmhg: f64,
    tb_light_c: f64,
    tb_heavy_c: f64,
    config: RootConfig,
}

impl RaoultBinary {
    /// Equilibrium for two catalog substances at `pressure`.
    pub fn new(light: Substance, heavy: Substance, pressure: Pressure) -> VleResult<Self> {
        let mut model = Self::from_antoine(*light.antoine(), *heavy.antoine(), pressure)?;
        model.components = Some((light, heavy));
        Ok(model)
    }

    /// Equilibrium from raw Antoine constants.
    ///
    /// # Errors
    ///
    /// - [`VleError::NonPhysical`] for a non-positive pressure
    /// - [`VleError::IdenticalVolatility`] if both curves boil at the same
    ///   temperature at `pressure`
    /// - [`VleError::InvalidCompositionRange`] if `light` boils above `heavy`
    pub fn from_antoine(
        light: AntoineCoefficients,
        heavy: AntoineCoefficients,
        pressure: Pressure,
    ) -> VleResult<Self> {
        Self::with_config(light, heavy, pressure, RootConfig::default())
    }

    pub fn with_config(
        light: AntoineCoefficients,
        heavy: AntoineCoefficients,
        pressure: Pressure,
        config: RootConfig,
    ) -> VleResult<Self> {
        let p_mmhg = to_mmhg(pressure);
        if !p_mmhg.is_finite() || p_mmhg <= 0.0 {
            return Err(VleError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        if light == heavy {
            return Err(VleError::IdenticalVolatility);
        }

        let tb_light_c = to_degc(boiling_point_with_config(&light, pressure, None, &config)?);
        let tb_heavy_c = to_degc(boiling_point_with_config(&heavy, pressure, None, &config)?);

        if (tb_heavy_c - tb_light_c).abs() < 1e-6 {
            return Err(VleError::IdenticalVolatility);
        }
        if tb_light_c > tb_heavy_c {
            return Err(VleError::InvalidCompositionRange {
                what: "light component boils above heavy component",
                value: tb_light_c,
            });
        }

        debug!(p_mmhg, tb_light_c, tb_heavy_c, "Raoult binary constructed");

        Ok(Self {
            light,
            heavy,
            components: None,
            pressure,
            p_mmhg,
            tb_light_c,
            tb_heavy_c,
            config,
        })
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn components(&self) -> Option<(Substance, Substance)> {
        self.components
    }

    /// (boiling point of light, boiling point of heavy) at the system pressure.
    pub fn boiling_range(&self) -> (Temperature, Temperature) {
        (degc(self.tb_light_c), degc(self.tb_heavy_c))
    }

    /// Psat_light / Psat_heavy at `t`.
    pub fn relative_volatility(&self, t: Temperature) -> f64 {
        let t_c = to_degc(t);
        self.light.psat_mmhg(t_c) / self.heavy.psat_mmhg(t_c)
    }

    /// Geometric mean of the relative volatility at the two boiling points.
    pub fn mean_relative_volatility(&self) -> f64 {
        let (lo, hi) = self.boiling_range();
        (self.relative_volatility(lo) * self.relative_volatility(hi)).sqrt()
    }

    fn check_temperature(&self, t_c: f64) -> VleResult<()> {
        if t_c < self.tb_light_c - RANGE_SLACK_C || t_c > self.tb_heavy_c + RANGE_SLACK_C {
            return Err(VleError::OutsideBoilingRange {
                t_c,
                lo_c: self.tb_light_c,
                hi_c: self.tb_heavy_c,
            });
        }
        Ok(())
    }

    /// Equilibrium pair at temperature `t` (the parametric form of the curve).
    pub fn point_at_temperature(&self, t: Temperature) -> VleResult<EquilibriumPoint> {
        let t_c = to_degc(t);
        self.check_temperature(t_c)?;

        let p_l = self.light.psat_mmhg(t_c);
        let p_h = self.heavy.psat_mmhg(t_c);
        let spread = p_l - p_h;
        if spread.abs() <= f64::EPSILON * p_l.abs() {
            return Err(VleError::IdenticalVolatility);
        }

        let x = ((self.p_mmhg - p_h) / spread).clamp(0.0, 1.0);
        let y = (x * p_l / self.p_mmhg).clamp(0.0, 1.0);
        Ok(EquilibriumPoint {
            x,
            y,
            temperature: Some(t),
        })
    }

    /// Bubble-point temperature of a liquid with light fraction `x`.
    pub fn bubble_temperature(&self, x: f64) -> VleResult<Temperature> {
        let x = check_fraction(x, "liquid mole fraction")?;
        if x == 1.0 {
            return Ok(degc(self.tb_light_c));
        }
        if x == 0.0 {
            return Ok(degc(self.tb_heavy_c));
        }

        let p = self.p_mmhg;
        let guess = x * self.tb_light_c + (1.0 - x) * self.tb_heavy_c;
        let result = newton_then_brent(
            guess,
            |t| x * self.light.psat_mmhg(t) + (1.0 - x) * self.heavy.psat_mmhg(t) - p,
            |t| x * self.light.dpsat_dt_mmhg(t) + (1.0 - x) * self.heavy.dpsat_dt_mmhg(t),
            (self.tb_light_c, self.tb_heavy_c),
            &self.config,
        )?;
        Ok(degc(result.x))
    }

    /// Dew-point temperature of a vapor with light fraction `y`.
    pub fn dew_temperature(&self, y: f64) -> VleResult<Temperature> {
        let y = check_fraction(y, "vapor mole fraction")?;
        if y == 1.0 {
            return Ok(degc(self.tb_light_c));
        }
        if y == 0.0 {
            return Ok(degc(self.tb_heavy_c));
        }

        let p = self.p_mmhg;
        let guess = y * self.tb_light_c + (1.0 - y) * self.tb_heavy_c;
        let result = newton_then_brent(
            guess,
            |t| y * p / self.light.psat_mmhg(t) + (1.0 - y) * p / self.heavy.psat_mmhg(t) - 1.0,
            |t| {
                let pl = self.light.psat_mmhg(t);
                let ph = self.heavy.psat_mmhg(t);
                -y * p * self.light.dpsat_dt_mmhg(t) / (pl * pl)
                    - (1.0 - y) * p * self.heavy.dpsat_dt_mmhg(t) / (ph * ph)
            },
            (self.tb_light_c, self.tb_heavy_c),
            &self.config,
        )?;
        Ok(degc(result.x))
    }
}

impl EquilibriumModel for RaoultBinary {
    fn y_from_x(&self, x: f64) -> VleResult<f64> {
        let t_c = to_degc(self.bubble_temperature(x)?);
        Ok((x * self.light.psat_mmhg(t_c) / self.p_mmhg).clamp(0.0, 1.0))
    }

    fn x_from_y(&self, y: f64) -> VleResult<f64> {
        let t_c = to_degc(self.dew_temperature(y)?);
        Ok((y * self.p_mmhg / self.light.psat_mmhg(t_c)).clamp(0.0, 1.0))
    }

    fn describe(&self) -> String {
        match self.components {
            Some((light, heavy)) => format!(
                "{}/{} at {:.1} mmHg (Raoult)",
                light.key(),
                heavy.key(),
                self.p_mmhg
            ),
            None => format!("ideal binary at {:.1} mmHg (Raoult)", self.p_mmhg),
        }
    }

    /// Parametric sampling in temperature from the heavy boiling point down to
    /// the light one, so the points come out ordered by increasing `x`.
    fn sample_curve(&self, n: usize) -> VleResult<Vec<EquilibriumPoint>> {
        if n < 2 {
            return Err(VleError::InvalidArg {
                what: "curve needs at least 2 points",
            });
        }
        let mut points = linspace(self.tb_heavy_c, self.tb_light_c, n)
            .into_iter()
            .map(|t_c| self.point_at_temperature(degc(t_c)))
            .collect::<VleResult<Vec<_>>>()?;

        // Pin the pure-component ends against round-off
        points[0].x = 0.0;
        points[0].y = 0.0;
        points[n - 1].x = 1.0;
        points[n - 1].y = 1.0;
        Ok(points)
    }
}
