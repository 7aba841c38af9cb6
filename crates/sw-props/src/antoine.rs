//! Antoine vapor-pressure correlation.
//!
//! `log10(P / mmHg) = A − B / (T / °C + C)`
//!
//! Coefficients are stored in the mmHg/°C form found in most undergraduate
//! property tables; the uom-typed entry points convert at the boundary.

use std::f64::consts::LN_10;
use sw_core::units::{Pressure, Temperature, degc, mmhg, to_degc, to_mmhg};
use tracing::warn;

/// Antoine constants with their tabulated validity range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    /// Lower end of the fitted range [°C]
    pub t_min_c: f64,
    /// Upper end of the fitted range [°C]
    pub t_max_c: f64,
}

impl AntoineCoefficients {
    pub const fn new(a: f64, b: f64, c: f64, t_min_c: f64, t_max_c: f64) -> Self {
        Self {
            a,
            b,
            c,
            t_min_c,
            t_max_c,
        }
    }

    /// Vapor pressure [mmHg] at `t_c` [°C].
    #[inline]
    pub fn psat_mmhg(&self, t_c: f64) -> f64 {
        10.0_f64.powf(self.a - self.b / (t_c + self.c))
    }

    /// dPsat/dT [mmHg/K] at `t_c` [°C].
    #[inline]
    pub fn dpsat_dt_mmhg(&self, t_c: f64) -> f64 {
        let denom = t_c + self.c;
        self.psat_mmhg(t_c) * LN_10 * self.b / (denom * denom)
    }

    /// Closed-form inverse [°C] for a pressure in mmHg.
    ///
    /// Returns NaN for non-positive pressure.
    #[inline]
    pub fn tsat_closed_form_c(&self, p_mmhg: f64) -> f64 {
        if p_mmhg <= 0.0 {
            return f64::NAN;
        }
        self.b / (self.a - p_mmhg.log10()) - self.c
    }

    pub fn in_range(&self, t_c: f64) -> bool {
        (self.t_min_c..=self.t_max_c).contains(&t_c)
    }

    /// Vapor pressure at `t`.
    ///
    /// Evaluating outside the fitted range is allowed; it is logged, not
    /// rejected.
    pub fn psat(&self, t: Temperature) -> Pressure {
        let t_c = to_degc(t);
        if !self.in_range(t_c) {
            warn!(
                t_c,
                t_min_c = self.t_min_c,
                t_max_c = self.t_max_c,
                "Antoine correlation evaluated outside its fitted range"
            );
        }
        mmhg(self.psat_mmhg(t_c))
    }

    /// Closed-form saturation temperature at `p`.
    pub fn tsat_closed_form(&self, p: Pressure) -> Temperature {
        degc(self.tsat_closed_form_c(to_mmhg(p)))
    }
}
