//! Boiling point: numeric inverse of the Antoine correlation.
//!
//! Solves `Psat(T) − P = 0` with Newton (analytic slope), falling back to a
//! bracketed Brent solve. The closed-form inverse is only used as the
//! starting guess so that the same path works for any vapor-pressure form.

use crate::antoine::AntoineCoefficients;
use crate::error::{PropsError, PropsResult};
use sw_core::units::{Pressure, Temperature, degc, to_degc, to_mmhg};
use sw_solver::{RootConfig, newton_then_brent};
use tracing::{debug, warn};

/// Search bracket for the Brent fallback [°C]
const T_BRACKET_C: (f64, f64) = (-100.0, 600.0);

/// Used when neither a guess nor the closed-form inverse is usable [°C]
const FALLBACK_GUESS_C: f64 = 100.0;

/// Boiling point at `p` using the default root configuration.
pub fn boiling_point(
    antoine: &AntoineCoefficients,
    p: Pressure,
    guess: Option<Temperature>,
) -> PropsResult<Temperature> {
    boiling_point_with_config(antoine, p, guess, &RootConfig::default())
}

/// Boiling point at `p`.
///
/// # Errors
///
/// - [`PropsError::NonPhysical`] for a non-positive or non-finite pressure
/// - [`PropsError::Numerical`] if the root finder does not converge
pub fn boiling_point_with_config(
    antoine: &AntoineCoefficients,
    p: Pressure,
    guess: Option<Temperature>,
    config: &RootConfig,
) -> PropsResult<Temperature> {
    let p_mmhg = to_mmhg(p);
    if !p_mmhg.is_finite() || p_mmhg <= 0.0 {
        return Err(PropsError::NonPhysical {
            what: "pressure must be positive and finite",
        });
    }

    let x0 = guess
        .map(to_degc)
        .filter(|t| t.is_finite())
        .unwrap_or_else(|| {
            let t = antoine.tsat_closed_form_c(p_mmhg);
            if t.is_finite() { t } else { FALLBACK_GUESS_C }
        });

    let result = newton_then_brent(
        x0,
        |t_c| antoine.psat_mmhg(t_c) - p_mmhg,
        |t_c| antoine.dpsat_dt_mmhg(t_c),
        T_BRACKET_C,
        config,
    )?;
    debug!(
        p_mmhg,
        t_c = result.x,
        iterations = result.iterations,
        "boiling point solved"
    );

    if !antoine.in_range(result.x) {
        warn!(
            t_c = result.x,
            t_min_c = antoine.t_min_c,
            t_max_c = antoine.t_max_c,
            "boiling point lies outside the Antoine fitted range"
        );
    }

    Ok(degc(result.x))
}
