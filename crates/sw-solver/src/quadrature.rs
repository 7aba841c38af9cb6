//! Adaptive Simpson quadrature.

use crate::error::{SolverError, SolverResult};

/// Quadrature configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Absolute error target over the whole interval
    pub abs_tol: f64,
    /// Relative error target, applied to the first Simpson estimate
    pub rel_tol: f64,
    /// Maximum bisection depth
    pub max_depth: usize,
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self {
            abs_tol: 1e-10,
            rel_tol: 1e-12,
            max_depth: 50,
        }
    }
}

struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
}

fn eval<F: Fn(f64) -> f64>(f: &F, x: f64) -> SolverResult<f64> {
    let v = f(x);
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SolverError::Numeric {
            what: format!("integrand is {v} at x = {x}"),
        })
    }
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

fn refine<F: Fn(f64) -> f64>(f: &F, p: Panel, tol: f64, depth: usize) -> SolverResult<f64> {
    let m = 0.5 * (p.a + p.b);
    let lm = 0.5 * (p.a + m);
    let rm = 0.5 * (m + p.b);
    let flm = eval(f, lm)?;
    let frm = eval(f, rm)?;
    let left = simpson(p.a, m, p.fa, flm, p.fm);
    let right = simpson(m, p.b, p.fm, frm, p.fb);
    let delta = left + right - p.whole;

    if delta.abs() <= 15.0 * tol {
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        return Err(SolverError::ConvergenceFailed {
            what: format!("quadrature depth exhausted on [{}, {}]", p.a, p.b),
        });
    }

    let l = Panel {
        a: p.a,
        b: m,
        fa: p.fa,
        fm: flm,
        fb: p.fm,
        whole: left,
    };
    let r = Panel {
        a: m,
        b: p.b,
        fa: p.fm,
        fm: frm,
        fb: p.fb,
        whole: right,
    };
    Ok(refine(f, l, 0.5 * tol, depth - 1)? + refine(f, r, 0.5 * tol, depth - 1)?)
}

/// Integrate `f` over `[a, b]`.
pub fn integrate<F>(f: F, a: f64, b: f64, config: &QuadratureConfig) -> SolverResult<f64>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(SolverError::InvalidArg {
            what: "integration limits must be finite",
        });
    }
    if a == b {
        return Ok(0.0);
    }

    let fa = eval(&f, a)?;
    let fb = eval(&f, b)?;
    let fm = eval(&f, 0.5 * (a + b))?;
    let whole = simpson(a, b, fa, fm, fb);
    let tol = config.abs_tol.max(config.rel_tol * whole.abs());
    let panel = Panel {
        a,
        b,
        fa,
        fm,
        fb,
        whole,
    };
    refine(&f, panel, tol, config.max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polynomial_is_exact() {
        let v = integrate(|x| 3.0 * x * x, 0.0, 2.0, &QuadratureConfig::default()).unwrap();
        assert!((v - 8.0).abs() < 1e-12);
    }

    #[test]
    fn first_order_levenspiel_area() {
        // ∫ 1/(1-x) dx from 0 to 0.9 = ln 10
        let v = integrate(|x| 1.0 / (1.0 - x), 0.0, 0.9, &QuadratureConfig::default()).unwrap();
        assert!((v - 10.0_f64.ln()).abs() < 1e-8);
    }

    #[test]
    fn reversed_limits_change_sign() {
        let cfg = QuadratureConfig::default();
        let fwd = integrate(f64::exp, 0.0, 1.0, &cfg).unwrap();
        let rev = integrate(f64::exp, 1.0, 0.0, &cfg).unwrap();
        assert!((fwd + rev).abs() < 1e-12);
    }

    #[test]
    fn singular_integrand_is_reported() {
        let err = integrate(|x| 1.0 / x, 0.0, 1.0, &QuadratureConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }
}
