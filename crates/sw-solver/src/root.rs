//! Single-variable root finding.
//!
//! Newton with an analytic derivative is used where one is available (Antoine
//! curves have a closed-form slope); Brent's method is the bracketed fallback
//! and the only method used when the residual is not smooth enough for Newton.

use crate::error::{SolverError, SolverResult};
use sw_core::ensure_finite;
use tracing::debug;

/// Root finder configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the root
    pub x_tol: f64,
    /// Absolute tolerance on the residual
    pub f_tol: f64,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            x_tol: 1e-12,
            f_tol: 1e-12,
        }
    }
}

/// Root iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Root estimate
    pub x: f64,
    /// Residual at `x`
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

fn finite_residual(fx: f64, x: f64) -> SolverResult<f64> {
    if fx.is_finite() {
        Ok(fx)
    } else {
        Err(SolverError::Numeric {
            what: format!("non-finite residual {fx} at x = {x}"),
        })
    }
}

/// Newton iteration on `f(x) = 0` starting from `x0`.
pub fn newton<F, D>(x0: f64, f: F, df: D, config: &RootConfig) -> SolverResult<RootResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = ensure_finite(x0, "initial guess")?;
    for iter in 0..config.max_iterations {
        let fx = finite_residual(f(x), x)?;
        if fx.abs() <= config.f_tol {
            debug!(x, residual = fx, iterations = iter, "newton converged on residual");
            return Ok(RootResult {
                x,
                residual: fx,
                iterations: iter,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() || dfx == 0.0 {
            return Err(SolverError::Numeric {
                what: format!("derivative {dfx} at x = {x}"),
            });
        }

        let dx = -fx / dfx;
        x += dx;
        if !x.is_finite() {
            return Err(SolverError::Numeric {
                what: format!("Newton step diverged at iteration {iter}"),
            });
        }

        if dx.abs() <= config.x_tol * (1.0 + x.abs()) {
            let fx = finite_residual(f(x), x)?;
            debug!(x, residual = fx, iterations = iter + 1, "newton converged on step");
            return Ok(RootResult {
                x,
                residual: fx,
                iterations: iter + 1,
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "Newton: maximum iterations {} reached near x = {}",
            config.max_iterations, x
        ),
    })
}

/// Brent's method on the bracket `[lo, hi]`.
///
/// `f(lo)` and `f(hi)` must have opposite signs (or one of them must be zero).
pub fn brent<F>(f: F, lo: f64, hi: f64, config: &RootConfig) -> SolverResult<RootResult>
where
    F: Fn(f64) -> f64,
{
    if !lo.is_finite() || !hi.is_finite() {
        return Err(SolverError::InvalidArg {
            what: "bracket must be finite",
        });
    }

    let (mut a, mut b) = (lo, hi);
    let mut fa = finite_residual(f(a), a)?;
    let mut fb = finite_residual(f(b), b)?;

    if fa == 0.0 {
        return Ok(RootResult {
            x: a,
            residual: fa,
            iterations: 0,
        });
    }
    if fb == 0.0 {
        return Ok(RootResult {
            x: b,
            residual: fb,
            iterations: 0,
        });
    }
    if fa.signum() == fb.signum() {
        return Err(SolverError::NoBracket { a, b, fa, fb });
    }

    let (mut c, mut fc) = (b, fb);
    let mut d = b - a;
    let mut e = d;

    for iter in 0..config.max_iterations {
        if fb.signum() == fc.signum() {
            c = a;
            fc = fa;
            d = b - a;
            e = d;
        }
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol1 = 2.0 * f64::EPSILON * b.abs() + 0.5 * config.x_tol;
        let xm = 0.5 * (c - b);
        if xm.abs() <= tol1 || fb.abs() <= config.f_tol {
            debug!(x = b, residual = fb, iterations = iter, "brent converged");
            return Ok(RootResult {
                x: b,
                residual: fb,
                iterations: iter,
            });
        }

        if e.abs() >= tol1 && fa.abs() > fb.abs() {
            // Inverse quadratic interpolation, or secant when only two points are distinct
            let s = fb / fa;
            let (mut p, mut q) = if a == c {
                (2.0 * xm * s, 1.0 - s)
            } else {
                let qa = fa / fc;
                let r = fb / fc;
                (
                    s * (2.0 * xm * qa * (qa - r) - (b - a) * (r - 1.0)),
                    (qa - 1.0) * (r - 1.0) * (s - 1.0),
                )
            };
            if p > 0.0 {
                q = -q;
            }
            p = p.abs();
            let min1 = 3.0 * xm * q - (tol1 * q).abs();
            let min2 = (e * q).abs();
            if 2.0 * p < min1.min(min2) {
                e = d;
                d = p / q;
            } else {
                d = xm;
                e = d;
            }
        } else {
            d = xm;
            e = d;
        }

        a = b;
        fa = fb;
        b += if d.abs() > tol1 { d } else { tol1.copysign(xm) };
        fb = finite_residual(f(b), b)?;
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "Brent: maximum iterations {} reached near x = {}",
            config.max_iterations, b
        ),
    })
}

/// Newton from `x0`, falling back to Brent on `bracket` when Newton fails or
/// leaves the bracket.
pub fn newton_then_brent<F, D>(
    x0: f64,
    f: F,
    df: D,
    bracket: (f64, f64),
    config: &RootConfig,
) -> SolverResult<RootResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let (lo, hi) = if bracket.0 <= bracket.1 {
        bracket
    } else {
        (bracket.1, bracket.0)
    };

    match newton(x0, &f, &df, config) {
        Ok(result) if (lo..=hi).contains(&result.x) => Ok(result),
        Ok(result) => {
            debug!(x = result.x, lo, hi, "newton left bracket, falling back to brent");
            brent(&f, lo, hi, config)
        }
        Err(err) => {
            debug!(%err, "newton failed, falling back to brent");
            brent(&f, lo, hi, config)
        }
    }
}
