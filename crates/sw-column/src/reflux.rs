//! Minimum reflux from the feed-line pinch.
//!
//! For an ideal (non-azeotropic) curve the pinch sits where the q-line meets
//! the equilibrium curve. Tangent pinches are not detected.

use crate::error::{ColumnError, ColumnResult};
use serde::Serialize;
use std::cell::RefCell;
use sw_solver::{RootConfig, brent};
use sw_vle::{EquilibriumModel, VleError};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MinimumReflux {
    pub r_min: f64,
    /// (x*, y*) where the q-line meets the equilibrium curve
    pub pinch: (f64, f64),
}

/// Minimum reflux ratio `Rmin = (xD − y*) / (y* − x*)`.
///
/// The pinch is located by walking from (xF, xF) along the q-line direction
/// `(q − 1, q)` until the line leaves the unit square, and bracketing the
/// crossing with the equilibrium curve on that segment. A pinch above the
/// distillate composition gives `r_min = 0`.
pub fn minimum_reflux<M: EquilibriumModel + ?Sized>(
    model: &M,
    x_distillate: f64,
    x_feed: f64,
    q: f64,
    config: &RootConfig,
) -> ColumnResult<MinimumReflux> {
    if !(x_feed.is_finite() && x_distillate.is_finite())
        || !(0.0 < x_feed && x_feed < x_distillate && x_distillate < 1.0)
    {
        return Err(ColumnError::InvalidArg {
            what: "minimum reflux needs 0 < xF < xD < 1",
        });
    }
    if !q.is_finite() {
        return Err(ColumnError::InvalidArg {
            what: "feed quality q must be finite",
        });
    }

    let pinch = if q == 1.0 {
        (x_feed, model.y_from_x(x_feed)?)
    } else if q == 0.0 {
        (model.x_from_y(x_feed)?, x_feed)
    } else {
        pinch_along_q_line(model, x_feed, q, config)?
    };

    let (xs, ys) = pinch;
    if ys - xs <= f64::EPSILON {
        return Err(ColumnError::InvalidArg {
            what: "equilibrium curve touches the diagonal at the feed",
        });
    }
    let r_min = ((x_distillate - ys) / (ys - xs)).max(0.0);
    debug!(r_min, x = xs, y = ys, q, "minimum reflux");
    Ok(MinimumReflux { r_min, pinch })
}

/// Smallest reflux whose rectifying line meets the q-line right of xB.
///
/// Below it the stripping section would need negative vapor flow. Only
/// feeds with `q < 1` have such a limit, and only when the q-line point at
/// `x = xB` can be reached by a rectifying slope in (0, 1).
pub fn bottoms_limited_reflux(
    x_distillate: f64,
    x_feed: f64,
    x_bottoms: f64,
    q: f64,
) -> Option<f64> {
    if q >= 1.0 {
        return None;
    }
    let y_at_bottoms = (q * x_bottoms - x_feed) / (q - 1.0);
    let slope = (x_distillate - y_at_bottoms) / (x_distillate - x_bottoms);
    (slope > 0.0 && slope < 1.0).then(|| slope / (1.0 - slope))
}

fn pinch_along_q_line<M: EquilibriumModel + ?Sized>(
    model: &M,
    x_feed: f64,
    q: f64,
    config: &RootConfig,
) -> ColumnResult<(f64, f64)> {
    let scale = (q - 1.0).abs().max(q.abs());
    let (dx, dy) = ((q - 1.0) / scale, q / scale);

    // Distance along the direction until x or y leaves [0, 1]
    let s_max = [dx, dy]
        .into_iter()
        .filter(|d| *d != 0.0)
        .map(|d| if d > 0.0 { (1.0 - x_feed) / d } else { x_feed / -d })
        .fold(f64::INFINITY, f64::min);

    let point = |s: f64| {
        (
            (x_feed + s * dx).clamp(0.0, 1.0),
            (x_feed + s * dy).clamp(0.0, 1.0),
        )
    };

    let failure: RefCell<Option<VleError>> = RefCell::new(None);
    let gap = |s: f64| {
        let (x, y) = point(s);
        match model.y_from_x(x) {
            Ok(y_eq) => y_eq - y,
            Err(e) => {
                failure.borrow_mut().get_or_insert(e);
                f64::NAN
            }
        }
    };

    let result = brent(gap, 0.0, s_max, config);
    if let Some(e) = failure.into_inner() {
        return Err(e.into());
    }
    let root = result?;
    let (xs, _) = point(root.x);
    Ok((xs, model.y_from_x(xs)?))
}
