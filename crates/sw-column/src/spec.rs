//! Column design inputs.

use crate::error::{ColumnError, ColumnResult};
use serde::{Deserialize, Serialize};

/// Binary column specification in light-component mole fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Feed composition xF
    pub x_feed: f64,
    /// Distillate composition xD
    pub x_distillate: f64,
    /// Bottoms composition xB
    pub x_bottoms: f64,
    /// Feed quality q (1 = saturated liquid, 0 = saturated vapor)
    pub q: f64,
    /// Reflux ratio R = L/D
    pub reflux: f64,
}

impl ColumnSpec {
    pub fn new(x_feed: f64, x_distillate: f64, x_bottoms: f64, q: f64, reflux: f64) -> Self {
        Self {
            x_feed,
            x_distillate,
            x_bottoms,
            q,
            reflux,
        }
    }

    /// Same column at a different reflux ratio.
    pub fn with_reflux(self, reflux: f64) -> Self {
        Self { reflux, ..self }
    }

    pub fn with_q(self, q: f64) -> Self {
        Self { q, ..self }
    }

    pub fn validate(&self) -> ColumnResult<()> {
        validate_compositions(self.x_distillate, self.x_feed, self.x_bottoms)?;
        if !self.q.is_finite() {
            return Err(ColumnError::InvalidArg {
                what: "feed quality q must be finite",
            });
        }
        if !(self.reflux.is_finite() && self.reflux > 0.0) {
            return Err(ColumnError::InvalidArg {
                what: "reflux ratio must be positive",
            });
        }
        Ok(())
    }
}

/// Checks `0 < xB < xF < xD < 1`.
pub fn validate_compositions(x_distillate: f64, x_feed: f64, x_bottoms: f64) -> ColumnResult<()> {
    let err = |what| ColumnError::InvalidCompositionRange {
        what,
        x_bottoms,
        x_feed,
        x_distillate,
    };
    if ![x_distillate, x_feed, x_bottoms].iter().all(|v| v.is_finite()) {
        return Err(err("compositions must be finite"));
    }
    if x_bottoms <= 0.0 || x_distillate >= 1.0 {
        return Err(err("compositions must lie strictly inside (0, 1)"));
    }
    if !(x_bottoms < x_feed && x_feed < x_distillate) {
        return Err(err("expected xB < xF < xD"));
    }
    Ok(())
}
