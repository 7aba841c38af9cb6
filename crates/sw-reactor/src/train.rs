//! Sizing ideal reactors in series on the Levenspiel plot.
//!
//! A CSTR operates at its outlet conversion, so its volume is the rectangle
//! `(Xi − Xi−1)·f(Xi)`. A PFR integrates the ordinate over the conversion
//! interval.

use crate::error::{ReactorError, ReactorResult};
use crate::kinetics::{Kinetics, RateParams};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use sw_core::linspace;
use sw_solver::{QuadratureConfig, integrate};
use tracing::debug;

/// Upper end of the sampled Levenspiel curve.
pub const CURVE_MAX_CONVERSION: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactorKind {
    Cstr,
    Pfr,
}

impl fmt::Display for ReactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReactorKind::Cstr => "CSTR",
            ReactorKind::Pfr => "PFR",
        })
    }
}

impl FromStr for ReactorKind {
    type Err = ReactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cstr" | "mixed" => Ok(ReactorKind::Cstr),
            "pfr" | "plug" => Ok(ReactorKind::Pfr),
            _ => Err(ReactorError::Unknown {
                what: "reactor kind",
                name: s.to_string(),
            }),
        }
    }
}

/// One reactor in the train and the conversion at its outlet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorStage {
    pub kind: ReactorKind,
    pub conversion: f64,
}

impl ReactorStage {
    pub fn new(kind: ReactorKind, conversion: f64) -> Self {
        Self { kind, conversion }
    }
}

/// `KIND:X`, e.g. `cstr:0.4`.
impl FromStr for ReactorStage {
    type Err = ReactorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, conversion) = s.split_once(':').ok_or(ReactorError::InvalidArg {
            what: "reactor stage must look like KIND:X",
        })?;
        let conversion = conversion
            .trim()
            .parse::<f64>()
            .map_err(|_| ReactorError::InvalidArg {
                what: "reactor stage conversion is not a number",
            })?;
        Ok(Self {
            kind: kind.parse()?,
            conversion,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReactorVolume {
    pub kind: ReactorKind,
    pub inlet_conversion: f64,
    pub outlet_conversion: f64,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainSizing {
    pub kinetics: Kinetics,
    pub params: RateParams,
    pub reactors: Vec<ReactorVolume>,
    pub total_volume: f64,
}

/// Checks that outlet conversions rise strictly from the zero-conversion feed
/// and stay inside [0, 1).
pub fn validate_stages(stages: &[ReactorStage]) -> ReactorResult<()> {
    if stages.is_empty() {
        return Err(ReactorError::InvalidArg {
            what: "reactor train is empty",
        });
    }
    let mut previous = 0.0;
    for (index, stage) in stages.iter().enumerate() {
        let value = stage.conversion;
        if !(value.is_finite() && (0.0..1.0).contains(&value)) {
            return Err(ReactorError::InvalidConversion {
                index,
                value,
                what: "conversion must lie in [0, 1)",
            });
        }
        if value <= previous {
            return Err(ReactorError::InvalidConversion {
                index,
                value,
                what: "conversions must be strictly increasing",
            });
        }
        previous = value;
    }
    Ok(())
}

/// Volumes of a reactor train fed at zero conversion.
pub fn size_train(
    kinetics: Kinetics,
    params: &RateParams,
    stages: &[ReactorStage],
) -> ReactorResult<TrainSizing> {
    size_train_with_config(kinetics, params, stages, &QuadratureConfig::default())
}

pub fn size_train_with_config(
    kinetics: Kinetics,
    params: &RateParams,
    stages: &[ReactorStage],
    config: &QuadratureConfig,
) -> ReactorResult<TrainSizing> {
    params.validate()?;
    validate_stages(stages)?;

    let ordinate = |x: f64| kinetics.ordinate(x, params);
    let mut inlet = 0.0;
    let mut reactors = Vec::with_capacity(stages.len());
    for stage in stages {
        let outlet = stage.conversion;
        let volume = match stage.kind {
            ReactorKind::Cstr => (outlet - inlet) * ordinate(outlet),
            ReactorKind::Pfr => integrate(&ordinate, inlet, outlet, config)?,
        };
        debug!(kind = %stage.kind, inlet, outlet, volume, "reactor sized");
        reactors.push(ReactorVolume {
            kind: stage.kind,
            inlet_conversion: inlet,
            outlet_conversion: outlet,
            volume,
        });
        inlet = outlet;
    }

    let total_volume = reactors.iter().map(|r| r.volume).sum();
    Ok(TrainSizing {
        kinetics,
        params: *params,
        reactors,
        total_volume,
    })
}

/// `n` points `(X, F_A0/(−rA))` for X on [0, 0.99].
pub fn levenspiel_curve(
    kinetics: Kinetics,
    params: &RateParams,
    n: usize,
) -> ReactorResult<Vec<(f64, f64)>> {
    params.validate()?;
    if n < 2 {
        return Err(ReactorError::InvalidArg {
            what: "curve needs at least 2 points",
        });
    }
    Ok(linspace(0.0, CURVE_MAX_CONVERSION, n)
        .into_iter()
        .map(|x| (x, kinetics.ordinate(x, params)))
        .collect())
}
