//! Design-chart sweeps evaluated in parallel.

use crate::error::ColumnResult;
use crate::reflux::{MinimumReflux, minimum_reflux};
use crate::spec::ColumnSpec;
use crate::stepper::{StageOutcome, StepOptions, step_stages};
use rayon::prelude::*;
use serde::Serialize;
use sw_solver::RootConfig;
use sw_vle::EquilibriumModel;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefluxPoint {
    /// Multiple of the minimum reflux ratio
    pub factor: f64,
    pub reflux: f64,
    pub outcome: StageOutcome,
}

/// Stage count at each `factor · Rmin`. Results come back in input order.
pub fn stages_vs_reflux<M: EquilibriumModel + ?Sized>(
    model: &M,
    spec: &ColumnSpec,
    factors: &[f64],
    options: &StepOptions,
) -> ColumnResult<Vec<RefluxPoint>> {
    spec.validate()?;
    let r_min = minimum_reflux(model, spec.x_distillate, spec.x_feed, spec.q, &options.root)?.r_min;
    factors
        .par_iter()
        .map(|&factor| {
            let reflux = factor * r_min;
            let outcome = step_stages(model, &spec.with_reflux(reflux), options)?;
            Ok(RefluxPoint {
                factor,
                reflux,
                outcome,
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeedQualityPoint {
    pub q: f64,
    pub minimum_reflux: MinimumReflux,
}

/// Minimum reflux across a range of feed qualities.
pub fn minimum_reflux_vs_q<M: EquilibriumModel + ?Sized>(
    model: &M,
    x_distillate: f64,
    x_feed: f64,
    qs: &[f64],
    config: &RootConfig,
) -> ColumnResult<Vec<FeedQualityPoint>> {
    qs.par_iter()
        .map(|&q| {
            Ok(FeedQualityPoint {
                q,
                minimum_reflux: minimum_reflux(model, x_distillate, x_feed, q, config)?,
            })
        })
        .collect()
}
