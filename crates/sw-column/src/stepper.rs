//! McCabe–Thiele stage stepping.

use crate::error::{ColumnError, ColumnResult};
use crate::lines::{OperatingLines, Section};
use crate::lines::feed_intersection;
use crate::reflux::{MinimumReflux, bottoms_limited_reflux, minimum_reflux};
use crate::spec::{ColumnSpec, validate_compositions};
use serde::Serialize;
use sw_solver::RootConfig;
use sw_vle::EquilibriumModel;
use tracing::{debug, trace, warn};

/// Reflux this close to the minimum is treated as pinched; stepping would
/// only crawl into the pinch until the stage limit.
const PINCH_REL_TOL: f64 = 1e-9;

/// Stepping options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOptions {
    /// Give up after this many equilibrium stages
    pub max_stages: usize,
    /// Root finder settings for the pinch search
    pub root: RootConfig,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            max_stages: 200,
            root: RootConfig::default(),
        }
    }
}

/// One equilibrium stage: vapor `y` leaving the stage and liquid `x` in
/// equilibrium with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageStep {
    /// 1-based, counted from the top of the column
    pub stage: usize,
    pub x: f64,
    pub y: f64,
    pub section: Section,
}

/// Completed construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct McCabeThiele {
    pub spec: ColumnSpec,
    pub minimum_reflux: MinimumReflux,
    pub intersection: (f64, f64),
    /// Theoretical stages, the partial reboiler included
    pub stages: usize,
    /// Stage count with the last stage prorated to land exactly on xB
    pub fractional_stages: f64,
    /// First stage whose liquid crosses below the feed intersection
    pub feed_stage: usize,
    pub steps: Vec<StageStep>,
}

impl McCabeThiele {
    /// Staircase polyline starting at (xD, xD) and ending on the diagonal
    /// below the last stage.
    pub fn vertices(&self) -> Vec<(f64, f64)> {
        staircase(self.spec.x_distillate, &self.steps)
    }
}

/// Result of [`step_stages`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StageOutcome {
    Converged(McCabeThiele),
    /// The operating lines touch or cross the equilibrium curve, so no finite
    /// number of stages reaches xB.
    BelowMinimumReflux { r: f64, r_min: f64 },
}

impl StageOutcome {
    pub fn converged(&self) -> Option<&McCabeThiele> {
        match self {
            StageOutcome::Converged(result) => Some(result),
            StageOutcome::BelowMinimumReflux { .. } => None,
        }
    }

    pub fn r_min(&self) -> f64 {
        match self {
            StageOutcome::Converged(result) => result.minimum_reflux.r_min,
            StageOutcome::BelowMinimumReflux { r_min, .. } => *r_min,
        }
    }
}

/// Step off stages from the distillate down to the bottoms composition.
pub fn step_stages<M: EquilibriumModel + ?Sized>(
    model: &M,
    spec: &ColumnSpec,
    options: &StepOptions,
) -> ColumnResult<StageOutcome> {
    spec.validate()?;
    let min_reflux = minimum_reflux(model, spec.x_distillate, spec.x_feed, spec.q, &options.root)?;

    // A partly vaporized or superheated feed can also pinch at the bottoms end
    let r_min = bottoms_limited_reflux(spec.x_distillate, spec.x_feed, spec.x_bottoms, spec.q)
        .map_or(min_reflux.r_min, |r_bottoms| r_bottoms.max(min_reflux.r_min));

    if spec.reflux <= r_min * (1.0 + PINCH_REL_TOL) {
        warn!(r = spec.reflux, r_min, "reflux at or below minimum");
        return Ok(StageOutcome::BelowMinimumReflux {
            r: spec.reflux,
            r_min,
        });
    }

    let (x_int, _) = feed_intersection(spec)?;
    if !(spec.x_bottoms < x_int && x_int < spec.x_distillate) {
        warn!(
            r = spec.reflux,
            r_min,
            x = x_int,
            "feed line meets the rectifying line outside (xB, xD)"
        );
        return Ok(StageOutcome::BelowMinimumReflux {
            r: spec.reflux,
            r_min,
        });
    }

    let lines = OperatingLines::new(spec)?;
    let (x_int, y_int) = lines.intersection;
    if y_int >= model.y_from_x(x_int)? - PINCH_REL_TOL {
        warn!(
            r = spec.reflux,
            r_min,
            x = x_int,
            y = y_int,
            "feed intersection lies on or above the equilibrium curve"
        );
        return Ok(StageOutcome::BelowMinimumReflux {
            r: spec.reflux,
            r_min,
        });
    }

    let walk = walk_stages(model, spec.x_distillate, spec.x_bottoms, options.max_stages, |x| {
        (lines.y_at(x), lines.section_at(x))
    })?;

    let feed_stage = walk
        .steps
        .iter()
        .find(|step| step.x < x_int)
        .map_or(walk.steps.len(), |step| step.stage);

    debug!(
        stages = walk.steps.len(),
        fractional = walk.fractional,
        feed_stage,
        r = spec.reflux,
        "mccabe-thiele converged"
    );

    Ok(StageOutcome::Converged(McCabeThiele {
        spec: *spec,
        minimum_reflux: min_reflux,
        intersection: lines.intersection,
        stages: walk.steps.len(),
        fractional_stages: walk.fractional,
        feed_stage,
        steps: walk.steps,
    }))
}

/// Total-reflux stage count (operating line on the diagonal).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MinimumStages {
    pub stages: usize,
    pub fractional_stages: f64,
    pub steps: Vec<StageStep>,
}

/// Step on the diagonal from xD to xB: the graphical Fenske count.
pub fn minimum_stages<M: EquilibriumModel + ?Sized>(
    model: &M,
    x_distillate: f64,
    x_bottoms: f64,
    options: &StepOptions,
) -> ColumnResult<MinimumStages> {
    // Any feed between the products will do for the ordering check
    validate_compositions(x_distillate, 0.5 * (x_distillate + x_bottoms), x_bottoms)?;
    let walk = walk_stages(model, x_distillate, x_bottoms, options.max_stages, |x| {
        (x, Section::Rectifying)
    })?;
    debug!(
        stages = walk.steps.len(),
        fractional = walk.fractional,
        "total reflux"
    );
    Ok(MinimumStages {
        stages: walk.steps.len(),
        fractional_stages: walk.fractional,
        steps: walk.steps,
    })
}

impl MinimumStages {
    pub fn vertices(&self, x_distillate: f64) -> Vec<(f64, f64)> {
        staircase(x_distillate, &self.steps)
    }
}

struct Walk {
    steps: Vec<StageStep>,
    fractional: f64,
}

/// Alternate horizontal steps to the equilibrium curve with vertical steps to
/// `operating(x)` until the liquid reaches `x_bottoms`.
fn walk_stages<M, F>(
    model: &M,
    x_distillate: f64,
    x_bottoms: f64,
    max_stages: usize,
    operating: F,
) -> ColumnResult<Walk>
where
    M: EquilibriumModel + ?Sized,
    F: Fn(f64) -> (f64, Section),
{
    let mut steps = Vec::new();
    let mut y = x_distillate;
    let mut x_prev = x_distillate;
    let mut section = Section::Rectifying;

    loop {
        if steps.len() >= max_stages {
            return Err(ColumnError::StageLimitExceeded {
                max_stages,
                x: x_prev,
            });
        }

        let x = model.x_from_y(y)?;
        let stage = steps.len() + 1;
        trace!(stage, x, y, ?section, "stage");
        steps.push(StageStep {
            stage,
            x,
            y,
            section,
        });

        if x <= x_bottoms {
            let fractional = (stage - 1) as f64 + (x_prev - x_bottoms) / (x_prev - x);
            return Ok(Walk { steps, fractional });
        }
        if x >= x_prev {
            return Err(ColumnError::InvalidArg {
                what: "operating line does not lie below the equilibrium curve",
            });
        }

        (y, section) = operating(x);
        x_prev = x;
    }
}

fn staircase(x_distillate: f64, steps: &[StageStep]) -> Vec<(f64, f64)> {
    let mut vertices = Vec::with_capacity(2 * steps.len() + 1);
    vertices.push((x_distillate, x_distillate));
    for step in steps {
        vertices.push((step.x, step.y));
        if let Some(next) = steps.get(step.stage) {
            vertices.push((step.x, next.y));
        } else {
            vertices.push((step.x, step.x));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_vle::ConstantVolatility;

    fn model() -> ConstantVolatility {
        ConstantVolatility::new(2.5).unwrap()
    }

    #[test]
    fn below_minimum_reflux_is_an_outcome() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 1.0);
        let outcome = step_stages(&model(), &spec, &StepOptions::default()).unwrap();
        match outcome {
            StageOutcome::BelowMinimumReflux { r, r_min } => {
                assert_eq!(r, 1.0);
                assert!((r_min - 1.1).abs() < 1e-10);
            }
            other => panic!("expected below-minimum outcome, got {other:?}"),
        }
    }

    #[test]
    fn vapor_feed_pinched_at_bottoms_is_an_outcome() {
        // Feed-line pinch gives Rmin = 2.1, but the stripping section needs R > 3
        for r in [2.2, 3.0] {
            let spec = ColumnSpec::new(0.5, 0.95, 0.35, 0.0, r);
            match step_stages(&model(), &spec, &StepOptions::default()).unwrap() {
                StageOutcome::BelowMinimumReflux { r: got, r_min } => {
                    assert_eq!(got, r);
                    assert!((r_min - 3.0).abs() < 1e-9);
                }
                other => panic!("R = {r}: expected below-minimum outcome, got {other:?}"),
            }
        }

        let spec = ColumnSpec::new(0.5, 0.95, 0.35, 0.0, 10.0);
        let outcome = step_stages(&model(), &spec, &StepOptions::default()).unwrap();
        let result = outcome.converged().unwrap();
        assert_eq!(result.stages, 5);
        assert!((result.intersection.0 - 0.455).abs() < 1e-12);
    }

    #[test]
    fn stage_limit_is_an_error() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 1.65);
        let options = StepOptions {
            max_stages: 5,
            ..StepOptions::default()
        };
        let err = step_stages(&model(), &spec, &options).unwrap_err();
        assert!(matches!(err, ColumnError::StageLimitExceeded { max_stages: 5, .. }));
    }

    #[test]
    fn steps_descend_and_sections_switch_once() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 2.0);
        let outcome = step_stages(&model(), &spec, &StepOptions::default()).unwrap();
        let result = outcome.converged().unwrap();
        assert_eq!(result.stages, 11);
        assert!((result.fractional_stages - 10.388).abs() < 1e-3);
        assert_eq!(result.feed_stage, 5);

        for pair in result.steps.windows(2) {
            assert!(pair[1].x < pair[0].x);
            assert!(pair[1].y < pair[0].y);
        }
        let switches = result
            .steps
            .windows(2)
            .filter(|pair| pair[0].section != pair[1].section)
            .count();
        assert_eq!(switches, 1);
        assert_eq!(result.steps[0].section, Section::Rectifying);
    }

    #[test]
    fn vertices_alternate_horizontal_and_vertical() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 2.0);
        let outcome = step_stages(&model(), &spec, &StepOptions::default()).unwrap();
        let result = outcome.converged().unwrap();
        let vertices = result.vertices();
        assert_eq!(vertices.len(), 2 * result.stages + 1);
        assert_eq!(vertices[0], (0.95, 0.95));
        for (i, pair) in vertices.windows(2).enumerate() {
            if i % 2 == 0 {
                assert_eq!(pair[0].1, pair[1].1, "segment {i} should be horizontal");
            } else {
                assert_eq!(pair[0].0, pair[1].0, "segment {i} should be vertical");
            }
        }
        let last = vertices[vertices.len() - 1];
        assert_eq!(last.0, last.1);
    }

    #[test]
    fn total_reflux_matches_graphical_fenske() {
        let result = minimum_stages(&model(), 0.95, 0.05, &StepOptions::default()).unwrap();
        assert_eq!(result.stages, 7);
        assert!((result.fractional_stages - 6.528).abs() < 1e-3);
        let fenske = (0.95_f64 / 0.05 * 0.95 / 0.05).ln() / 2.5_f64.ln();
        assert!((result.fractional_stages - fenske).abs() < 0.5);
    }

    #[test]
    fn invalid_spec_is_rejected_before_stepping() {
        let spec = ColumnSpec::new(0.5, 0.95, 0.6, 1.0, 2.0);
        let err = step_stages(&model(), &spec, &StepOptions::default()).unwrap_err();
        assert!(matches!(err, ColumnError::InvalidCompositionRange { .. }));
    }
}
