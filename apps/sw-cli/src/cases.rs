//! Turning case definitions into column and reactor calculations.
//!
//! The `mccabe` and `levenspiel` subcommands build the same definitions a case
//! file holds, so both paths run through here.

use crate::error::{CliError, CliResult};
use serde::Serialize;
use sw_column::{
    FeedQuality, MinimumStages, StageOutcome, StepOptions, bottoms_limited_reflux,
    feed_quality_of_components, minimum_reflux, minimum_stages, step_stages,
};
use sw_core::units::to_mmhg;
use sw_project::{CaseDef, ColumnCaseDef, FeedDef, ReactorCaseDef, RefluxDef};
use sw_props::{Substance, parse_pressure, parse_temperature};
use sw_reactor::{RateParams, TrainSizing, levenspiel_curve, size_train};
use sw_vle::{ConstantVolatility, EquilibriumModel, RaoultBinary};
use tracing::info;

/// Points on the Levenspiel curve included in reactor reports.
pub const CURVE_POINTS: usize = 100;

pub enum ColumnModel {
    Raoult(RaoultBinary),
    Alpha(ConstantVolatility),
}

impl ColumnModel {
    pub fn as_model(&self) -> &dyn EquilibriumModel {
        match self {
            ColumnModel::Raoult(model) => model,
            ColumnModel::Alpha(model) => model,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ColumnReport {
    pub name: String,
    pub model: String,
    pub pressure_mmhg: f64,
    pub q: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<FeedQuality>,
    pub minimum_stages: MinimumStages,
    pub outcome: StageOutcome,
    /// Staircase polyline, empty below minimum reflux
    pub vertices: Vec<(f64, f64)>,
}

#[derive(Debug, Serialize)]
pub struct ReactorReport {
    pub name: String,
    pub sizing: TrainSizing,
    pub curve: Vec<(f64, f64)>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CaseReport {
    Column(ColumnReport),
    Reactor(ReactorReport),
}

pub fn column_model(case: &ColumnCaseDef) -> CliResult<ColumnModel> {
    if let Some(alpha) = case.alpha {
        return Ok(ColumnModel::Alpha(ConstantVolatility::new(alpha)?));
    }
    let light: Substance = case.light.parse()?;
    let heavy: Substance = case.heavy.parse()?;
    let pressure = parse_pressure(&case.pressure)?;
    Ok(ColumnModel::Raoult(RaoultBinary::new(light, heavy, pressure)?))
}

pub fn run_column(case: &ColumnCaseDef) -> CliResult<ColumnReport> {
    let model = column_model(case)?;
    let pressure_mmhg = to_mmhg(parse_pressure(&case.pressure)?);
    let options = StepOptions {
        max_stages: case.max_stages.unwrap_or(StepOptions::default().max_stages),
        ..StepOptions::default()
    };

    let (q, feed) = match (&case.feed, &model) {
        (FeedDef::Q(q), _) => (*q, None),
        (FeedDef::Temperature(text), ColumnModel::Raoult(raoult)) => {
            let feed = feed_quality_of_components(raoult, case.x_feed, parse_temperature(text)?)?;
            (feed.q, Some(feed))
        }
        (FeedDef::Temperature(_), ColumnModel::Alpha(_)) => {
            return Err(CliError::InvalidInput(
                "a feed temperature needs the Raoult curve; drop --alpha or give q".to_string(),
            ));
        }
    };

    let reflux = match case.reflux {
        RefluxDef::Ratio(r) => r,
        RefluxDef::Factor(factor) => {
            let r_min = minimum_reflux(
                model.as_model(),
                case.x_distillate,
                case.x_feed,
                q,
                &options.root,
            )?
            .r_min;
            let r_min = bottoms_limited_reflux(case.x_distillate, case.x_feed, case.x_bottoms, q)
                .map_or(r_min, |r_bottoms| r_bottoms.max(r_min));
            factor * r_min
        }
    };

    let spec = sw_column::ColumnSpec::new(case.x_feed, case.x_distillate, case.x_bottoms, q, reflux);
    let outcome = step_stages(model.as_model(), &spec, &options)?;
    let minimum_stages = minimum_stages(
        model.as_model(),
        case.x_distillate,
        case.x_bottoms,
        &options,
    )?;
    let vertices = outcome
        .converged()
        .map(|result| result.vertices())
        .unwrap_or_default();

    info!(case = %case.name, q, reflux, "column case complete");
    Ok(ColumnReport {
        name: case.name.clone(),
        model: model.as_model().describe(),
        pressure_mmhg,
        q,
        feed,
        minimum_stages,
        outcome,
        vertices,
    })
}

pub fn run_reactor(case: &ReactorCaseDef) -> CliResult<ReactorReport> {
    let params = RateParams::new(case.k, case.c_a0)?;
    let sizing = size_train(case.kinetics, &params, &case.reactors)?;
    let curve = levenspiel_curve(case.kinetics, &params, CURVE_POINTS)?;
    info!(case = %case.name, total = sizing.total_volume, "reactor case complete");
    Ok(ReactorReport {
        name: case.name.clone(),
        sizing,
        curve,
    })
}

pub fn run_case(case: &CaseDef) -> CliResult<CaseReport> {
    Ok(match case {
        CaseDef::Column(column) => CaseReport::Column(run_column(column)?),
        CaseDef::Reactor(reactor) => CaseReport::Reactor(run_reactor(reactor)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sw_reactor::{Kinetics, ReactorKind, ReactorStage};

    fn textbook_case() -> ColumnCaseDef {
        ColumnCaseDef {
            name: "textbook".to_string(),
            light: "benzene".to_string(),
            heavy: "toluene".to_string(),
            pressure: "1 atm".to_string(),
            alpha: Some(2.5),
            x_feed: 0.5,
            x_distillate: 0.95,
            x_bottoms: 0.05,
            feed: FeedDef::Q(1.0),
            reflux: RefluxDef::Factor(1.5),
            max_stages: None,
        }
    }

    #[test]
    fn reflux_factor_scales_minimum_reflux() {
        let report = run_column(&textbook_case()).unwrap();
        let result = report.outcome.converged().unwrap();
        assert!((result.spec.reflux - 1.65).abs() < 1e-9);
        assert_eq!(result.stages, 12);
        assert_eq!(report.minimum_stages.stages, 7);
        assert_eq!(report.vertices.len(), 2 * result.stages + 1);
    }

    #[test]
    fn feed_temperature_with_alpha_is_rejected() {
        let mut case = textbook_case();
        case.feed = FeedDef::Temperature("25 C".to_string());
        assert!(matches!(run_column(&case), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn raoult_case_with_cold_feed() {
        let mut case = textbook_case();
        case.alpha = None;
        case.x_feed = 0.45;
        case.feed = FeedDef::Temperature("30 C".to_string());
        case.reflux = RefluxDef::Ratio(3.0);
        let report = run_column(&case).unwrap();
        let feed = report.feed.unwrap();
        assert!(feed.q > 1.0);
        assert!((report.pressure_mmhg - 760.0).abs() < 1e-6);
        assert!(report.outcome.converged().is_some());
    }

    #[test]
    fn below_minimum_reflux_has_no_staircase() {
        let mut case = textbook_case();
        case.reflux = RefluxDef::Ratio(0.5);
        let report = run_column(&case).unwrap();
        assert!(matches!(
            report.outcome,
            StageOutcome::BelowMinimumReflux { .. }
        ));
        assert!(report.vertices.is_empty());
    }

    #[test]
    fn reactor_case_reports_curve_and_volumes() {
        let case = ReactorCaseDef {
            name: "r".to_string(),
            kinetics: Kinetics::FirstOrder,
            k: 1.0,
            c_a0: 0.5,
            reactors: vec![ReactorStage::new(ReactorKind::Cstr, 0.4)],
        };
        let report = run_reactor(&case).unwrap();
        assert_eq!(report.curve.len(), CURVE_POINTS);
        assert!((report.sizing.total_volume - 4.0 / 3.0).abs() < 1e-12);
    }
}
