//! Table, CSV and JSON rendering.

use crate::cases::{CaseReport, ColumnReport, ReactorReport};
use crate::error::CliResult;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use sw_column::{Section, StageOutcome};
use sw_core::units::to_degc;
use sw_vle::EquilibriumPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Print to stdout, or write to `output` when given.
pub fn emit(content: &str, output: Option<&Path>) -> CliResult<()> {
    match output {
        Some(path) => {
            std::fs::write(path, content)?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

pub fn json<T: Serialize + ?Sized>(value: &T) -> CliResult<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

pub fn txy(points: &[EquilibriumPoint], format: OutputFormat) -> CliResult<String> {
    #[derive(Serialize)]
    struct Row {
        t_c: Option<f64>,
        x: f64,
        y: f64,
    }
    let rows: Vec<Row> = points
        .iter()
        .map(|p| Row {
            t_c: p.temperature.map(to_degc),
            x: p.x,
            y: p.y,
        })
        .collect();

    let mut out = String::new();
    match format {
        OutputFormat::Json => return json(&rows),
        OutputFormat::Csv => {
            out.push_str("t_c,x,y\n");
            for row in &rows {
                let t = row.t_c.map(|t| t.to_string()).unwrap_or_default();
                let _ = writeln!(out, "{},{},{}", t, row.x, row.y);
            }
        }
        OutputFormat::Table => {
            let _ = writeln!(out, "{:>10}  {:>8}  {:>8}", "T [°C]", "x", "y");
            for row in &rows {
                let t = row.t_c.map(|t| format!("{t:.3}")).unwrap_or_default();
                let _ = writeln!(out, "{:>10}  {:>8.4}  {:>8.4}", t, row.x, row.y);
            }
        }
    }
    Ok(out)
}

pub fn column(report: &ColumnReport, format: OutputFormat) -> CliResult<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => return json(report),
        OutputFormat::Csv => {
            out.push_str("stage,x,y,section\n");
            if let StageOutcome::Converged(result) = &report.outcome {
                for step in &result.steps {
                    let _ = writeln!(
                        out,
                        "{},{},{},{}",
                        step.stage,
                        step.x,
                        step.y,
                        section_label(step.section)
                    );
                }
            }
        }
        OutputFormat::Table => column_table(&mut out, report),
    }
    Ok(out)
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Rectifying => "rectifying",
        Section::Stripping => "stripping",
    }
}

fn column_table(out: &mut String, report: &ColumnReport) {
    let _ = writeln!(out, "Column: {} ({})", report.name, report.model);
    let _ = writeln!(out, "  P = {:.1} mmHg", report.pressure_mmhg);
    if let Some(feed) = &report.feed {
        let _ = writeln!(
            out,
            "  Feed at {:.2} °C: {:?} (bubble {:.2} °C, dew {:.2} °C)",
            feed.t_feed_c, feed.condition, feed.t_bubble_c, feed.t_dew_c
        );
    }
    let _ = writeln!(
        out,
        "  q = {:.4}   Rmin = {:.4}",
        report.q,
        report.outcome.r_min()
    );
    let _ = writeln!(
        out,
        "  Minimum stages (total reflux): {} ({:.2})",
        report.minimum_stages.stages, report.minimum_stages.fractional_stages
    );

    match &report.outcome {
        StageOutcome::BelowMinimumReflux { r, r_min } => {
            let _ = writeln!(
                out,
                "  R = {r:.4} is at or below the minimum reflux {r_min:.4}: no finite stage count"
            );
        }
        StageOutcome::Converged(result) => {
            let r = result.spec.reflux;
            let r_min = result.minimum_reflux.r_min;
            if r_min > 0.0 {
                let _ = writeln!(out, "  R = {:.4} ({:.2} × Rmin)", r, r / r_min);
            } else {
                let _ = writeln!(out, "  R = {r:.4}");
            }
            let _ = writeln!(
                out,
                "  Stages: {} ({:.2} fractional), feed on stage {}",
                result.stages, result.fractional_stages, result.feed_stage
            );
            let _ = writeln!(out);
            let _ = writeln!(out, "{:>6}  {:>8}  {:>8}  section", "stage", "x", "y");
            for step in &result.steps {
                let _ = writeln!(
                    out,
                    "{:>6}  {:>8.4}  {:>8.4}  {}",
                    step.stage,
                    step.x,
                    step.y,
                    section_label(step.section)
                );
            }
        }
    }
}

pub fn reactor(report: &ReactorReport, format: OutputFormat) -> CliResult<String> {
    let mut out = String::new();
    match format {
        OutputFormat::Json => return json(report),
        OutputFormat::Csv => {
            out.push_str("reactor,kind,x_in,x_out,volume\n");
            for (i, r) in report.sizing.reactors.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{},{},{},{},{}",
                    i + 1,
                    r.kind,
                    r.inlet_conversion,
                    r.outlet_conversion,
                    r.volume
                );
            }
        }
        OutputFormat::Table => {
            let sizing = &report.sizing;
            let _ = writeln!(
                out,
                "Reactor train: {} ({}, k = {}, cA0 = {})",
                report.name, sizing.kinetics, sizing.params.k, sizing.params.c_a0
            );
            let _ = writeln!(
                out,
                "{:>4}  {:>5}  {:>7}  {:>7}  {:>10}",
                "#", "kind", "X in", "X out", "volume"
            );
            for (i, r) in sizing.reactors.iter().enumerate() {
                let _ = writeln!(
                    out,
                    "{:>4}  {:>5}  {:>7.3}  {:>7.3}  {:>10.4}",
                    i + 1,
                    r.kind.to_string(),
                    r.inlet_conversion,
                    r.outlet_conversion,
                    r.volume
                );
            }
            let _ = writeln!(out, "Total volume: {:.4}", sizing.total_volume);
        }
    }
    Ok(out)
}

pub fn case(report: &CaseReport, format: OutputFormat) -> CliResult<String> {
    match report {
        CaseReport::Column(column_report) => column(column_report, format),
        CaseReport::Reactor(reactor_report) => reactor(reactor_report, format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::run_reactor;
    use sw_project::ReactorCaseDef;
    use sw_reactor::{Kinetics, ReactorKind, ReactorStage};

    fn report() -> ReactorReport {
        run_reactor(&ReactorCaseDef {
            name: "r".to_string(),
            kinetics: Kinetics::FirstOrder,
            k: 1.0,
            c_a0: 0.5,
            reactors: vec![
                ReactorStage::new(ReactorKind::Cstr, 0.4),
                ReactorStage::new(ReactorKind::Pfr, 0.8),
            ],
        })
        .unwrap()
    }

    #[test]
    fn reactor_csv_has_one_row_per_reactor() {
        let csv = reactor(&report(), OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "reactor,kind,x_in,x_out,volume");
        assert!(lines[1].starts_with("1,CSTR,0,0.4,"));
        assert!(lines[2].starts_with("2,PFR,0.4,0.8,"));
    }

    #[test]
    fn reactor_json_is_parseable() {
        let text = reactor(&report(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["sizing"]["kinetics"], "first_order");
        assert_eq!(value["sizing"]["reactors"][1]["kind"], "pfr");
    }

    #[test]
    fn txy_table_without_temperatures() {
        let points = [
            EquilibriumPoint { x: 0.0, y: 0.0, temperature: None },
            EquilibriumPoint { x: 1.0, y: 1.0, temperature: None },
        ];
        let csv = txy(&points, OutputFormat::Csv).unwrap();
        assert_eq!(csv, "t_c,x,y\n,0,0\n,1,1\n");
    }
}
