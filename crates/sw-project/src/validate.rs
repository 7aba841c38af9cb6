//! Case file validation, run before any calculation.

use crate::schema::{CaseDef, ColumnCaseDef, FeedDef, Project, ReactorCaseDef, RefluxDef};
use std::collections::HashSet;
use sw_column::validate_compositions;
use sw_props::{Substance, parse_pressure, parse_temperature};
use sw_reactor::{RateParams, validate_stages};

pub const CURRENT_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate case name: {name}")]
    DuplicateName { name: String },

    #[error("Unknown substance '{name}' in case {case}")]
    UnknownSubstance { case: String, name: String },

    #[error("Invalid value in case {case}: {field} = {value} ({reason})")]
    InvalidValue {
        case: String,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version != CURRENT_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    let mut names = HashSet::new();
    for case in &project.cases {
        if !names.insert(case.name()) {
            return Err(ValidationError::DuplicateName {
                name: case.name().to_string(),
            });
        }
        match case {
            CaseDef::Column(column) => validate_column(column)?,
            CaseDef::Reactor(reactor) => validate_reactor(reactor)?,
        }
    }
    Ok(())
}

fn invalid(case: &str, field: &str, value: impl ToString, reason: impl ToString) -> ValidationError {
    ValidationError::InvalidValue {
        case: case.to_string(),
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_column(case: &ColumnCaseDef) -> Result<(), ValidationError> {
    let name = case.name.as_str();
    let substance = |text: &str| {
        text.parse::<Substance>()
            .map_err(|_| ValidationError::UnknownSubstance {
                case: name.to_string(),
                name: text.to_string(),
            })
    };
    let light = substance(&case.light)?;
    let heavy = substance(&case.heavy)?;
    if light == heavy {
        return Err(invalid(name, "heavy", &case.heavy, "same substance as light"));
    }

    parse_pressure(&case.pressure).map_err(|e| invalid(name, "pressure", &case.pressure, e))?;

    if let Some(alpha) = case.alpha {
        if !(alpha.is_finite() && alpha > 1.0) {
            return Err(invalid(name, "alpha", alpha, "must be greater than 1"));
        }
    }

    validate_compositions(case.x_distillate, case.x_feed, case.x_bottoms).map_err(|e| {
        invalid(
            name,
            "compositions",
            format!("{}/{}/{}", case.x_bottoms, case.x_feed, case.x_distillate),
            e,
        )
    })?;

    match &case.feed {
        FeedDef::Q(q) if !q.is_finite() => return Err(invalid(name, "feed.q", q, "must be finite")),
        FeedDef::Q(_) => {}
        FeedDef::Temperature(text) => {
            if case.alpha.is_some() {
                return Err(invalid(
                    name,
                    "feed.temperature",
                    text,
                    "needs the Raoult curve, not a constant alpha",
                ));
            }
            parse_temperature(text).map_err(|e| invalid(name, "feed.temperature", text, e))?;
        }
    }

    let (field, value) = match case.reflux {
        RefluxDef::Ratio(r) => ("reflux.ratio", r),
        RefluxDef::Factor(f) => ("reflux.factor", f),
    };
    if !(value.is_finite() && value > 0.0) {
        return Err(invalid(name, field, value, "must be positive"));
    }

    if case.max_stages == Some(0) {
        return Err(invalid(name, "max_stages", 0, "must be at least 1"));
    }
    Ok(())
}

fn validate_reactor(case: &ReactorCaseDef) -> Result<(), ValidationError> {
    let name = case.name.as_str();
    RateParams::new(case.k, case.c_a0)
        .map_err(|e| invalid(name, "k/c_a0", format!("{}/{}", case.k, case.c_a0), e))?;
    validate_stages(&case.reactors).map_err(|e| {
        let conversions: Vec<String> = case
            .reactors
            .iter()
            .map(|r| r.conversion.to_string())
            .collect();
        invalid(name, "reactors", conversions.join(","), e)
    })?;
    Ok(())
}
