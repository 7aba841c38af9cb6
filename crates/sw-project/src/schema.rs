//! Case file schema.

use serde::{Deserialize, Serialize};
use sw_reactor::{Kinetics, ReactorStage};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    /// Enum variants are written as single-key maps (`- column: {..}`,
    /// `feed: {q: 1.0}`) in both YAML and JSON.
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub cases: Vec<CaseDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CaseDef {
    Column(ColumnCaseDef),
    Reactor(ReactorCaseDef),
}

impl CaseDef {
    pub fn name(&self) -> &str {
        match self {
            CaseDef::Column(case) => &case.name,
            CaseDef::Reactor(case) => &case.name,
        }
    }
}

/// Binary column design case.
///
/// Pressures and temperatures are unit text ("1 atm", "25 C"); bare numbers
/// are mmHg and °C.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnCaseDef {
    pub name: String,
    pub light: String,
    pub heavy: String,
    #[serde(default = "default_pressure")]
    pub pressure: String,
    /// Replace the Raoult curve with a constant relative volatility
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    pub x_feed: f64,
    pub x_distillate: f64,
    pub x_bottoms: f64,
    pub feed: FeedDef,
    pub reflux: RefluxDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_stages: Option<usize>,
}

fn default_pressure() -> String {
    "1 atm".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FeedDef {
    /// Feed quality given directly
    Q(f64),
    /// Feed temperature, converted to q from bubble and dew points
    Temperature(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RefluxDef {
    /// Absolute reflux ratio L/D
    Ratio(f64),
    /// Multiple of the minimum reflux ratio
    Factor(f64),
}

/// Reactor train sizing case.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReactorCaseDef {
    pub name: String,
    pub kinetics: Kinetics,
    pub k: f64,
    pub c_a0: f64,
    pub reactors: Vec<ReactorStage>,
}
