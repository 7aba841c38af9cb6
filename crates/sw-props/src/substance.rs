//! Substance definitions and their static property tables.

use crate::antoine::AntoineCoefficients;
use crate::error::{PropsError, PropsResult};
use sw_core::units::{
    MolarEnergy, MolarHeatCapacity, Pressure, Temperature, j_per_mol, j_per_mol_k,
};

/// Substances commonly used in binary distillation exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Substance {
    /// Acetone (C₃H₆O)
    Acetone,
    /// Benzene (C₆H₆)
    Benzene,
    /// Cyclohexane (C₆H₁₂)
    Cyclohexane,
    /// Ethanol (C₂H₅OH)
    Ethanol,
    /// n-Heptane
    NHeptane,
    /// n-Hexane
    NHexane,
    /// Methanol (CH₃OH)
    Methanol,
    /// Toluene (C₇H₈)
    Toluene,
    /// Water (H₂O)
    Water,
    /// o-Xylene
    OXylene,
    /// p-Xylene
    PXylene,
}

/// Pure-component data used by the equilibrium and feed-condition
/// calculations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubstanceProperties {
    /// log10 / mmHg / °C Antoine constants
    pub antoine: AntoineCoefficients,
    /// Latent heat of vaporization at the normal boiling point [J/mol]
    pub latent_heat_j_per_mol: f64,
    /// Liquid heat capacity near 25 °C [J/(mol·K)]
    pub cp_liquid_j_per_mol_k: f64,
    /// Ideal-gas heat capacity near 25 °C [J/(mol·K)]
    pub cp_vapor_j_per_mol_k: f64,
}

impl SubstanceProperties {
    pub fn latent_heat(&self) -> MolarEnergy {
        j_per_mol(self.latent_heat_j_per_mol)
    }

    pub fn cp_liquid(&self) -> MolarHeatCapacity {
        j_per_mol_k(self.cp_liquid_j_per_mol_k)
    }

    pub fn cp_vapor(&self) -> MolarHeatCapacity {
        j_per_mol_k(self.cp_vapor_j_per_mol_k)
    }
}

const ACETONE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(7.117_14, 1_210.595, 229.664, -13.0, 70.0),
    latent_heat_j_per_mol: 29_100.0,
    cp_liquid_j_per_mol_k: 125.5,
    cp_vapor_j_per_mol_k: 75.0,
};

const BENZENE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.905_65, 1_211.033, 220.790, 8.0, 103.0),
    latent_heat_j_per_mol: 30_720.0,
    cp_liquid_j_per_mol_k: 136.0,
    cp_vapor_j_per_mol_k: 82.4,
};

const CYCLOHEXANE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.841_30, 1_201.53, 222.65, 20.0, 81.0),
    latent_heat_j_per_mol: 29_970.0,
    cp_liquid_j_per_mol_k: 156.0,
    cp_vapor_j_per_mol_k: 106.3,
};

const ETHANOL: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(8.044_94, 1_554.3, 222.65, -2.0, 100.0),
    latent_heat_j_per_mol: 38_560.0,
    cp_liquid_j_per_mol_k: 112.4,
    cp_vapor_j_per_mol_k: 65.6,
};

const N_HEPTANE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.896_77, 1_264.90, 216.54, -2.0, 124.0),
    latent_heat_j_per_mol: 31_770.0,
    cp_liquid_j_per_mol_k: 224.7,
    cp_vapor_j_per_mol_k: 165.2,
};

const N_HEXANE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.876_01, 1_171.17, 224.41, -25.0, 92.0),
    latent_heat_j_per_mol: 28_850.0,
    cp_liquid_j_per_mol_k: 195.6,
    cp_vapor_j_per_mol_k: 142.6,
};

const METHANOL: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(7.897_50, 1_474.08, 229.13, -14.0, 65.0),
    latent_heat_j_per_mol: 35_210.0,
    cp_liquid_j_per_mol_k: 81.1,
    cp_vapor_j_per_mol_k: 44.1,
};

const TOLUENE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.954_64, 1_344.8, 219.482, 6.0, 137.0),
    latent_heat_j_per_mol: 33_180.0,
    cp_liquid_j_per_mol_k: 157.3,
    cp_vapor_j_per_mol_k: 103.7,
};

const WATER: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(8.071_31, 1_730.63, 233.426, 1.0, 100.0),
    latent_heat_j_per_mol: 40_656.0,
    cp_liquid_j_per_mol_k: 75.3,
    cp_vapor_j_per_mol_k: 33.6,
};

const O_XYLENE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.998_91, 1_474.679, 213.686, 32.0, 172.0),
    latent_heat_j_per_mol: 36_240.0,
    cp_liquid_j_per_mol_k: 187.7,
    cp_vapor_j_per_mol_k: 133.3,
};

const P_XYLENE: SubstanceProperties = SubstanceProperties {
    antoine: AntoineCoefficients::new(6.990_52, 1_453.430, 215.307, 27.0, 166.0),
    latent_heat_j_per_mol: 35_670.0,
    cp_liquid_j_per_mol_k: 181.7,
    cp_vapor_j_per_mol_k: 126.9,
};

impl Substance {
    pub const ALL: [Substance; 11] = [
        Substance::Acetone,
        Substance::Benzene,
        Substance::Cyclohexane,
        Substance::Ethanol,
        Substance::NHeptane,
        Substance::NHexane,
        Substance::Methanol,
        Substance::Toluene,
        Substance::Water,
        Substance::OXylene,
        Substance::PXylene,
    ];

    /// Canonical identifier used in case files and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Substance::Acetone => "acetone",
            Substance::Benzene => "benzene",
            Substance::Cyclohexane => "cyclohexane",
            Substance::Ethanol => "ethanol",
            Substance::NHeptane => "n-heptane",
            Substance::NHexane => "n-hexane",
            Substance::Methanol => "methanol",
            Substance::Toluene => "toluene",
            Substance::Water => "water",
            Substance::OXylene => "o-xylene",
            Substance::PXylene => "p-xylene",
        }
    }

    /// Get human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Substance::Acetone => "Acetone",
            Substance::Benzene => "Benzene",
            Substance::Cyclohexane => "Cyclohexane",
            Substance::Ethanol => "Ethanol",
            Substance::NHeptane => "n-Heptane",
            Substance::NHexane => "n-Hexane",
            Substance::Methanol => "Methanol",
            Substance::Toluene => "Toluene",
            Substance::Water => "Water",
            Substance::OXylene => "o-Xylene",
            Substance::PXylene => "p-Xylene",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Substance::Acetone => &["propanone", "c3h6o"],
            Substance::Benzene => &["c6h6"],
            Substance::Cyclohexane => &["c6h12"],
            Substance::Ethanol => &["ethyl alcohol", "etoh"],
            Substance::NHeptane => &["heptane", "nheptane"],
            Substance::NHexane => &["hexane", "nhexane"],
            Substance::Methanol => &["methyl alcohol", "meoh"],
            Substance::Toluene => &["methylbenzene", "c7h8"],
            Substance::Water => &["h2o"],
            Substance::OXylene => &["oxylene", "1,2-dimethylbenzene"],
            Substance::PXylene => &["pxylene", "1,4-dimethylbenzene"],
        }
    }

    /// Static property record for this substance.
    pub fn properties(&self) -> &'static SubstanceProperties {
        match self {
            Substance::Acetone => &ACETONE,
            Substance::Benzene => &BENZENE,
            Substance::Cyclohexane => &CYCLOHEXANE,
            Substance::Ethanol => &ETHANOL,
            Substance::NHeptane => &N_HEPTANE,
            Substance::NHexane => &N_HEXANE,
            Substance::Methanol => &METHANOL,
            Substance::Toluene => &TOLUENE,
            Substance::Water => &WATER,
            Substance::OXylene => &O_XYLENE,
            Substance::PXylene => &P_XYLENE,
        }
    }

    pub fn antoine(&self) -> &'static AntoineCoefficients {
        &self.properties().antoine
    }

    /// Vapor pressure at `t` (Antoine).
    pub fn psat(&self, t: Temperature) -> Pressure {
        self.antoine().psat(t)
    }

    /// Boiling point at `p`.
    pub fn boiling_point(&self, p: Pressure) -> PropsResult<Temperature> {
        crate::boiling::boiling_point(self.antoine(), p, None)
    }
}

impl std::fmt::Display for Substance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl std::str::FromStr for Substance {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Substance::ALL
            .into_iter()
            .find(|sub| {
                sub.key() == needle
                    || sub.display_name().to_ascii_lowercase() == needle
                    || sub.aliases().iter().any(|alias| *alias == needle)
            })
            .ok_or_else(|| PropsError::UnknownSubstance {
                name: s.trim().to_string(),
            })
    }
}
