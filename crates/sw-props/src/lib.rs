//! sw-props: pure-component property data for stagewise.
//!
//! Provides:
//! - Substance definitions (benzene, toluene, water, alcohols, light alkanes)
//! - Static property tables (Antoine constants, latent heat, heat capacities)
//! - Antoine vapor-pressure evaluation
//! - Boiling point at a given pressure (numeric inverse of Antoine)
//! - Unit-aware parsing of temperature/pressure/fraction text
//!
//! # Example
//!
//! ```
//! use sw_core::units::{atm, degc, to_degc, to_mmhg};
//! use sw_props::Substance;
//!
//! let benzene = Substance::Benzene;
//! let p = benzene.psat(degc(80.1));
//! assert!((to_mmhg(p) - 760.0).abs() < 2.0);
//!
//! let tb = benzene.boiling_point(atm(1.0)).unwrap();
//! assert!((to_degc(tb) - 80.1).abs() < 0.1);
//! ```

pub mod antoine;
pub mod boiling;
pub mod catalog;
pub mod error;
pub mod substance;
pub mod units;

// Re-exports for ergonomics
pub use antoine::AntoineCoefficients;
pub use boiling::{boiling_point, boiling_point_with_config};
pub use catalog::{CatalogEntry, catalog, filter_catalog};
pub use error::{PropsError, PropsResult};
pub use substance::{Substance, SubstanceProperties};
pub use units::{Quantity, UnitError, parse_pressure, parse_quantity, parse_temperature};
