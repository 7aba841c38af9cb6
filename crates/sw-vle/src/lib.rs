//! sw-vle: binary vapor-liquid equilibrium.
//!
//! The McCabe–Thiele construction only needs two questions answered about the
//! equilibrium curve: "what vapor is in equilibrium with this liquid?" and the
//! inverse. [`EquilibriumModel`] captures exactly that, with two backends:
//!
//! - [`RaoultBinary`]: ideal solution, Antoine vapor pressures, fixed total
//!   pressure. The curve is parametric in temperature.
//! - [`ConstantVolatility`]: closed-form `y = αx / (1 + (α − 1)x)`, the usual
//!   textbook idealization.

pub mod error;
pub mod model;
pub mod raoult;
pub mod volatility;

pub use error::{VleError, VleResult};
pub use model::{EquilibriumModel, EquilibriumPoint};
pub use raoult::RaoultBinary;
pub use volatility::ConstantVolatility;
