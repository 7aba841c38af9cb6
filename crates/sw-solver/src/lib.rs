//! Scalar numerics shared by the property, equilibrium, column and reactor
//! crates.
//!
//! Every calculation in stagewise reduces to one of three primitives:
//! a single-variable root (boiling point, bubble/dew temperature, pinch on
//! the q-line), an intersection of two straight lines (operating lines and
//! the feed line), or a definite integral (PFR volume under a Levenspiel
//! curve).

pub mod error;
pub mod line;
pub mod quadrature;
pub mod root;

pub use error::{SolverError, SolverResult};
pub use line::Line;
pub use quadrature::{QuadratureConfig, integrate};
pub use root::{RootConfig, RootResult, brent, newton, newton_then_brent};
