//! sw-core: shared foundation for stagewise.
//!
//! Contains:
//! - units (uom SI types + constructors, including the mmHg/°C forms used by
//!   Antoine tables)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use units::*;
