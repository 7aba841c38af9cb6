//! sw-reactor: ideal reactor trains on the Levenspiel plot.
//!
//! The ordinate `F_A0 / (−rA)` is plotted against conversion; a CSTR's volume
//! is a rectangle under it and a PFR's volume is the area under the curve.

pub mod error;
pub mod kinetics;
pub mod train;

pub use error::{ReactorError, ReactorResult};
pub use kinetics::{Kinetics, RateParams};
pub use train::{
    CURVE_MAX_CONVERSION, ReactorKind, ReactorStage, ReactorVolume, TrainSizing, levenspiel_curve,
    size_train, size_train_with_config, validate_stages,
};
