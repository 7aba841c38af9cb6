//! sw-column: binary distillation by the McCabe–Thiele construction.
//!
//! Stages are stepped off against any [`sw_vle::EquilibriumModel`], from the
//! distillate down to the bottoms composition:
//!
//! ```
//! use sw_column::{ColumnSpec, StepOptions, step_stages};
//! use sw_vle::ConstantVolatility;
//!
//! let model = ConstantVolatility::new(2.5).unwrap();
//! let spec = ColumnSpec::new(0.5, 0.95, 0.05, 1.0, 2.0);
//! let outcome = step_stages(&model, &spec, &StepOptions::default()).unwrap();
//! let result = outcome.converged().unwrap();
//! assert_eq!(result.stages, 11);
//! ```

pub mod error;
pub mod feed;
pub mod lines;
pub mod reflux;
pub mod spec;
pub mod stepper;
pub mod sweep;

pub use error::{ColumnError, ColumnResult};
pub use feed::{FeedCondition, FeedQuality, feed_quality, feed_quality_of_components};
pub use lines::{OperatingLines, Section, feed_intersection, q_line, rectifying_line, stripping_line};
pub use reflux::{MinimumReflux, bottoms_limited_reflux, minimum_reflux};
pub use spec::{ColumnSpec, validate_compositions};
pub use stepper::{
    McCabeThiele, MinimumStages, StageOutcome, StageStep, StepOptions, minimum_stages, step_stages,
};
pub use sweep::{FeedQualityPoint, RefluxPoint, minimum_reflux_vs_q, stages_vs_reflux};
