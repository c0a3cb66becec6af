//! Mobility test scoring from inertial sensor samples.
//!
//! Turns the samples recorded during a Sit-to-Stand or Timed Up and Go test
//! into a fixed set of performance indicators, grades each one, grades the
//! completion time against age norms, and reduces the grades to one overall
//! label. The scoring functions in [`scores`] are pure; [`pipeline`] wires them
//! to evaluation files and reports.

pub mod cli;
pub mod ctx;
pub mod input;
pub mod io;
pub mod math;
pub mod norms;
pub mod pipeline;
pub mod schema;
pub mod scores;

pub use input::SensorSample;
pub use scores::age_time::classify_time_by_age;
pub use scores::indicators::compute_indicators;
pub use scores::overall::aggregate_classification;
pub use scores::{Classification, IndicatorResult, IndicatorSet, TestType};
