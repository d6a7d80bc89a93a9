//! Scenario inputs, boundary normalization and sweep generation

mod data;
pub mod adjuster;
pub mod generator;

pub use data::ScenarioInputs;
pub use adjuster::{RawScenarioInputs, RateConvention, JobsUnit, MAX_RATE_CHANGE};
pub use generator::SweepParams;
