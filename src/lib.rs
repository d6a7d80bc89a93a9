//! AI Job Impact - what-if projection of AI-driven job displacement
//!
//! This library provides:
//! - Scenario inputs and boundary normalization (percent/fraction, head counts)
//! - The year-by-year projection engine, 2025 through 2033
//! - Presentation-ready tables, CSV/JSON output and chart series
//! - Historical reference data loading and timeline merging
//! - Parallel sensitivity sweeps over the rate-change assumptions

pub mod error;
pub mod assumptions;
pub mod scenario;
pub mod projection;
pub mod report;
pub mod history;

// Re-export commonly used types
pub use error::{ConfigError, HistoryError, InputError, ProjectionError};
pub use assumptions::BaselineConstants;
pub use scenario::{ScenarioInputs, RawScenarioInputs, RateConvention, JobsUnit, SweepParams};
pub use projection::{project, ProjectionEngine, ProjectionResult, YearlyRecord};
pub use history::{HistoricalRecord, Timeline};
