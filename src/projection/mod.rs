//! Projection engine for single scenarios and parallel sweeps

mod state;
mod engine;
mod records;
mod sweep;

pub use state::ProjectionState;
pub use engine::{project, ProjectionEngine};
pub use records::{ChartSeries, ProjectionResult, Series, YearlyRecord};
pub use sweep::{run_sweep, ScenarioSummary, SweepOutcome};

// ============================================================================
// Projection Horizon
// ============================================================================
// Baseline constants describe 2024. The first projected year applies the
// initial loss rates; every later year grows them by the rate change.

/// Year the baseline constants describe
pub const BASE_YEAR: u32 = 2024;

/// First projected year
pub const PROJECTION_START_YEAR: u32 = 2025;

/// Last projected year (inclusive)
pub const PROJECTION_END_YEAR: u32 = 2033;

/// Number of records every successful projection returns
pub const PROJECTION_YEARS: usize = (PROJECTION_END_YEAR - PROJECTION_START_YEAR + 1) as usize;
