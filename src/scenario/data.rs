//! Scenario inputs consumed by the projection engine

use serde::{Deserialize, Serialize};

/// The six what-if assumptions driving one projection run.
///
/// Rates are fractions (0.05 = 5%). Growth and job creation are in millions
/// per year. The engine does not validate these; see
/// [`RawScenarioInputs`](super::RawScenarioInputs) for boundary handling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInputs {
    /// Share of Tier-1 (high-impact) jobs lost in 2025
    #[serde(default = "default_high_initial_rate")]
    pub high_initial_rate: f64,

    /// Share of Tier-2 (moderate-impact) jobs lost in 2025
    #[serde(default = "default_moderate_initial_rate")]
    pub moderate_initial_rate: f64,

    /// Proportional annual growth of the Tier-1 loss rate after 2025
    /// (0.30 means the rate grows 30% per year)
    #[serde(default = "default_high_rate_change")]
    pub high_rate_change: f64,

    /// Proportional annual growth of the Tier-2 loss rate after 2025
    #[serde(default = "default_moderate_rate_change")]
    pub moderate_rate_change: f64,

    /// Additive labor force growth (millions of workers per year)
    #[serde(default = "default_labor_force_growth")]
    pub labor_force_growth: f64,

    /// Additive non-AI job creation (millions of jobs per year)
    #[serde(default = "default_new_jobs_per_year")]
    pub new_jobs_per_year: f64,
}

pub(crate) fn default_high_initial_rate() -> f64 { 0.05 }
pub(crate) fn default_moderate_initial_rate() -> f64 { 0.025 }
pub(crate) fn default_high_rate_change() -> f64 { 0.30 }
pub(crate) fn default_moderate_rate_change() -> f64 { 0.20 }
// BLS labor force forecast: 620,000/year
pub(crate) fn default_labor_force_growth() -> f64 { 0.62 }
// Historical average job creation: 1,084,000/year
pub(crate) fn default_new_jobs_per_year() -> f64 { 1.084 }

impl Default for ScenarioInputs {
    fn default() -> Self {
        Self {
            high_initial_rate: default_high_initial_rate(),
            moderate_initial_rate: default_moderate_initial_rate(),
            high_rate_change: default_high_rate_change(),
            moderate_rate_change: default_moderate_rate_change(),
            labor_force_growth: default_labor_force_growth(),
            new_jobs_per_year: default_new_jobs_per_year(),
        }
    }
}
