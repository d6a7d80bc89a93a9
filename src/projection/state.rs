//! Year-over-year state threaded through the projection

use super::records::YearlyRecord;
use super::PROJECTION_START_YEAR;
use crate::assumptions::BaselineConstants;
use crate::error::ProjectionError;
use crate::scenario::ScenarioInputs;

/// Opening state of one projected year, before that year's losses
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    pub year: u32,
    pub high_rate: f64,
    pub moderate_rate: f64,
    pub labor_force: f64,
    pub total_employed: f64,
    /// Tier-1 pool still exposed at the start of the year
    pub high_pool: f64,
    /// Tier-2 pool still exposed at the start of the year
    pub moderate_pool: f64,
}

impl ProjectionState {
    /// State for 2025: initial rates, baseline labor market, full pools
    pub fn opening(baseline: &BaselineConstants, inputs: &ScenarioInputs) -> Self {
        Self {
            year: PROJECTION_START_YEAR,
            high_rate: inputs.high_initial_rate,
            moderate_rate: inputs.moderate_initial_rate,
            labor_force: baseline.base_labor_force,
            total_employed: baseline.base_employed,
            high_pool: baseline.initial_high_impact_jobs,
            moderate_pool: baseline.initial_moderate_impact_jobs,
        }
    }

    /// Opening state of the year after `closed`.
    ///
    /// Rates grow proportionally and cap at 100%. Employment absorbs the
    /// previous year's AI job loss one year late. Pools carry over depleted.
    pub fn next_year(&self, closed: &YearlyRecord, inputs: &ScenarioInputs) -> Self {
        Self {
            year: self.year + 1,
            high_rate: (self.high_rate * (1.0 + inputs.high_rate_change)).min(1.0),
            moderate_rate: (self.moderate_rate * (1.0 + inputs.moderate_rate_change)).min(1.0),
            labor_force: self.labor_force + inputs.labor_force_growth,
            total_employed: self.total_employed + inputs.new_jobs_per_year
                - closed.total_ai_job_loss,
            high_pool: closed.high_impact_jobs_remaining - closed.high_impact_jobs_lost,
            moderate_pool: closed.moderate_impact_jobs_remaining
                - closed.moderate_impact_jobs_lost,
        }
    }

    /// Apply this year's losses and derive unemployment
    pub fn close(&self) -> Result<YearlyRecord, ProjectionError> {
        // NaN also lands here
        if !(self.labor_force > 0.0) {
            return Err(ProjectionError::NonPositiveLaborForce {
                year: self.year,
                labor_force: self.labor_force,
            });
        }

        let high_lost = self.high_pool * self.high_rate;
        let moderate_lost = self.moderate_pool * self.moderate_rate;
        let total_ai_job_loss = high_lost + moderate_lost;
        let unemployed = self.labor_force - self.total_employed + total_ai_job_loss;

        Ok(YearlyRecord {
            year: self.year,
            labor_force: self.labor_force,
            total_employed: self.total_employed,
            high_impact_rate: self.high_rate,
            moderate_impact_rate: self.moderate_rate,
            high_impact_jobs_remaining: self.high_pool,
            moderate_impact_jobs_remaining: self.moderate_pool,
            high_impact_jobs_lost: high_lost,
            moderate_impact_jobs_lost: moderate_lost,
            total_ai_job_loss,
            unemployed,
            unemployment_rate: unemployed / self.labor_force,
        })
    }
}
