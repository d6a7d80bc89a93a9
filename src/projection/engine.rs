//! Core projection engine

use super::records::{ProjectionResult, YearlyRecord};
use super::state::ProjectionState;
use super::{PROJECTION_END_YEAR, PROJECTION_YEARS};
use crate::assumptions::BaselineConstants;
use crate::error::ProjectionError;
use crate::scenario::ScenarioInputs;
use log::debug;

/// Runs the year-by-year recurrence from a fixed baseline
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    baseline: BaselineConstants,
}

impl ProjectionEngine {
    pub fn new(baseline: BaselineConstants) -> Self {
        Self { baseline }
    }

    pub fn baseline(&self) -> &BaselineConstants {
        &self.baseline
    }

    /// Project 2025 through 2033.
    ///
    /// Inputs are used as given; callers normalize at the boundary. The only
    /// failure is a labor force at or below zero in some year, in which case
    /// no partial result is returned.
    pub fn project(&self, inputs: &ScenarioInputs) -> Result<ProjectionResult, ProjectionError> {
        debug!("Projecting scenario {:?}", inputs);

        let mut records: Vec<YearlyRecord> = Vec::with_capacity(PROJECTION_YEARS);
        let mut state = ProjectionState::opening(&self.baseline, inputs);

        loop {
            let record = state.close().map_err(|e| {
                debug!("Projection failed: {}", e);
                e
            })?;
            records.push(record);

            if state.year >= PROJECTION_END_YEAR {
                break;
            }
            state = state.next_year(&record, inputs);
        }

        if let Some(last) = records.last() {
            debug!(
                "Projection complete: {} unemployment rate {:.4}, cumulative AI job loss {:.4}M",
                last.year,
                last.unemployment_rate,
                records.iter().map(|r| r.total_ai_job_loss).sum::<f64>()
            );
        }

        Ok(ProjectionResult {
            inputs: *inputs,
            baseline: self.baseline,
            records,
        })
    }
}

/// Project with the default baseline constants
pub fn project(inputs: &ScenarioInputs) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::default().project(inputs)
}
