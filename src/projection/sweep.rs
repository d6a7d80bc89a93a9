//! Parallel execution of many scenarios against one engine

use super::engine::ProjectionEngine;
use super::records::ProjectionResult;
use crate::scenario::ScenarioInputs;
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Headline numbers for one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioSummary {
    pub peak_unemployment_rate: f64,
    pub peak_year: u32,
    pub final_unemployment_rate: f64,
    pub cumulative_ai_job_loss: f64,
}

impl ScenarioSummary {
    pub fn from_result(result: &ProjectionResult) -> Option<Self> {
        let peak = result.peak_unemployment()?;
        let last = result.final_record()?;
        Some(Self {
            peak_unemployment_rate: peak.unemployment_rate,
            peak_year: peak.year,
            final_unemployment_rate: last.unemployment_rate,
            cumulative_ai_job_loss: result.cumulative_ai_job_loss(),
        })
    }
}

/// Outcome of one sweep cell; failures are kept, not dropped
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepOutcome {
    pub inputs: ScenarioInputs,
    pub summary: Result<ScenarioSummary, String>,
}

/// Project every scenario in parallel; output order matches input order
pub fn run_sweep(engine: &ProjectionEngine, scenarios: &[ScenarioInputs]) -> Vec<SweepOutcome> {
    let start = Instant::now();

    let outcomes: Vec<SweepOutcome> = scenarios
        .par_iter()
        .map(|inputs| {
            let summary = engine
                .project(inputs)
                .map_err(|e| e.to_string())
                .and_then(|result| {
                    ScenarioSummary::from_result(&result)
                        .ok_or_else(|| "projection produced no records".to_string())
                });
            SweepOutcome { inputs: *inputs, summary }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| o.summary.is_err()).count();
    info!(
        "Swept {} scenarios in {:?} ({} failed)",
        outcomes.len(),
        start.elapsed(),
        failed
    );

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::SweepParams;

    #[test]
    fn test_sweep_keeps_order_and_failures() {
        let engine = ProjectionEngine::default();
        let scenarios = vec![
            ScenarioInputs::default(),
            ScenarioInputs { labor_force_growth: -100.0, ..Default::default() },
            ScenarioInputs { high_rate_change: 0.0, moderate_rate_change: 0.0, ..Default::default() },
        ];
        let outcomes = run_sweep(&engine, &scenarios);

        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[1].inputs.labor_force_growth, -100.0);
        assert!(outcomes[0].summary.is_ok());
        assert!(outcomes[1].summary.is_err());
        assert!(outcomes[2].summary.is_ok());
    }

    #[test]
    fn test_summary_matches_single_run() {
        let engine = ProjectionEngine::default();
        let params = SweepParams {
            base: ScenarioInputs::default(),
            high_rate_changes: SweepParams::linspace(0.0, 0.5, 3),
            moderate_rate_changes: SweepParams::linspace(0.0, 0.3, 4),
        };
        let scenarios = params.generate();
        let outcomes = run_sweep(&engine, &scenarios);
        assert_eq!(outcomes.len(), 12);

        for (inputs, outcome) in scenarios.iter().zip(&outcomes) {
            let single = engine.project(inputs).expect("projects");
            let summary = outcome.summary.as_ref().expect("ok");
            assert_eq!(summary.cumulative_ai_job_loss, single.cumulative_ai_job_loss());
            assert_eq!(summary.final_unemployment_rate, single.records[8].unemployment_rate);
        }
    }
}
