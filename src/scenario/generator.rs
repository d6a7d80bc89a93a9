//! Sensitivity sweep generator
//!
//! Builds a grid of scenarios around a base case by varying the two
//! rate-change assumptions, which dominate the shape of every projection.

use super::ScenarioInputs;
use serde::{Deserialize, Serialize};

/// Parameters for a rate-change sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepParams {
    /// Scenario the grid is built around; its rate changes are overwritten
    #[serde(default)]
    pub base: ScenarioInputs,

    /// Tier-1 rate-change values to try
    pub high_rate_changes: Vec<f64>,

    /// Tier-2 rate-change values to try
    pub moderate_rate_changes: Vec<f64>,
}

impl SweepParams {
    /// `steps` evenly spaced values from `start` to `end` inclusive.
    /// A single step yields just `start`; zero steps yields nothing.
    pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
        match steps {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let width = (end - start) / (steps - 1) as f64;
                (0..steps).map(|i| start + width * i as f64).collect()
            }
        }
    }

    /// Number of scenarios `generate` will produce
    pub fn len(&self) -> usize {
        self.high_rate_changes.len() * self.moderate_rate_changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cartesian product of both value lists, Tier-1 major
    pub fn generate(&self) -> Vec<ScenarioInputs> {
        let mut scenarios = Vec::with_capacity(self.len());
        for &high in &self.high_rate_changes {
            for &moderate in &self.moderate_rate_changes {
                scenarios.push(ScenarioInputs {
                    high_rate_change: high,
                    moderate_rate_change: moderate,
                    ..self.base
                });
            }
        }
        scenarios
    }
}
