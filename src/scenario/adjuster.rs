//! Normalize scenario inputs as entered at the boundary
//!
//! Forms and request bodies may supply rates as percentages and new jobs as
//! a head count. This module converts them to the engine's convention
//! (fractions, millions) and clamps rates to the calculator's input ranges.
//! The projection engine itself never clamps or validates.

use super::data::{
    default_high_initial_rate, default_high_rate_change, default_labor_force_growth,
    default_moderate_initial_rate, default_moderate_rate_change, default_new_jobs_per_year,
    ScenarioInputs,
};
use crate::error::{ConfigError, InputError};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Upper bound accepted for an annual rate change (500% growth per year)
pub const MAX_RATE_CHANGE: f64 = 5.0;

/// How rate fields are expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateConvention {
    /// 0.05 = 5%
    #[default]
    Fraction,
    /// 5.0 = 5%
    Percent,
}

impl RateConvention {
    /// Convert a value in this convention to a fraction
    pub fn to_fraction(self, value: f64) -> f64 {
        match self {
            RateConvention::Fraction => value,
            RateConvention::Percent => value / 100.0,
        }
    }
}

/// How the new-jobs field is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobsUnit {
    /// 1.084 = 1,084,000 jobs
    #[default]
    Millions,
    /// Raw head count, e.g. 1084000
    Count,
}

impl JobsUnit {
    pub fn to_millions(self, value: f64) -> f64 {
        match self {
            JobsUnit::Millions => value,
            JobsUnit::Count => value / 1_000_000.0,
        }
    }
}

/// Scenario inputs exactly as entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawScenarioInputs {
    #[serde(default = "default_high_initial_rate")]
    pub high_initial_rate: f64,

    #[serde(default = "default_moderate_initial_rate")]
    pub moderate_initial_rate: f64,

    #[serde(default = "default_high_rate_change")]
    pub high_rate_change: f64,

    #[serde(default = "default_moderate_rate_change")]
    pub moderate_rate_change: f64,

    /// Millions of workers per year (never a head count)
    #[serde(default = "default_labor_force_growth")]
    pub labor_force_growth: f64,

    /// In `jobs_unit`
    #[serde(default = "default_new_jobs_per_year")]
    pub new_jobs_per_year: f64,

    /// Convention for all four rate fields.
    /// Defaults must be re-expressed by the caller when switching to percent.
    #[serde(default)]
    pub rate_convention: RateConvention,

    #[serde(default)]
    pub jobs_unit: JobsUnit,
}

impl Default for RawScenarioInputs {
    fn default() -> Self {
        Self::from(ScenarioInputs::default())
    }
}

impl From<ScenarioInputs> for RawScenarioInputs {
    fn from(inputs: ScenarioInputs) -> Self {
        Self {
            high_initial_rate: inputs.high_initial_rate,
            moderate_initial_rate: inputs.moderate_initial_rate,
            high_rate_change: inputs.high_rate_change,
            moderate_rate_change: inputs.moderate_rate_change,
            labor_force_growth: inputs.labor_force_growth,
            new_jobs_per_year: inputs.new_jobs_per_year,
            rate_convention: RateConvention::Fraction,
            jobs_unit: JobsUnit::Millions,
        }
    }
}

impl RawScenarioInputs {
    /// Parse a scenario file; missing fields take the calculator defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Convert to engine inputs: fractions, millions, rates clamped to range
    pub fn normalize(&self) -> Result<ScenarioInputs, InputError> {
        let fields = [
            ("high_initial_rate", self.high_initial_rate),
            ("moderate_initial_rate", self.moderate_initial_rate),
            ("high_rate_change", self.high_rate_change),
            ("moderate_rate_change", self.moderate_rate_change),
            ("labor_force_growth", self.labor_force_growth),
            ("new_jobs_per_year", self.new_jobs_per_year),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(InputError::NonFinite { field: *field });
        }

        let rates = self.rate_convention;
        Ok(ScenarioInputs {
            high_initial_rate: clamp_logged(
                "high_initial_rate",
                rates.to_fraction(self.high_initial_rate),
                1.0,
            ),
            moderate_initial_rate: clamp_logged(
                "moderate_initial_rate",
                rates.to_fraction(self.moderate_initial_rate),
                1.0,
            ),
            high_rate_change: clamp_logged(
                "high_rate_change",
                rates.to_fraction(self.high_rate_change),
                MAX_RATE_CHANGE,
            ),
            moderate_rate_change: clamp_logged(
                "moderate_rate_change",
                rates.to_fraction(self.moderate_rate_change),
                MAX_RATE_CHANGE,
            ),
            labor_force_growth: self.labor_force_growth,
            new_jobs_per_year: self.jobs_unit.to_millions(self.new_jobs_per_year),
        })
    }
}

fn clamp_logged(field: &str, value: f64, max: f64) -> f64 {
    let clamped = value.clamp(0.0, max);
    if clamped != value {
        warn!("{} = {} outside [0, {}], clamped to {}", field, value, max, clamped);
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_passthrough() {
        let inputs = RawScenarioInputs::default().normalize().expect("finite");
        assert_eq!(inputs, ScenarioInputs::default());
    }

    #[test]
    fn test_percent_and_head_count() {
        let raw = RawScenarioInputs {
            high_initial_rate: 5.0,
            moderate_initial_rate: 2.5,
            high_rate_change: 30.0,
            moderate_rate_change: 20.0,
            labor_force_growth: 0.62,
            new_jobs_per_year: 1_084_000.0,
            rate_convention: RateConvention::Percent,
            jobs_unit: JobsUnit::Count,
        };
        let inputs = raw.normalize().expect("finite");

        assert!((inputs.high_initial_rate - 0.05).abs() < 1e-12);
        assert!((inputs.moderate_initial_rate - 0.025).abs() < 1e-12);
        assert!((inputs.high_rate_change - 0.30).abs() < 1e-12);
        assert!((inputs.moderate_rate_change - 0.20).abs() < 1e-12);
        assert!((inputs.new_jobs_per_year - 1.084).abs() < 1e-12);
        // Labor force growth is always millions
        assert_eq!(inputs.labor_force_growth, 0.62);
    }

    #[test]
    fn test_rates_clamped() {
        let raw = RawScenarioInputs {
            high_initial_rate: 1.5,
            moderate_initial_rate: -0.1,
            high_rate_change: 9.0,
            moderate_rate_change: -0.5,
            ..Default::default()
        };
        let inputs = raw.normalize().expect("finite");

        assert_eq!(inputs.high_initial_rate, 1.0);
        assert_eq!(inputs.moderate_initial_rate, 0.0);
        assert_eq!(inputs.high_rate_change, MAX_RATE_CHANGE);
        assert_eq!(inputs.moderate_rate_change, 0.0);
    }

    #[test]
    fn test_growth_not_clamped() {
        let raw = RawScenarioInputs {
            labor_force_growth: -50.0,
            new_jobs_per_year: -3.0,
            ..Default::default()
        };
        let inputs = raw.normalize().expect("finite");
        assert_eq!(inputs.labor_force_growth, -50.0);
        assert_eq!(inputs.new_jobs_per_year, -3.0);
    }

    #[test]
    fn test_non_finite_rejected() {
        let raw = RawScenarioInputs {
            moderate_rate_change: f64::NAN,
            ..Default::default()
        };
        assert_eq!(
            raw.normalize(),
            Err(InputError::NonFinite { field: "moderate_rate_change" })
        );

        let raw = RawScenarioInputs {
            new_jobs_per_year: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(
            raw.normalize(),
            Err(InputError::NonFinite { field: "new_jobs_per_year" })
        );
    }

    #[test]
    fn test_json_conventions() {
        let raw = RawScenarioInputs::from_json_str(
            r#"{"high_initial_rate": 10, "rate_convention": "percent", "jobs_unit": "count", "new_jobs_per_year": 500000}"#,
        )
        .expect("valid json");
        assert_eq!(raw.rate_convention, RateConvention::Percent);
        assert_eq!(raw.jobs_unit, JobsUnit::Count);

        let inputs = raw.normalize().expect("finite");
        assert!((inputs.high_initial_rate - 0.10).abs() < 1e-12);
        assert!((inputs.new_jobs_per_year - 0.5).abs() < 1e-12);
    }
}
