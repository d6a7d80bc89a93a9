//! Baseline constants anchoring the projection at year 2024
//!
//! All quantities are in millions. These are not user-editable in the
//! calculator itself, but can be overridden from a JSON file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Labor market state at the 2024 anchor year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineConstants {
    /// Civilian labor force (millions)
    #[serde(default = "default_base_labor_force")]
    pub base_labor_force: f64,

    /// Total employed (millions)
    #[serde(default = "default_base_employed")]
    pub base_employed: f64,

    /// Tier-1 pool: jobs most exposed to automation (millions)
    #[serde(default = "default_initial_high_impact_jobs")]
    pub initial_high_impact_jobs: f64,

    /// Tier-2 pool: moderately exposed jobs (millions)
    #[serde(default = "default_initial_moderate_impact_jobs")]
    pub initial_moderate_impact_jobs: f64,
}

fn default_base_labor_force() -> f64 { 169.2 }
fn default_base_employed() -> f64 { 162.7 }
fn default_initial_high_impact_jobs() -> f64 { 22.74 }
fn default_initial_moderate_impact_jobs() -> f64 { 5.08 }

impl Default for BaselineConstants {
    fn default() -> Self {
        Self {
            base_labor_force: default_base_labor_force(),
            base_employed: default_base_employed(),
            initial_high_impact_jobs: default_initial_high_impact_jobs(),
            initial_moderate_impact_jobs: default_initial_moderate_impact_jobs(),
        }
    }
}

impl BaselineConstants {
    /// Earlier 2024 estimate (168.5M labor force, 161.7M employed).
    /// Job pools are unchanged from the default set.
    pub fn early_2024_estimate() -> Self {
        Self {
            base_labor_force: 168.5,
            base_employed: 161.7,
            ..Self::default()
        }
    }

    /// Parse an override; missing fields fall back to the defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load an override file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Unemployed at the anchor year, before any AI-driven loss
    pub fn base_unemployed(&self) -> f64 {
        self.base_labor_force - self.base_employed
    }
}
