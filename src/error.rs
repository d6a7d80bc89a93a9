//! Error types for the projection engine and its collaborators

use thiserror::Error;

/// Runtime failure of the projection recurrence
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Labor force driven to zero or below, so the unemployment rate is undefined
    #[error("undefined unemployment rate in {year}: non-positive labor force ({labor_force})")]
    NonPositiveLaborForce { year: u32, labor_force: f64 },
}

/// Rejected scenario input at the boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("input `{field}` must be a finite number")]
    NonFinite { field: &'static str },
}

/// Failure loading a configuration file (baseline or scenario JSON)
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure loading historical reference data
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to read history: {0}")]
    Csv(#[from] csv::Error),
    #[error("historical year {0} overlaps the projection horizon")]
    OverlapsProjection(u32),
    #[error("historical year {0} appears more than once")]
    DuplicateYear(u32),
}
