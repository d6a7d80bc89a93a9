//! Projection output: one record per year plus run-level summaries

use crate::assumptions::BaselineConstants;
use crate::scenario::ScenarioInputs;
use serde::{Deserialize, Serialize};

/// Labor market outcome for a single projected year (millions, rates as fractions)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: u32,
    pub labor_force: f64,
    pub total_employed: f64,

    pub high_impact_rate: f64,
    pub moderate_impact_rate: f64,

    /// Pool at the start of the year, before this year's loss
    pub high_impact_jobs_remaining: f64,
    pub moderate_impact_jobs_remaining: f64,

    pub high_impact_jobs_lost: f64,
    pub moderate_impact_jobs_lost: f64,
    pub total_ai_job_loss: f64,

    pub unemployed: f64,
    pub unemployment_rate: f64,
}

/// A named `(year, value)` sequence for one line on a chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: &'static str,
    pub points: Vec<(u32, f64)>,
}

/// Data behind the three standard charts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Labor force and total employment
    pub labor: Vec<Series>,
    /// Per-tier and total AI job losses
    pub job_losses: Vec<Series>,
    /// Unemployment rate (fraction)
    pub unemployment: Vec<Series>,
}

/// Complete result of a single scenario run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub inputs: ScenarioInputs,
    pub baseline: BaselineConstants,
    pub records: Vec<YearlyRecord>,
}

impl ProjectionResult {
    pub fn records(&self) -> &[YearlyRecord] {
        &self.records
    }

    pub fn record_for(&self, year: u32) -> Option<&YearlyRecord> {
        self.records.iter().find(|r| r.year == year)
    }

    pub fn final_record(&self) -> Option<&YearlyRecord> {
        self.records.last()
    }

    /// Earliest year with the highest unemployment rate
    pub fn peak_unemployment(&self) -> Option<&YearlyRecord> {
        self.records.iter().fold(None, |peak: Option<&YearlyRecord>, r| match peak {
            Some(p) if p.unemployment_rate >= r.unemployment_rate => Some(p),
            _ => Some(r),
        })
    }

    /// Total AI job loss over the whole horizon (millions)
    pub fn cumulative_ai_job_loss(&self) -> f64 {
        self.records.iter().map(|r| r.total_ai_job_loss).sum()
    }

    pub fn chart_series(&self) -> ChartSeries {
        let records = &self.records;

        ChartSeries {
            labor: vec![
                series(records, "Civilian_Labor_Force", |r| r.labor_force),
                series(records, "Total_Employed", |r| r.total_employed),
            ],
            job_losses: vec![
                series(records, "High_Impact_Jobs_Lost", |r| r.high_impact_jobs_lost),
                series(records, "Moderate_Impact_Jobs_Lost", |r| r.moderate_impact_jobs_lost),
                series(records, "Total_AI_Job_Loss", |r| r.total_ai_job_loss),
            ],
            unemployment: vec![series(records, "Unemployment_Rate", |r| r.unemployment_rate)],
        }
    }
}

fn series(
    records: &[YearlyRecord],
    name: &'static str,
    value: fn(&YearlyRecord) -> f64,
) -> Series {
    Series {
        name,
        points: records.iter().map(|r| (r.year, value(r))).collect(),
    }
}
