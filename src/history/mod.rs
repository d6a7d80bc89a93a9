//! Historical reference data
//!
//! Observed labor market figures for years up to the 2024 baseline, loaded
//! from CSV and shown alongside a projection. The engine never reads them.

use crate::error::HistoryError;
use crate::projection::{ProjectionResult, BASE_YEAR};
use crate::scenario::RateConvention;
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// One observed year (millions, rate as a fraction)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    #[serde(rename = "Year", alias = "year")]
    pub year: u32,
    #[serde(rename = "Civilian_Labor_Force", alias = "labor_force")]
    pub labor_force: f64,
    #[serde(rename = "Total_Employed", alias = "total_employed")]
    pub total_employed: f64,
    #[serde(rename = "Unemployment_Rate", alias = "unemployment_rate")]
    pub unemployment_rate: f64,
}

/// Load history from a CSV file
pub fn load_history<P: AsRef<Path>>(
    path: P,
    convention: RateConvention,
) -> Result<Vec<HistoricalRecord>, HistoryError> {
    let reader = csv::Reader::from_path(path.as_ref())?;
    let records = collect_history(reader, convention)?;
    info!(
        "Loaded {} historical records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Load history from any CSV source with a header row.
///
/// Records come back sorted by year. Years after the baseline year and
/// repeated years are rejected.
pub fn load_history_from_reader<R: io::Read>(
    reader: R,
    convention: RateConvention,
) -> Result<Vec<HistoricalRecord>, HistoryError> {
    collect_history(csv::Reader::from_reader(reader), convention)
}

fn collect_history<R: io::Read>(
    mut reader: csv::Reader<R>,
    convention: RateConvention,
) -> Result<Vec<HistoricalRecord>, HistoryError> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();

    for row in reader.deserialize() {
        let mut record: HistoricalRecord = row?;
        if record.year > BASE_YEAR {
            return Err(HistoryError::OverlapsProjection(record.year));
        }
        if !seen.insert(record.year) {
            return Err(HistoryError::DuplicateYear(record.year));
        }
        record.unemployment_rate = convention.to_fraction(record.unemployment_rate);
        records.push(record);
    }

    records.sort_by_key(|r| r.year);
    Ok(records)
}

/// Where a timeline point came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Historical,
    Projected,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimelinePoint {
    pub year: u32,
    pub labor_force: f64,
    pub total_employed: f64,
    pub unemployment_rate: f64,
    pub source: Source,
}

/// Historical years followed by projected years, ascending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Timeline {
    pub points: Vec<TimelinePoint>,
}

impl Timeline {
    pub fn combine(history: &[HistoricalRecord], projection: &ProjectionResult) -> Self {
        let historical = history.iter().map(|h| TimelinePoint {
            year: h.year,
            labor_force: h.labor_force,
            total_employed: h.total_employed,
            unemployment_rate: h.unemployment_rate,
            source: Source::Historical,
        });
        let projected = projection.records().iter().map(|r| TimelinePoint {
            year: r.year,
            labor_force: r.labor_force,
            total_employed: r.total_employed,
            unemployment_rate: r.unemployment_rate,
            source: Source::Projected,
        });

        Self {
            points: historical.chain(projected).collect(),
        }
    }

    pub fn years(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.year).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::scenario::ScenarioInputs;

    const HISTORY_CSV: &str = "\
Year,Civilian_Labor_Force,Total_Employed,Unemployment_Rate
2023,167.1,161.0,3.6
2022,164.3,158.3,3.6
2024,168.1,161.3,4.0
";

    #[test]
    fn test_load_sorted_percent() {
        let history = load_history_from_reader(HISTORY_CSV.as_bytes(), RateConvention::Percent)
            .expect("valid history");

        assert_eq!(history.len(), 3);
        assert_eq!(history.iter().map(|h| h.year).collect::<Vec<_>>(), vec![2022, 2023, 2024]);
        assert!((history[2].unemployment_rate - 0.04).abs() < 1e-12);
        assert_eq!(history[0].labor_force, 164.3);
    }

    #[test]
    fn test_snake_case_headers() {
        let csv = "year,labor_force,total_employed,unemployment_rate\n2020,160.7,147.8,0.081\n";
        let history = load_history_from_reader(csv.as_bytes(), RateConvention::Fraction)
            .expect("valid history");
        assert_eq!(history[0].year, 2020);
        assert_eq!(history[0].unemployment_rate, 0.081);
    }

    #[test]
    fn test_rejects_projection_years() {
        let csv = "Year,Civilian_Labor_Force,Total_Employed,Unemployment_Rate\n2025,169.0,162.0,0.04\n";
        let err = load_history_from_reader(csv.as_bytes(), RateConvention::Fraction);
        assert!(matches!(err, Err(HistoryError::OverlapsProjection(2025))));
    }

    #[test]
    fn test_rejects_duplicates() {
        let csv = "Year,Civilian_Labor_Force,Total_Employed,Unemployment_Rate\n\
                   2021,161.2,152.6,0.054\n2021,161.2,152.6,0.054\n";
        let err = load_history_from_reader(csv.as_bytes(), RateConvention::Fraction);
        assert!(matches!(err, Err(HistoryError::DuplicateYear(2021))));
    }

    #[test]
    fn test_malformed_row() {
        let csv = "Year,Civilian_Labor_Force,Total_Employed,Unemployment_Rate\n2021,abc,152.6,0.054\n";
        let err = load_history_from_reader(csv.as_bytes(), RateConvention::Fraction);
        assert!(matches!(err, Err(HistoryError::Csv(_))));
    }

    #[test]
    fn test_timeline() {
        let history = load_history_from_reader(HISTORY_CSV.as_bytes(), RateConvention::Percent)
            .expect("valid history");
        let projection = project(&ScenarioInputs::default()).expect("projects");
        let timeline = Timeline::combine(&history, &projection);

        assert_eq!(timeline.years(), (2022..=2033).collect::<Vec<u32>>());
        assert_eq!(timeline.points[2].source, Source::Historical);
        assert_eq!(timeline.points[3].source, Source::Projected);
        assert_eq!(timeline.points[3].labor_force, 169.2);
        // Inputs are untouched
        assert_eq!(history.len(), 3);
        assert_eq!(projection.records.len(), 9);
    }
}
