//! Presentation-ready output
//!
//! Rounds records the way the calculator's results table shows them and
//! writes them as CSV or a fixed-width text table. Nothing here feeds back
//! into the projection.

use crate::history::{Source, Timeline};
use crate::projection::{SweepOutcome, YearlyRecord};
use serde::Serialize;
use std::io;

/// One rounded table row; field names are the table's column headers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow {
    #[serde(rename = "Year")]
    pub year: u32,
    #[serde(rename = "Civilian_Labor_Force")]
    pub civilian_labor_force: f64,
    #[serde(rename = "Total_Employed")]
    pub total_employed: f64,
    #[serde(rename = "High_Impact_Rate")]
    pub high_impact_rate: String,
    #[serde(rename = "High_Impact_Jobs_Lost")]
    pub high_impact_jobs_lost: f64,
    #[serde(rename = "Moderate_Impact_Rate")]
    pub moderate_impact_rate: String,
    #[serde(rename = "Moderate_Impact_Jobs_Lost")]
    pub moderate_impact_jobs_lost: f64,
    #[serde(rename = "Total_AI_Job_Loss")]
    pub total_ai_job_loss: f64,
    #[serde(rename = "Unemployed")]
    pub unemployed: f64,
    #[serde(rename = "Unemployment_Rate")]
    pub unemployment_rate: String,
}

const HEADERS: [&str; 10] = [
    "Year",
    "Civilian_Labor_Force",
    "Total_Employed",
    "High_Impact_Rate",
    "High_Impact_Jobs_Lost",
    "Moderate_Impact_Rate",
    "Moderate_Impact_Jobs_Lost",
    "Total_AI_Job_Loss",
    "Unemployed",
    "Unemployment_Rate",
];

impl From<&YearlyRecord> for DisplayRow {
    fn from(r: &YearlyRecord) -> Self {
        Self {
            year: r.year,
            civilian_labor_force: round_to(r.labor_force, 1),
            total_employed: round_to(r.total_employed, 1),
            high_impact_rate: format_percent(r.high_impact_rate),
            high_impact_jobs_lost: round_to(r.high_impact_jobs_lost, 2),
            moderate_impact_rate: format_percent(r.moderate_impact_rate),
            moderate_impact_jobs_lost: round_to(r.moderate_impact_jobs_lost, 2),
            total_ai_job_loss: round_to(r.total_ai_job_loss, 2),
            unemployed: round_to(r.unemployed, 2),
            unemployment_rate: format_percent(r.unemployment_rate),
        }
    }
}

impl DisplayRow {
    fn cells(&self) -> [String; 10] {
        [
            self.year.to_string(),
            format!("{:.1}", self.civilian_labor_force),
            format!("{:.1}", self.total_employed),
            self.high_impact_rate.clone(),
            format!("{:.2}", self.high_impact_jobs_lost),
            self.moderate_impact_rate.clone(),
            format!("{:.2}", self.moderate_impact_jobs_lost),
            format!("{:.2}", self.total_ai_job_loss),
            format!("{:.2}", self.unemployed),
            self.unemployment_rate.clone(),
        ]
    }
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Fraction as a one-decimal percentage: 0.0457 -> "4.6%"
pub fn format_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

pub fn display_rows(records: &[YearlyRecord]) -> Vec<DisplayRow> {
    records.iter().map(DisplayRow::from).collect()
}

/// Write the rounded table as CSV with a header row
pub fn write_csv<W: io::Write>(writer: W, records: &[YearlyRecord]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in display_rows(records) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Fixed-width text table, right-aligned, one line per year
pub fn render_table(records: &[YearlyRecord]) -> String {
    let rows: Vec<[String; 10]> = display_rows(records).iter().map(DisplayRow::cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS.iter(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter(), &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: impl Iterator<Item = S>, widths: &[usize]) {
    let parts: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{:>w$}", cell.as_ref(), w = w))
        .collect();
    out.push_str(&parts.join("  "));
    out.push('\n');
}

const TIMELINE_HEADERS: [&str; 5] = [
    "Year",
    "Civilian_Labor_Force",
    "Total_Employed",
    "Unemployment_Rate",
    "Source",
];

/// Historical and projected years as one fixed-width table, rounded like `render_table`
pub fn render_timeline(timeline: &Timeline) -> String {
    let rows: Vec<[String; 5]> = timeline
        .points
        .iter()
        .map(|p| {
            [
                p.year.to_string(),
                format!("{:.1}", round_to(p.labor_force, 1)),
                format!("{:.1}", round_to(p.total_employed, 1)),
                format_percent(p.unemployment_rate),
                match p.source {
                    Source::Historical => "historical".to_string(),
                    Source::Projected => "projected".to_string(),
                },
            ]
        })
        .collect();

    let mut widths = TIMELINE_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, TIMELINE_HEADERS.iter(), &widths);
    for row in &rows {
        push_line(&mut out, row.iter(), &widths);
    }
    out
}

/// Sweep summaries as CSV, one row per scenario, failures included
pub fn write_sweep_csv<W: io::Write>(writer: W, outcomes: &[SweepOutcome]) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record([
        "high_rate_change",
        "moderate_rate_change",
        "peak_unemployment_rate",
        "peak_year",
        "final_unemployment_rate",
        "cumulative_ai_job_loss",
        "error",
    ])?;

    for outcome in outcomes {
        let inputs = &outcome.inputs;
        let record = match &outcome.summary {
            Ok(s) => [
                inputs.high_rate_change.to_string(),
                inputs.moderate_rate_change.to_string(),
                format!("{:.6}", s.peak_unemployment_rate),
                s.peak_year.to_string(),
                format!("{:.6}", s.final_unemployment_rate),
                format!("{:.4}", s.cumulative_ai_job_loss),
                String::new(),
            ],
            Err(e) => [
                inputs.high_rate_change.to_string(),
                inputs.moderate_rate_change.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                e.clone(),
            ],
        };
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::scenario::ScenarioInputs;

    #[test]
    fn test_rounding() {
        assert_eq!(round_to(169.24, 1), 169.2);
        assert_eq!(round_to(1.2386, 2), 1.24);
        assert_eq!(format_percent(0.05), "5.0%");
        assert_eq!(format_percent(0.0457364), "4.6%");
        assert_eq!(format_percent(1.0), "100.0%");
    }

    #[test]
    fn test_display_row() {
        let result = project(&ScenarioInputs::default()).expect("projects");
        let row = DisplayRow::from(&result.records[0]);

        assert_eq!(row.year, 2025);
        assert_eq!(row.civilian_labor_force, 169.2);
        assert_eq!(row.high_impact_rate, "5.0%");
        assert_eq!(row.moderate_impact_rate, "2.5%");
        assert_eq!(row.high_impact_jobs_lost, 1.14);
        assert_eq!(row.total_ai_job_loss, 1.26);
        assert_eq!(row.unemployed, 7.76);
        assert_eq!(row.unemployment_rate, "4.6%");
    }

    #[test]
    fn test_csv_output() {
        let result = project(&ScenarioInputs::default()).expect("projects");
        let mut buf = Vec::new();
        write_csv(&mut buf, &result.records).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some(HEADERS.join(",").as_str()));
        assert!(lines.next().unwrap_or_default().starts_with("2025,169.2,162.7,5.0%,1.14,"));
        assert_eq!(text.lines().count(), 10);
    }

    #[test]
    fn test_table_alignment() {
        let result = project(&ScenarioInputs::default()).expect("projects");
        let table = render_table(&result.records);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 10);
        assert!(lines[0].trim_start().starts_with("Year"));
        assert!(lines[1].trim_start().starts_with("2025"));
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_timeline_table() {
        use crate::history::load_history_from_reader;
        use crate::scenario::RateConvention;

        let csv = "Year,Civilian_Labor_Force,Total_Employed,Unemployment_Rate\n2024,168.14,161.26,4.04\n";
        let history = load_history_from_reader(csv.as_bytes(), RateConvention::Percent)
            .expect("valid history");
        let projection = project(&ScenarioInputs::default()).expect("projects");
        let table = render_timeline(&Timeline::combine(&history, &projection));
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
        assert!(!table.contains(','));

        let header: Vec<&str> = lines[0].split_whitespace().collect();
        assert_eq!(header, TIMELINE_HEADERS.to_vec());

        let historical: Vec<&str> = lines[1].split_whitespace().collect();
        assert_eq!(historical, vec!["2024", "168.1", "161.3", "4.0%", "historical"]);

        // 2025 unemployment: 7.764 / 169.2
        let projected: Vec<&str> = lines[2].split_whitespace().collect();
        assert_eq!(projected, vec!["2025", "169.2", "162.7", "4.6%", "projected"]);
    }

    #[test]
    fn test_sweep_csv() {
        use crate::projection::{run_sweep, ProjectionEngine};

        let scenarios = vec![
            ScenarioInputs::default(),
            ScenarioInputs { labor_force_growth: -100.0, ..Default::default() },
        ];
        let outcomes = run_sweep(&ProjectionEngine::default(), &scenarios);
        let mut buf = Vec::new();
        write_sweep_csv(&mut buf, &outcomes).expect("write to vec");
        let text = String::from_utf8(buf).expect("utf8");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("high_rate_change,"));
        assert!(lines[2].contains("non-positive labor force"));
    }
}
