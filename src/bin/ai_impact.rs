//! Command-line front end for the AI job impact projection
//!
//! `project` runs one scenario and prints a table, CSV or JSON.
//! `sweep` runs a grid of rate-change scenarios in parallel and writes a summary CSV.

use ai_job_impact::history::{load_history, Timeline};
use ai_job_impact::projection::{run_sweep, ProjectionEngine};
use ai_job_impact::report::{render_table, render_timeline, write_csv, write_sweep_csv};
use ai_job_impact::scenario::{JobsUnit, RateConvention, RawScenarioInputs, SweepParams};
use ai_job_impact::BaselineConstants;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ai-impact")]
#[command(about = "Project AI-driven job losses and unemployment, 2025-2033")]
struct Args {
    /// JSON file overriding the 2024 baseline constants
    #[arg(long, global = true)]
    baseline: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project a single scenario
    Project {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Historical CSV to show before the projected years
        #[arg(long)]
        history: Option<PathBuf>,

        /// Historical unemployment rates are percentages (4.0 = 4%)
        #[arg(long)]
        history_percent: bool,
    },

    /// Sweep both rate-change assumptions over a grid
    Sweep {
        #[command(flatten)]
        scenario: ScenarioArgs,

        /// Tier-1 rate change range: start end steps
        #[arg(long, num_args = 3, value_names = ["START", "END", "STEPS"], default_values = ["0.0", "0.5", "6"])]
        high_range: Vec<f64>,

        /// Tier-2 rate change range: start end steps
        #[arg(long, num_args = 3, value_names = ["START", "END", "STEPS"], default_values = ["0.0", "0.5", "6"])]
        moderate_range: Vec<f64>,

        /// Output CSV path (stdout if omitted)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

/// Scenario assumptions; flags override the scenario file, which overrides defaults
#[derive(clap::Args)]
struct ScenarioArgs {
    /// JSON scenario file
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Initial Tier-1 (high impact) job loss rate for 2025
    #[arg(long, allow_negative_numbers = true)]
    high_initial: Option<f64>,

    /// Initial Tier-2 (moderate impact) job loss rate for 2025
    #[arg(long, allow_negative_numbers = true)]
    moderate_initial: Option<f64>,

    /// Annual proportional change of the Tier-1 rate
    #[arg(long, allow_negative_numbers = true)]
    high_change: Option<f64>,

    /// Annual proportional change of the Tier-2 rate
    #[arg(long, allow_negative_numbers = true)]
    moderate_change: Option<f64>,

    /// Labor force growth (millions per year)
    #[arg(long, allow_negative_numbers = true)]
    labor_growth: Option<f64>,

    /// New jobs created per year (millions, or a head count with --jobs-count)
    #[arg(long, allow_negative_numbers = true)]
    new_jobs: Option<f64>,

    /// Rate flags are percentages (5 = 5%)
    #[arg(long)]
    percent: bool,

    /// --new-jobs is a head count (1084000) rather than millions
    #[arg(long)]
    jobs_count: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl ScenarioArgs {
    fn resolve(&self) -> Result<RawScenarioInputs> {
        let mut raw = match &self.scenario {
            Some(path) => RawScenarioInputs::from_json_file(path)
                .with_context(|| format!("loading scenario {}", path.display()))?,
            None => RawScenarioInputs::default(),
        };

        if self.percent {
            raw.rate_convention = RateConvention::Percent;
        }
        if self.jobs_count {
            raw.jobs_unit = JobsUnit::Count;
        }
        if let Some(v) = self.high_initial { raw.high_initial_rate = v; }
        if let Some(v) = self.moderate_initial { raw.moderate_initial_rate = v; }
        if let Some(v) = self.high_change { raw.high_rate_change = v; }
        if let Some(v) = self.moderate_change { raw.moderate_rate_change = v; }
        if let Some(v) = self.labor_growth { raw.labor_force_growth = v; }
        if let Some(v) = self.new_jobs { raw.new_jobs_per_year = v; }

        Ok(raw)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let baseline = match &args.baseline {
        Some(path) => BaselineConstants::from_json_file(path)
            .with_context(|| format!("loading baseline {}", path.display()))?,
        None => BaselineConstants::default(),
    };
    let engine = ProjectionEngine::new(baseline);

    match &args.command {
        Command::Project { scenario, format, history, history_percent } => {
            run_project(&engine, scenario, *format, history.as_ref(), *history_percent)
        }
        Command::Sweep { scenario, high_range, moderate_range, output } => {
            run_sweep_command(&engine, scenario, high_range, moderate_range, output.as_ref())
        }
    }
}

fn run_project(
    engine: &ProjectionEngine,
    scenario: &ScenarioArgs,
    format: OutputFormat,
    history: Option<&PathBuf>,
    history_percent: bool,
) -> Result<()> {
    let inputs = scenario.resolve()?.normalize()?;
    let result = engine.project(&inputs)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = history {
        let convention = if history_percent { RateConvention::Percent } else { RateConvention::Fraction };
        let records = load_history(path, convention)
            .with_context(|| format!("loading history {}", path.display()))?;
        let timeline = Timeline::combine(&records, &result);

        match format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &timeline)?;
                writeln!(out)?;
            }
            OutputFormat::Table => write!(out, "{}", render_timeline(&timeline))?,
            OutputFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(&mut out);
                wtr.write_record(["year", "labor_force", "total_employed", "unemployment_rate", "source"])?;
                for p in &timeline.points {
                    wtr.serialize((p.year, p.labor_force, p.total_employed, p.unemployment_rate, p.source))?;
                }
                wtr.flush()?;
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            write!(out, "{}", render_table(result.records()))?;
            if let Some(peak) = result.peak_unemployment() {
                writeln!(
                    out,
                    "\nPeak unemployment: {:.1}% in {}; cumulative AI job loss {:.2}M",
                    peak.unemployment_rate * 100.0,
                    peak.year,
                    result.cumulative_ai_job_loss()
                )?;
            }
        }
        OutputFormat::Csv => write_csv(&mut out, result.records())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &result)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn run_sweep_command(
    engine: &ProjectionEngine,
    scenario: &ScenarioArgs,
    high_range: &[f64],
    moderate_range: &[f64],
    output: Option<&PathBuf>,
) -> Result<()> {
    let start = Instant::now();
    let base = scenario.resolve()?.normalize()?;

    let params = SweepParams {
        base,
        high_rate_changes: range_values(high_range)?,
        moderate_rate_changes: range_values(moderate_range)?,
    };
    let scenarios = params.generate();
    info!("Generated {} scenarios", scenarios.len());

    let outcomes = run_sweep(engine, &scenarios);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_sweep_csv(file, &outcomes)?;
            println!("Output written to {}", path.display());
        }
        None => write_sweep_csv(io::stdout().lock(), &outcomes)?,
    }

    info!("Total time: {:?}", start.elapsed());
    Ok(())
}

fn range_values(range: &[f64]) -> Result<Vec<f64>> {
    match range {
        [start, end, steps] if *steps >= 0.0 && steps.fract() == 0.0 => {
            Ok(SweepParams::linspace(*start, *end, *steps as usize))
        }
        _ => anyhow::bail!("range must be START END STEPS with a whole, non-negative STEPS"),
    }
}
