use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod error;
mod interactive;
mod report;

use error::CliResult;
use mn_network::{Load, MatchRequest, solve};
use mn_project::{CaseResult, run_job};
use report::{PrintOptions, write_report};

#[derive(Parser)]
#[command(name = "mn-cli")]
#[command(about = "matchnet CLI - L-section impedance matching calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize matching networks for one load
    Solve {
        /// Load resistance RL in ohms
        #[arg(long)]
        rl: f64,
        /// Load reactance XL in ohms
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        xl: f64,
        /// Reference impedance Z0 in ohms
        #[arg(long, default_value_t = 50.0)]
        z0: f64,
        /// Operating frequency in hertz
        #[arg(short, long)]
        freq: f64,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Skip the circuit diagrams
        #[arg(long)]
        no_schematic: bool,
        /// Rebuild each network and print the impedance it presents
        #[arg(long)]
        verify: bool,
    },
    /// Solve every case of a YAML or JSON job file
    Batch {
        /// Path to the job file
        job_path: PathBuf,
        /// Print the results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prompt for loads until `z` is entered
    Interactive,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            rl,
            xl,
            z0,
            freq,
            json,
            no_schematic,
            verify,
        } => {
            let opts = PrintOptions {
                schematic: !no_schematic,
                verify,
            };
            cmd_solve(MatchRequest::from_si(rl, xl, z0, freq), json, opts)
        }
        Commands::Batch { job_path, json } => cmd_batch(&job_path, json),
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout();
            interactive::run(&mut input, &mut out)?;
            Ok(())
        }
    }
}

fn describe(load: &Load, z0: f64, f: f64) -> String {
    format!(
        "ZL = {} {:+}j ohm, Z0 = {} ohm, f = {} Hz",
        load.resistance_ohm, load.reactance_ohm, z0, f
    )
}

fn cmd_solve(request: MatchRequest, json: bool, opts: PrintOptions) -> CliResult<()> {
    let report = solve(&request)?;
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        return Ok(());
    }

    writeln!(
        out,
        "{}",
        describe(&report.load, report.reference_ohm, report.frequency_hz)
    )?;
    writeln!(out, "{}", mn_network::schematic::SEPARATOR)?;
    write_report(&mut out, &report, opts)?;
    Ok(())
}

fn cmd_batch(job_path: &Path, json: bool) -> CliResult<()> {
    let job = mn_project::load_any(job_path)?;
    let outcomes = run_job(&job);
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcomes)?)?;
        return Ok(());
    }

    writeln!(out, "Job: {} ({} cases)", job.name, job.cases.len())?;
    for outcome in &outcomes {
        writeln!(out, "\n== {} ==", outcome.id)?;
        match &outcome.result {
            CaseResult::Solved { report } => {
                writeln!(
                    out,
                    "{}",
                    describe(&report.load, report.reference_ohm, report.frequency_hz)
                )?;
                write_report(&mut out, report, PrintOptions::default())?;
            }
            CaseResult::Failed { error } => writeln!(out, "✗ {error}")?,
        }
    }
    Ok(())
}
