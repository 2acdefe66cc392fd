//! `infest` command-line driver.
//!
//! Reads an initial grid, runs it to the first recurring configuration,
//! and prints the initial and final grids plus the final state key.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use infest::prelude::*;
use tracing::{info, Level};

#[derive(Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Initial grid file ('-' reads standard input).
    #[clap(value_parser)]
    input: PathBuf,

    /// Do not print the grids.
    #[clap(short, long, action)]
    quiet: bool,

    /// Raise the log level (info, debug, trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    match run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        return io::read_to_string(io::stdin()).context("reading grid from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("reading grid from {}", path.display()))
}

fn run(cli: &Cli, out: &mut impl Write) -> anyhow::Result<()> {
    let text = read_input(&cli.input)?;
    let config = SimulationConfig::from_text(&text)
        .with_context(|| format!("parsing {}", cli.input.display()))?;
    info!(
        size = config.initial.size(),
        population = config.initial.population(),
        "loaded initial grid"
    );

    let initial = config.initial.clone();
    let mut sim = Simulation::new(config)?;
    let report = sim.run();
    write_report(out, &initial, &report, cli.quiet)?;
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    initial: &GridState,
    report: &CycleReport,
    quiet: bool,
) -> io::Result<()> {
    if !quiet {
        writeln!(out, "{initial}")?;
    }
    writeln!(
        out,
        "Found recurring state at generation {} (first seen at generation {}, period {})",
        report.generation,
        report.first_seen,
        report.period()
    )?;
    if !quiet {
        writeln!(out, "{}", report.final_state)?;
    }
    writeln!(out, "{}", report.repeated_key)?;
    out.flush()
}
