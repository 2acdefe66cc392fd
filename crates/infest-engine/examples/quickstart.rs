//! Infest Quickstart — evolve a grid by hand, then run to the first repeat.
//!
//! Demonstrates:
//!   1. Parsing a grid from text
//!   2. Stepping a Simulation one generation at a time
//!   3. Running to the recurring configuration and reading the report
//!   4. Resetting and re-running
//!
//! Run with:
//!   cargo run --example quickstart

use infest_engine::{Simulation, SimulationConfig, StepOutcome};

const LAYOUT: &str = "\
....#
#..#.
#..##
..#..
#....
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = SimulationConfig::from_text(LAYOUT)?;
    let mut sim = Simulation::new(config)?;

    println!("Generation 0:\n{}", sim.current());

    // ─── A few generations by hand ──────────────────────────────
    for _ in 0..3 {
        match sim.step() {
            StepOutcome::Advanced { generation, key } => {
                println!("Generation {generation} (key {key}):\n{}", sim.current());
            }
            StepOutcome::CycleFound(report) => {
                println!("repeat already at generation {}", report.generation);
                return Ok(());
            }
        }
    }

    // ─── Straight to the repeat ─────────────────────────────────
    let report = sim.run();
    println!(
        "Generation {} repeats generation {} (period {}):\n{}",
        report.generation,
        report.first_seen,
        report.period(),
        report.final_state
    );
    println!("biodiversity rating: {}", report.repeated_key);
    println!(
        "{} generations, {} distinct states, peak population {}, {} us",
        report.metrics.generations,
        report.metrics.seen_states,
        report.metrics.peak_population,
        report.metrics.total_us
    );

    // ─── Reset ──────────────────────────────────────────────────
    sim.reset();
    assert_eq!(sim.run().repeated_key, report.repeated_key);
    Ok(())
}
