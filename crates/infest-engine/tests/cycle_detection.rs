//! Integration tests: cycle detection over many starting grids.
//!
//! Checks the run-level guarantees of the driver: every run halts within
//! the size of the state space, and the reported repeat really is a
//! configuration recorded at `first_seen`.

use infest_core::{Generation, StateKey};
use infest_engine::{rule, Simulation, SimulationConfig, SimulationStatus, StepOutcome};
use infest_grid::GridState;
use proptest::prelude::*;

fn run_from(bits: u64, size: u32) -> (Simulation, infest_engine::CycleReport) {
    let initial = GridState::from_bits(size, bits).unwrap();
    let mut sim = Simulation::new(SimulationConfig::new(initial)).unwrap();
    let report = sim.run();
    (sim, report)
}

/// Recompute the key of generation `g` from scratch.
fn key_at(initial: &GridState, g: Generation) -> StateKey {
    let mut grid = initial.clone();
    for _ in 0..g.0 {
        grid = rule::step(&grid);
    }
    grid.serialize()
}

#[test]
fn every_3x3_grid_halts_on_a_true_repeat() {
    for bits in 0u64..(1 << 9) {
        let (sim, report) = run_from(bits, 3);
        let initial = GridState::from_bits(3, bits).unwrap();

        assert!(report.generation.0 <= 1 << 9, "bits {bits:#b} ran too long");
        assert!(report.first_seen < report.generation);
        assert_eq!(key_at(&initial, report.first_seen), report.repeated_key);
        assert_eq!(key_at(&initial, report.generation), report.repeated_key);
        assert_eq!(sim.status(), SimulationStatus::Halted(infest_engine::HaltReason::CycleFound));
        assert_eq!(sim.seen_count() as u64, report.generation.0);
    }
}

#[test]
fn every_generation_before_the_repeat_is_distinct() {
    let initial = GridState::from_bits(4, 0b1001_0110_0000_1111).unwrap();
    let mut sim = Simulation::new(SimulationConfig::new(initial.clone())).unwrap();
    let mut keys = vec![initial.serialize()];
    loop {
        match sim.step() {
            StepOutcome::Advanced { generation, key } => {
                assert_eq!(generation.0 as usize, keys.len());
                assert!(!keys.contains(&key), "generation {generation} repeated early");
                keys.push(key);
            }
            StepOutcome::CycleFound(report) => {
                assert_eq!(keys[report.first_seen.0 as usize], report.repeated_key);
                assert_eq!(report.generation.0 as usize, keys.len());
                break;
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn size_5_runs_halt_on_recorded_key(bits in 0u64..(1 << 25)) {
        let (_, report) = run_from(bits, 5);
        let initial = GridState::from_bits(5, bits).unwrap();
        prop_assert!(report.generation.0 <= 1 << 25);
        prop_assert!(report.period() >= 1);
        prop_assert_eq!(key_at(&initial, report.first_seen), report.repeated_key);
        prop_assert_eq!(report.final_state.serialize(), report.repeated_key);
    }

    #[test]
    fn runs_are_deterministic(bits in 0u64..(1 << 16)) {
        let (_, a) = run_from(bits, 4);
        let (_, b) = run_from(bits, 4);
        prop_assert_eq!(a.generation, b.generation);
        prop_assert_eq!(a.first_seen, b.first_seen);
        prop_assert_eq!(a.final_state, b.final_state);
    }
}
