//! Cycle-detecting simulation driver.
//!
//! [`Simulation`] owns the current [`GridState`] and the set of every
//! state key observed so far. Each [`step()`](Simulation::step) computes
//! one generation; the run halts the first time a generation reproduces
//! an earlier configuration.
//!
//! # State machine
//!
//! ```text
//! Running ──step() finds a repeated key──▶ Halted(CycleFound)
//! ```
//!
//! There is no iteration bound and no error state. The loop always
//! terminates because a `size`×`size` grid has at most `2^(size*size)`
//! configurations.
//!
//! # Ownership model
//!
//! Each generation is a new, independently owned grid that replaces the
//! current one. Earlier grids are not retained, only their keys. The
//! key set is insertion-ordered, so a key's index is the generation at
//! which it was first recorded.

use std::time::Instant;

use indexmap::IndexSet;
use infest_core::{Generation, StateKey};
use infest_grid::GridState;
use tracing::{debug, info};

use crate::config::{ConfigError, SimulationConfig};
use crate::metrics::RunMetrics;
use crate::rule;

// Compile-time assertion: Simulation can be moved to another thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Simulation>();
    }
};

// ── Status ──────────────────────────────────────────────────────

/// Why a simulation stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HaltReason {
    /// A generation reproduced a previously recorded configuration.
    CycleFound,
}

/// Lifecycle state of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimulationStatus {
    /// Generations can still be computed.
    Running,
    /// The run is over; further steps return the stored outcome.
    Halted(HaltReason),
}

// ── CycleReport ─────────────────────────────────────────────────

/// Outcome of a run that found a recurring configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// The grid at the halting generation.
    pub final_state: GridState,
    /// The generation that reproduced an earlier configuration.
    pub generation: Generation,
    /// Key of the recurring configuration.
    pub repeated_key: StateKey,
    /// Generation at which `repeated_key` was first recorded.
    ///
    /// Not necessarily `generation - 1`: the cycle may span many steps.
    pub first_seen: Generation,
    /// Metrics accumulated up to and including the halting generation.
    pub metrics: RunMetrics,
}

impl CycleReport {
    /// Length of the cycle in generations.
    pub fn period(&self) -> u64 {
        self.generation.0 - self.first_seen.0
    }
}

/// Result of a single [`Simulation::step()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A new, never-seen configuration was recorded.
    Advanced {
        /// The generation just computed.
        generation: Generation,
        /// Its state key.
        key: StateKey,
    },
    /// The run halted on a recurring configuration.
    CycleFound(CycleReport),
}

// ── Simulation ──────────────────────────────────────────────────

/// Single-threaded driver that evolves a grid until it repeats.
///
/// # Examples
///
/// ```
/// use infest_engine::{Simulation, SimulationConfig};
///
/// let config = SimulationConfig::from_text("\
/// ....#
/// #..#.
/// #..##
/// ..#..
/// #....
/// ").unwrap();
/// let mut sim = Simulation::new(config).unwrap();
/// let report = sim.run();
/// assert_eq!(report.repeated_key.bits(), 2_129_920);
/// assert_eq!(report.generation.0, 86);
/// assert_eq!(report.period(), 12);
/// ```
pub struct Simulation {
    initial: GridState,
    current: GridState,
    generation: Generation,
    seen: IndexSet<StateKey>,
    seen_capacity: usize,
    halted: Option<CycleReport>,
    metrics: RunMetrics,
}

impl Simulation {
    /// Create a simulation at generation 0.
    ///
    /// Validates `config` and records the initial grid's key before any
    /// step, so a grid that maps to itself is caught at generation 1.
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut sim = Self {
            current: config.initial.clone(),
            initial: config.initial,
            generation: Generation::ZERO,
            seen: IndexSet::new(),
            seen_capacity: config.seen_capacity,
            halted: None,
            metrics: RunMetrics::default(),
        };
        sim.reset();
        Ok(sim)
    }

    /// Compute one generation.
    ///
    /// Once halted, returns the stored [`StepOutcome::CycleFound`] without
    /// advancing.
    pub fn step(&mut self) -> StepOutcome {
        if let Some(report) = &self.halted {
            return StepOutcome::CycleFound(report.clone());
        }

        let start = Instant::now();
        let next = rule::step(&self.current);
        let key = next.serialize();
        let population = next.population();
        self.current = next;
        self.generation = self.generation.next();

        self.metrics.generations += 1;
        self.metrics.peak_population = self.metrics.peak_population.max(population);
        let (index, inserted) = self.seen.insert_full(key);
        self.metrics.seen_states = self.seen.len();
        self.metrics.total_us += start.elapsed().as_micros() as u64;

        if inserted {
            debug!(
                generation = self.generation.0,
                key = key.0,
                population,
                "generation advanced"
            );
            return StepOutcome::Advanced {
                generation: self.generation,
                key,
            };
        }

        let report = CycleReport {
            final_state: self.current.clone(),
            generation: self.generation,
            repeated_key: key,
            first_seen: Generation(index as u64),
            metrics: self.metrics.clone(),
        };
        info!(
            generation = report.generation.0,
            first_seen = report.first_seen.0,
            period = report.period(),
            key = key.0,
            "recurring state found"
        );
        self.halted = Some(report.clone());
        StepOutcome::CycleFound(report)
    }

    /// Step until a configuration recurs and return the report.
    pub fn run(&mut self) -> CycleReport {
        loop {
            if let StepOutcome::CycleFound(report) = self.step() {
                return report;
            }
        }
    }

    /// Return to generation 0 with the configured initial grid.
    ///
    /// Clears the seen-set and metrics, then records the initial key.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.generation = Generation::ZERO;
        self.halted = None;
        self.seen = IndexSet::with_capacity(self.seen_capacity);
        self.seen.insert(self.current.serialize());
        self.metrics = RunMetrics {
            seen_states: 1,
            peak_population: self.current.population(),
            ..RunMetrics::default()
        };
    }

    /// The grid at the current generation.
    pub fn current(&self) -> &GridState {
        &self.current
    }

    /// The current generation (0 after construction or reset).
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Whether the simulation is still running.
    pub fn status(&self) -> SimulationStatus {
        match self.halted {
            Some(_) => SimulationStatus::Halted(HaltReason::CycleFound),
            None => SimulationStatus::Running,
        }
    }

    /// Number of distinct configurations recorded.
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Whether `key` has been recorded.
    pub fn has_seen(&self, key: StateKey) -> bool {
        self.seen.contains(&key)
    }

    /// Generation at which `key` was first recorded, if ever.
    pub fn first_seen(&self, key: StateKey) -> Option<Generation> {
        self.seen.get_index_of(&key).map(|i| Generation(i as u64))
    }

    /// Metrics accumulated since construction or the last reset.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("generation", &self.generation)
            .field("size", &self.current.size())
            .field("seen", &self.seen.len())
            .field("status", &self.status())
            .finish()
    }
}
