//! Simulation engine for the Infest automaton.
//!
//! Provides the transition [`rule`] that maps one grid to the next and the
//! [`Simulation`] driver that applies it generation by generation until a
//! configuration recurs. The driver is single-threaded and synchronous:
//! every mutating method takes `&mut self` and no background work exists.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod rule;
pub mod simulation;

pub use config::{ConfigError, SimulationConfig};
pub use metrics::RunMetrics;
pub use simulation::{CycleReport, HaltReason, Simulation, SimulationStatus, StepOutcome};
