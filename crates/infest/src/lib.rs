//! Infest: a bounded bug-infestation cellular automaton.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Infest sub-crates, and ships the `infest` command-line binary.
//!
//! # Quick start
//!
//! ```rust
//! use infest::prelude::*;
//!
//! let config = SimulationConfig::from_text("\
//! ....#
//! #..#.
//! #..##
//! ..#..
//! #....
//! ").unwrap();
//! let mut sim = Simulation::new(config).unwrap();
//!
//! // One generation at a time...
//! match sim.step() {
//!     StepOutcome::Advanced { generation, .. } => assert_eq!(generation, Generation(1)),
//!     StepOutcome::CycleFound(_) => unreachable!(),
//! }
//!
//! // ...or straight to the first repeat.
//! let report = sim.run();
//! assert_eq!(report.repeated_key, StateKey(2_129_920));
//! print!("{}", report.final_state);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `infest-core` | `Coord`, `Generation`, `StateKey`, `GridError` |
//! | [`grid`] | `infest-grid` | `GridState`, neighbourhood, text parsing and rendering |
//! | [`engine`] | `infest-engine` | Transition rule and the `Simulation` driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`infest-core`).
pub use infest_core as types;

/// Bitmask grid storage and text I/O (`infest-grid`).
pub use infest_grid as grid;

/// Transition rule and cycle-detecting driver (`infest-engine`).
pub use infest_engine as engine;

/// Common imports for typical Infest usage.
///
/// ```rust
/// use infest::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use infest_core::{Coord, Generation, GridError, StateKey};

    // Grid
    pub use infest_grid::{parse_grid, GridState};

    // Engine
    pub use infest_engine::{
        ConfigError, CycleReport, HaltReason, RunMetrics, Simulation, SimulationConfig,
        SimulationStatus, StepOutcome,
    };
}
