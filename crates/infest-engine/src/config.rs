//! Simulation configuration, validation, and error types.
//!
//! [`SimulationConfig`] is the input for constructing a
//! [`Simulation`](crate::Simulation). [`validate()`](SimulationConfig::validate)
//! checks it once at construction; nothing in the generation loop can
//! fail afterwards.

use std::error::Error;
use std::fmt;

use infest_core::GridError;
use infest_grid::{parse_grid, GridState};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while building or validating a [`SimulationConfig`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The initial grid could not be built.
    Grid(GridError),
    /// `seen_capacity` exceeds [`SimulationConfig::MAX_SEEN_CAPACITY`].
    SeenCapacityTooLarge {
        /// The configured capacity.
        configured: usize,
        /// Largest accepted capacity.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "initial grid: {e}"),
            Self::SeenCapacityTooLarge { configured, max } => {
                write!(f, "seen_capacity {configured} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SimulationConfig ───────────────────────────────────────────────

/// Everything needed to start a simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// The generation-0 grid. Its size is fixed for the whole run.
    pub initial: GridState,
    /// Number of state keys to pre-allocate in the seen-set.
    ///
    /// Only a sizing hint: the set grows past it as needed. Default: 256.
    pub seen_capacity: usize,
}

impl SimulationConfig {
    /// Default pre-allocation for the seen-set.
    pub const DEFAULT_SEEN_CAPACITY: usize = 256;

    /// Upper bound on `seen_capacity`, so a bad hint cannot reserve
    /// gigabytes up front.
    pub const MAX_SEEN_CAPACITY: usize = 1 << 24;

    /// Configuration with the default seen-set capacity.
    pub fn new(initial: GridState) -> Self {
        Self {
            initial,
            seen_capacity: Self::DEFAULT_SEEN_CAPACITY,
        }
    }

    /// Parse the initial grid from text (see [`parse_grid`]).
    pub fn from_text(text: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(parse_grid(text)?))
    }

    /// Replace the seen-set capacity hint.
    pub fn with_seen_capacity(mut self, seen_capacity: usize) -> Self {
        self.seen_capacity = seen_capacity;
        self
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seen_capacity > Self::MAX_SEEN_CAPACITY {
            return Err(ConfigError::SeenCapacityTooLarge {
                configured: self.seen_capacity,
                max: Self::MAX_SEEN_CAPACITY,
            });
        }
        Ok(())
    }
}
