//! Strongly-typed counters and keys.

use std::fmt;

/// Number of rule applications since the initial grid.
///
/// The initial grid is generation 0; each step increments it by one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation of the initial grid.
    pub const ZERO: Generation = Generation(0);

    /// The generation after this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Serialized form of a grid configuration: the raw occupancy bitmask.
///
/// Bit `y*size + x` is set iff the cell at `(x, y)` holds a bug. For grids
/// of the same size, two configurations are equal iff their keys are equal,
/// so the key doubles as the dedup key for cycle detection.
///
/// Read as a number, the key is also the configuration's "biodiversity
/// rating": each bug contributes `2^index`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StateKey(pub u64);

impl StateKey {
    /// The raw bitmask.
    pub fn bits(self) -> u64 {
        self.0
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for StateKey {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
