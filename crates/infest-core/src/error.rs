//! Error types for grid construction and cell access.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, parsing, or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside `[0, size) x [0, size)`.
    IndexOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Side length of the grid.
        size: u32,
    },
    /// Attempted to construct a grid with zero cells.
    EmptyGrid,
    /// The side length does not fit the bitmask capacity.
    SizeTooLarge {
        /// The requested side length.
        size: u32,
        /// Largest supported side length.
        max: u32,
    },
    /// A raw bitmask has bits set beyond `size * size`.
    BitsOutOfRange {
        /// The rejected bitmask.
        bits: u64,
        /// Side length of the grid.
        size: u32,
    },
    /// The grid text does not describe a square grid.
    MalformedGrid {
        /// 1-based line number where the problem was found.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { coord, size } => {
                write!(f, "coordinate {coord} out of bounds: [0, {size}) x [0, {size})")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::SizeTooLarge { size, max } => {
                write!(f, "grid size {size} exceeds maximum of {max}")
            }
            Self::BitsOutOfRange { bits, size } => {
                write!(f, "bitmask {bits:#x} has bits beyond a {size}x{size} grid")
            }
            Self::MalformedGrid { line, reason } => {
                write!(f, "malformed grid at line {line}: {reason}")
            }
        }
    }
}

impl Error for GridError {}
