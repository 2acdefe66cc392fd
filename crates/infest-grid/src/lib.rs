//! Grid storage for Infest simulations.
//!
//! This crate defines [`GridState`] — an N×N occupancy grid packed into a
//! single `u64` bitmask — along with the fixed orthogonal neighbourhood
//! used by the transition rule and the plain-text grid format.
//!
//! # Layout
//!
//! Cell `(x, y)` lives at bit `y * size + x`. Bit 0 is the top-left cell;
//! bits run left-to-right, then top-to-bottom. Bits at or beyond
//! `size * size` are always zero.
//!
//! # Text format
//!
//! One line per row, `'#'` for a bug and any other character for an empty
//! cell. See [`parse_grid`] and [`GridState::render`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbourhood;
pub mod parse;
pub mod render;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::GridState;
pub use neighbourhood::{neighbours, ORTHOGONAL_OFFSETS};
pub use parse::parse_grid;
