//! Test fixtures for Infest development.
//!
//! Provides the reference grids used throughout the workspace tests and
//! benches, plus small helpers for building grids from text without
//! repeating error handling in every test.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

use infest_grid::{parse_grid, GridState};

/// Parse a grid from text, panicking with the parse error on failure.
pub fn grid(text: &str) -> GridState {
    match parse_grid(text) {
        Ok(g) => g,
        Err(e) => panic!("fixture grid failed to parse: {e}\n{text}"),
    }
}

/// A `size`×`size` grid with every cell infested.
pub fn full_grid(size: u32) -> GridState {
    let n = size * size;
    let bits = if n >= u64::BITS { u64::MAX } else { (1u64 << n) - 1 };
    match GridState::from_bits(size, bits) {
        Ok(g) => g,
        Err(e) => panic!("full_grid({size}): {e}"),
    }
}
