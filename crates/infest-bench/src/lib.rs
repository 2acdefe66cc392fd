//! Benchmark profiles for the Infest automaton.
//!
//! Provides deterministic starting grids for benchmarks:
//!
//! - [`reference_profile`]: the 5×5 reference layout (86 generations to repeat)
//! - [`scatter_grid`]: a pseudo-random layout of any supported size

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use infest_core::GridError;
use infest_engine::SimulationConfig;
use infest_grid::GridState;

/// The 5×5 reference layout as a bitmask.
pub const REFERENCE_BITS: u64 = 0b00001_00100_11001_01001_10000;

/// Configuration for the 5×5 reference run.
pub fn reference_profile() -> Result<SimulationConfig, GridError> {
    Ok(SimulationConfig::new(GridState::from_bits(5, REFERENCE_BITS)?))
}

/// Deterministic pseudo-random grid: roughly half the cells infested.
///
/// Uses a fixed LCG seeded by `seed`, so the same arguments always give
/// the same grid.
pub fn scatter_grid(size: u32, seed: u64) -> Result<GridState, GridError> {
    let mut grid = GridState::new(size)?;
    let mut x = seed.wrapping_mul(6364136223846793007).wrapping_add(1442695040888963407);
    let cells: Vec<_> = grid.coords().collect();
    for pos in cells {
        x = x.wrapping_mul(6364136223846793007).wrapping_add(1442695040888963407);
        grid.set(pos, x >> 63 == 1)?;
    }
    Ok(grid)
}
