//! The bug transition rule.
//!
//! Every cell updates simultaneously from the previous generation:
//! - a bug survives iff exactly one orthogonal neighbour holds a bug;
//! - an empty cell becomes infested iff one or two neighbours hold a bug.

use infest_grid::GridState;

/// Next state of a single cell given its current state and bug-neighbour count.
pub fn next_cell(alive: bool, adjacent: u8) -> bool {
    if alive {
        adjacent == 1
    } else {
        adjacent == 1 || adjacent == 2
    }
}

/// Compute the next generation of `current`.
///
/// Reads exclusively from `current` and writes into a freshly allocated
/// grid of the same size, so the update order of cells never matters.
pub fn step(current: &GridState) -> GridState {
    current.map_cells(|pos, alive| next_cell(alive, current.count_adjacent(pos)))
}
