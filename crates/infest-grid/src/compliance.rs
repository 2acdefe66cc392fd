//! Grid invariant test helpers.
//!
//! These functions check a [`GridState`] against the invariants every
//! grid must hold regardless of size or contents. Reused across the
//! grid test modules.

use crate::grid::GridState;
use crate::parse::parse_grid;
use infest_core::Coord;
use indexmap::IndexSet;

/// Assert that no bit at or beyond `size * size` is set.
pub fn assert_no_bits_beyond_capacity(grid: &GridState) {
    let bits = grid.serialize().bits();
    assert_eq!(
        bits & !grid.capacity_mask(),
        0,
        "bitmask {bits:#x} has bits beyond a {0}x{0} grid",
        grid.size()
    );
}

/// Assert that `coords()` yields every cell once, in bit order.
pub fn assert_coords_cover_grid(grid: &GridState) {
    let coords: IndexSet<Coord> = grid.coords().collect();
    assert_eq!(coords.len(), grid.cell_count(), "coords() repeated a cell");
    for (i, pos) in coords.iter().enumerate() {
        let expected = Coord::new(
            (i % grid.size() as usize) as i32,
            (i / grid.size() as usize) as i32,
        );
        assert_eq!(*pos, expected, "coords() out of row-major order at {i}");
        assert!(grid.contains(*pos));
    }
}

/// Assert that `get` agrees with the raw bitmask for every cell.
pub fn assert_get_matches_bits(grid: &GridState) {
    let bits = grid.serialize().bits();
    for (i, pos) in grid.coords().enumerate() {
        let expected = (bits >> i) & 1 == 1;
        assert_eq!(grid.get(pos), Ok(expected), "get({pos}) disagrees with bit {i}");
    }
}

/// Assert that `count_adjacent` equals a brute-force orthogonal count.
pub fn assert_count_adjacent_brute_force(grid: &GridState) {
    let size = grid.size() as i32;
    let occupied = |x: i32, y: i32| {
        x >= 0 && y >= 0 && x < size && y < size && grid.get(Coord::new(x, y)) == Ok(true)
    };
    for pos in grid.coords() {
        let expected = [(0, 1), (0, -1), (1, 0), (-1, 0)]
            .iter()
            .filter(|(dx, dy)| occupied(pos.x + dx, pos.y + dy))
            .count() as u8;
        assert_eq!(grid.count_adjacent(pos), expected, "count_adjacent({pos})");
    }
}

/// Assert that the rendering has `size` rows of `size` cells and parses back.
pub fn assert_render_round_trips(grid: &GridState) {
    let text = grid.render();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), grid.size() as usize);
    assert!(rows.iter().all(|r| r.chars().count() == grid.size() as usize));
    assert_eq!(parse_grid(&text).as_ref(), Ok(grid));
}

/// Run every compliance check against `grid`.
pub fn run_full_compliance(grid: &GridState) {
    assert_no_bits_beyond_capacity(grid);
    assert_coords_cover_grid(grid);
    assert_get_matches_bits(grid);
    assert_count_adjacent_brute_force(grid);
    assert_render_round_trips(grid);
}
