//! 4-connected (N/S/E/W) neighbourhood on a bounded square grid.
//!
//! Edges absorb: a neighbour that would fall outside the grid is omitted,
//! so corners have 2 neighbours, edge cells 3, and interior cells 4.

use infest_core::Coord;
use smallvec::SmallVec;

/// Orthogonal neighbour offsets: south, north, east, west.
pub const ORTHOGONAL_OFFSETS: [Coord; 4] = [
    Coord::new(0, 1),
    Coord::new(0, -1),
    Coord::new(1, 0),
    Coord::new(-1, 0),
];

/// In-bounds orthogonal neighbours of `pos` on a `size`×`size` grid.
///
/// Order follows [`ORTHOGONAL_OFFSETS`]. `pos` itself need not be inside
/// the grid; only the returned neighbours are guaranteed to be. Offsets
/// that would overflow `i32` are dropped like any other outside cell.
///
/// # Examples
///
/// ```
/// use infest_core::Coord;
/// use infest_grid::neighbours;
///
/// assert_eq!(neighbours(Coord::new(0, 0), 5).len(), 2);
/// assert_eq!(neighbours(Coord::new(2, 0), 5).len(), 3);
/// assert_eq!(neighbours(Coord::new(2, 2), 5).len(), 4);
/// ```
pub fn neighbours(pos: Coord, size: u32) -> SmallVec<[Coord; 4]> {
    ORTHOGONAL_OFFSETS
        .iter()
        .filter_map(|&dir| pos.checked_add(dir))
        .filter(|np| np.within_square(size))
        .collect()
}
