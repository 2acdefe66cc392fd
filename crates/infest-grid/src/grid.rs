//! Square occupancy grid packed into a `u64` bitmask.

use crate::neighbourhood;
use infest_core::{Coord, GridError, StateKey};

/// An N×N grid of bug/empty cells stored as a single bitmask.
///
/// Cell `(x, y)` maps to bit `y * size + x`. Capacity is `size * size`
/// bits, so `size` may be at most [`GridState::MAX_SIZE`]. Bits beyond the
/// capacity are never set by any operation.
///
/// Every cell access is bounds-checked: [`get`](GridState::get) and
/// [`set`](GridState::set) reject coordinates outside the grid with
/// [`GridError::IndexOutOfBounds`] instead of touching a neighbouring bit.
///
/// # Examples
///
/// ```
/// use infest_core::Coord;
/// use infest_grid::GridState;
///
/// let mut grid = GridState::new(5).unwrap();
/// grid.set(Coord::new(1, 0), true).unwrap();
/// grid.set(Coord::new(0, 1), true).unwrap();
/// assert_eq!(grid.count_adjacent(Coord::new(0, 0)), 2);
/// assert_eq!(grid.serialize().bits(), 0b10_0010);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridState {
    size: u32,
    state: u64,
}

impl GridState {
    /// Largest supported side length: `8 * 8` cells fill the `u64` mask.
    pub const MAX_SIZE: u32 = 8;

    /// Create an empty `size`×`size` grid.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if `size` is 0, or
    /// `Err(GridError::SizeTooLarge)` if it exceeds [`MAX_SIZE`](Self::MAX_SIZE).
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::EmptyGrid);
        }
        if size > Self::MAX_SIZE {
            return Err(GridError::SizeTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size, state: 0 })
    }

    /// Create a grid from a raw bitmask.
    ///
    /// Rejects masks with bits at or beyond `size * size`.
    pub fn from_bits(size: u32, bits: u64) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        if bits & !grid.capacity_mask() != 0 {
            return Err(GridError::BitsOutOfRange { bits, size });
        }
        grid.state = bits;
        Ok(grid)
    }

    /// Create a grid from rows of cells; the row count is the side length.
    ///
    /// Every row must have exactly as many cells as there are rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = u32::try_from(rows.len()).map_err(|_| GridError::SizeTooLarge {
            size: u32::MAX,
            max: Self::MAX_SIZE,
        })?;
        let mut grid = Self::new(size)?;
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != rows.len() {
                return Err(GridError::MalformedGrid {
                    line: y + 1,
                    reason: format!("expected {} columns, got {}", rows.len(), row.len()),
                });
            }
            for (x, &bug) in row.iter().enumerate() {
                grid.set(Coord::new(x as i32, y as i32), bug)?;
            }
        }
        Ok(grid)
    }

    /// Side length of the grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total number of cells, `size * size`.
    pub fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Coord) -> bool {
        pos.within_square(self.size)
    }

    /// Number of cells holding a bug.
    pub fn population(&self) -> u32 {
        self.state.count_ones()
    }

    /// `true` if no cell holds a bug.
    pub fn is_empty(&self) -> bool {
        self.state == 0
    }

    /// Set or clear the bug at `pos`.
    ///
    /// On `Err(GridError::IndexOutOfBounds)` the grid is left unchanged.
    pub fn set(&mut self, pos: Coord, value: bool) -> Result<(), GridError> {
        let bit = self.checked_bit(pos)?;
        if value {
            self.state |= 1 << bit;
        } else {
            self.state &= !(1 << bit);
        }
        Ok(())
    }

    /// Whether the cell at `pos` holds a bug.
    pub fn get(&self, pos: Coord) -> Result<bool, GridError> {
        let bit = self.checked_bit(pos)?;
        Ok(self.bit(bit))
    }

    /// Count bugs among the orthogonal neighbours of `pos` (0–4).
    ///
    /// Diagonals are never counted, and neighbours outside the grid are
    /// skipped rather than wrapped.
    pub fn count_adjacent(&self, pos: Coord) -> u8 {
        neighbourhood::neighbours(pos, self.size)
            .into_iter()
            .filter(|&np| self.bit(self.bit_index(np)))
            .count() as u8
    }

    /// The raw bitmask as a [`StateKey`].
    pub fn serialize(&self) -> StateKey {
        StateKey(self.state)
    }

    /// An empty grid of the same size.
    pub fn empty_like(&self) -> GridState {
        GridState {
            size: self.size,
            state: 0,
        }
    }

    /// Build a new grid of the same size by evaluating `f` for every cell.
    ///
    /// `f` receives each coordinate and whether it currently holds a bug,
    /// and returns whether the new grid should hold a bug there. `self` is
    /// only read, so `f` may inspect it freely while the new grid is
    /// being filled.
    pub fn map_cells(&self, mut f: impl FnMut(Coord, bool) -> bool) -> GridState {
        let mut next = self.empty_like();
        for (bit, pos) in self.coords().enumerate() {
            let bit = bit as u32;
            if f(pos, self.bit(bit)) {
                next.state |= 1 << bit;
            }
        }
        next
    }

    /// All in-grid coordinates in row-major (bit) order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = self.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }

    /// Mask with one bit set for every cell of the grid.
    pub(crate) fn capacity_mask(&self) -> u64 {
        let n = self.cell_count() as u32;
        if n >= u64::BITS {
            u64::MAX
        } else {
            (1u64 << n) - 1
        }
    }

    /// Bit index of an in-grid coordinate. Callers guarantee the bounds.
    fn bit_index(&self, pos: Coord) -> u32 {
        pos.y as u32 * self.size + pos.x as u32
    }

    fn checked_bit(&self, pos: Coord) -> Result<u32, GridError> {
        if !self.contains(pos) {
            return Err(GridError::IndexOutOfBounds {
                coord: pos,
                size: self.size,
            });
        }
        Ok(self.bit_index(pos))
    }

    fn bit(&self, bit: u32) -> bool {
        (self.state >> bit) & 1 == 1
    }
}
