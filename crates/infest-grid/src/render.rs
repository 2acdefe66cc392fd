//! Text rendering of a [`GridState`].

use crate::grid::GridState;
use std::fmt;

/// Character for a cell holding a bug.
pub const BUG: char = '#';
/// Character for an empty cell.
pub const EMPTY: char = '.';

impl GridState {
    /// Render the grid as `size` lines of `size` characters.
    ///
    /// Bugs are `'#'`, empty cells `'.'`, and every line ends in `'\n'`.
    /// Bits are read low-bit first from a copy of the mask, so bit 0 is
    /// the top-left character.
    ///
    /// # Examples
    ///
    /// ```
    /// use infest_grid::GridState;
    ///
    /// let grid = GridState::from_bits(3, 0b100_010_001).unwrap();
    /// assert_eq!(grid.render(), "#..\n.#.\n..#\n");
    /// ```
    pub fn render(&self) -> String {
        let size = self.size() as usize;
        let mut out = String::with_capacity(size * (size + 1));
        let mut mask = self.serialize().bits();
        for _ in 0..size {
            for _ in 0..size {
                out.push(if mask & 1 == 1 { BUG } else { EMPTY });
                mask >>= 1;
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infest_core::Coord;

    #[test]
    fn empty_grid_renders_dots() {
        let g = GridState::new(2).unwrap();
        assert_eq!(g.render(), "..\n..\n");
    }

    #[test]
    fn bit_zero_is_top_left() {
        let g = GridState::from_bits(5, 1).unwrap();
        assert_eq!(g.render(), "#....\n.....\n.....\n.....\n.....\n");
    }

    #[test]
    fn last_bit_is_bottom_right() {
        let g = GridState::from_bits(5, 1 << 24).unwrap();
        assert!(g.render().ends_with("....#\n"));
    }

    #[test]
    fn render_does_not_consume_state() {
        let mut g = GridState::new(5).unwrap();
        g.set(Coord::new(2, 3), true).unwrap();
        let first = g.render();
        assert_eq!(first, g.render());
        assert!(g.get(Coord::new(2, 3)).unwrap());
    }

    #[test]
    fn display_matches_render() {
        let g = GridState::from_bits(8, u64::MAX).unwrap();
        assert_eq!(g.to_string(), g.render());
        assert_eq!(g.render().lines().count(), 8);
        assert!(g.render().lines().all(|l| l == "########"));
    }
}
