//! Parsing the plain-text grid format.

use crate::grid::GridState;
use crate::render::BUG;
use infest_core::GridError;
use std::str::FromStr;

/// Parse a square grid from text.
///
/// Each non-blank line is one row; `'#'` marks a bug and any other
/// character an empty cell. A trailing `'\r'` on a line is ignored, as are
/// blank lines after the last row. The side length is the number of rows,
/// and every row must have exactly that many characters.
///
/// # Errors
///
/// - [`GridError::EmptyGrid`] if there are no rows.
/// - [`GridError::MalformedGrid`] for a row of the wrong width or a blank
///   line between rows.
/// - [`GridError::SizeTooLarge`] if the grid exceeds the bitmask capacity.
///
/// # Examples
///
/// ```
/// use infest_grid::parse_grid;
///
/// let grid = parse_grid("#.\n.#\n").unwrap();
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid.serialize().bits(), 0b1001);
/// ```
pub fn parse_grid(text: &str) -> Result<GridState, GridError> {
    let mut rows: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    while rows.last().is_some_and(|row| row.is_empty()) {
        rows.pop();
    }
    if rows.is_empty() {
        return Err(GridError::EmptyGrid);
    }

    let cells: Vec<Vec<bool>> = rows
        .iter()
        .map(|row| row.chars().map(|ch| ch == BUG).collect())
        .collect();
    GridState::from_rows(&cells)
}

impl FromStr for GridState {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_grid(s)
    }
}
