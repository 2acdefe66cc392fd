//! The [`Coord`] grid position type.

use std::fmt;
use std::ops::Add;

/// A position on the grid: `x` is the column, `y` is the row.
///
/// Both components are zero-based. `Coord` is a plain value; offsets such
/// as `(-1, 0)` are also expressed as coordinates and combined with
/// [`add`](Coord::add).
///
/// # Examples
///
/// ```
/// use infest_core::Coord;
///
/// let p = Coord::new(0, 3) + Coord::new(-1, 0);
/// assert_eq!(p, Coord::new(-1, 3));
/// assert!(p.lower_any(Coord::ORIGIN));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Coord {
    /// The top-left cell, `(0, 0)`.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise sum.
    #[allow(clippy::should_implement_trait)]
    pub const fn add(self, other: Coord) -> Coord {
        Coord {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Componentwise sum, or `None` if either axis overflows `i32`.
    pub const fn checked_add(self, other: Coord) -> Option<Coord> {
        match (self.x.checked_add(other.x), self.y.checked_add(other.y)) {
            (Some(x), Some(y)) => Some(Coord { x, y }),
            _ => None,
        }
    }

    /// `true` if *either* component is strictly below the matching
    /// component of `other`.
    ///
    /// This is an OR, not an AND: `(-1, 2).lower_any((0, 0))` holds even
    /// though `2 >= 0`.
    pub const fn lower_any(self, other: Coord) -> bool {
        self.x < other.x || self.y < other.y
    }

    /// `true` if *either* component is strictly above the matching
    /// component of `other`.
    pub const fn greater_any(self, other: Coord) -> bool {
        self.x > other.x || self.y > other.y
    }

    /// Whether this coordinate lies in `[0, size-1] x [0, size-1]`.
    ///
    /// Built from the two OR predicates: a point is inside iff it is
    /// neither lower than the origin nor greater than the far corner on
    /// any axis.
    pub fn within_square(self, size: u32) -> bool {
        let far = size as i64 - 1;
        if far < 0 {
            return false;
        }
        let far = Coord::new(far as i32, far as i32);
        !self.lower_any(Coord::ORIGIN) && !self.greater_any(far)
    }
}

impl Add for Coord {
    type Output = Coord;

    fn add(self, rhs: Coord) -> Coord {
        Coord::add(self, rhs)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn add_is_componentwise() {
        assert_eq!(Coord::new(2, 3).add(Coord::new(-1, 4)), Coord::new(1, 7));
        assert_eq!(Coord::new(2, 3) + Coord::ORIGIN, Coord::new(2, 3));
    }

    #[test]
    fn checked_add_reports_overflow() {
        assert_eq!(
            Coord::new(2, 3).checked_add(Coord::new(-1, 4)),
            Some(Coord::new(1, 7))
        );
        assert_eq!(Coord::new(i32::MAX, 0).checked_add(Coord::new(1, 0)), None);
        assert_eq!(Coord::new(0, i32::MIN).checked_add(Coord::new(0, -1)), None);
        assert_eq!(
            Coord::new(i32::MAX, 0).checked_add(Coord::new(-1, 0)),
            Some(Coord::new(i32::MAX - 1, 0))
        );
    }

    #[test]
    fn lower_any_is_or_combined() {
        let origin = Coord::ORIGIN;
        assert!(Coord::new(-1, 2).lower_any(origin));
        assert!(Coord::new(2, -1).lower_any(origin));
        assert!(Coord::new(-1, -1).lower_any(origin));
        assert!(!Coord::new(0, 0).lower_any(origin));
        assert!(!Coord::new(3, 0).lower_any(origin));
    }

    #[test]
    fn greater_any_is_or_combined() {
        let corner = Coord::new(4, 4);
        assert!(Coord::new(5, 0).greater_any(corner));
        assert!(Coord::new(0, 5).greater_any(corner));
        assert!(!Coord::new(4, 4).greater_any(corner));
        assert!(!Coord::new(-3, 2).greater_any(corner));
    }

    #[test]
    fn within_square_edges() {
        assert!(Coord::new(0, 0).within_square(5));
        assert!(Coord::new(4, 4).within_square(5));
        assert!(!Coord::new(5, 4).within_square(5));
        assert!(!Coord::new(4, -1).within_square(5));
        assert!(!Coord::new(0, 0).within_square(0));
    }

    #[test]
    fn display_format() {
        assert_eq!(Coord::new(3, -2).to_string(), "(3, -2)");
    }

    proptest! {
        #[test]
        fn within_square_matches_range_check(x in -3i32..10, y in -3i32..10, size in 1u32..8) {
            let expected = x >= 0 && y >= 0 && x < size as i32 && y < size as i32;
            prop_assert_eq!(Coord::new(x, y).within_square(size), expected);
        }
    }
}
