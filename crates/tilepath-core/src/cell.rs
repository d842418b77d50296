//! The [`Cell`] type: one grid position and its walkability.

use crate::geom::Point;

/// A single grid position.
///
/// Position and walkability are fixed when the grid is built. Search costs
/// and parent links are not stored here; the pathfinder keeps them in its
/// own per-search arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    walkable: bool,
}

impl Cell {
    /// Create a cell at `pos`.
    #[inline]
    pub const fn new(pos: Point, walkable: bool) -> Self {
        Self { pos, walkable }
    }

    /// Create a cell from an integer flag: `0` is walkable, anything else
    /// is blocked.
    #[inline]
    pub const fn from_flag(pos: Point, flag: i32) -> Self {
        Self::new(pos, flag == 0)
    }

    /// Grid position.
    #[inline]
    pub const fn pos(self) -> Point {
        self.pos
    }

    /// X coordinate of the position.
    #[inline]
    pub const fn x(self) -> i32 {
        self.pos.x
    }

    /// Y coordinate of the position.
    #[inline]
    pub const fn y(self) -> i32 {
        self.pos.y
    }

    /// Whether a path may step on this cell.
    #[inline]
    pub const fn is_walkable(self) -> bool {
        self.walkable
    }

    /// Opposite of [`is_walkable`](Self::is_walkable).
    #[inline]
    pub const fn is_blocked(self) -> bool {
        !self.walkable
    }

    /// The flag value this cell would have in an integer map.
    #[inline]
    pub const fn flag(self) -> i32 {
        if self.walkable { 0 } else { 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_mapping() {
        let p = Point::new(2, 3);
        assert!(Cell::from_flag(p, 0).is_walkable());
        assert!(Cell::from_flag(p, 1).is_blocked());
        assert!(Cell::from_flag(p, -7).is_blocked());
        assert_eq!(Cell::from_flag(p, 42).flag(), 1);
        assert_eq!(Cell::from_flag(p, 0).flag(), 0);
    }

    #[test]
    fn accessors() {
        let c = Cell::new(Point::new(4, 9), true);
        assert_eq!(c.pos(), Point::new(4, 9));
        assert_eq!((c.x(), c.y()), (4, 9));
    }
}
