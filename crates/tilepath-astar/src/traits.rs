use tilepath_core::Point;

use crate::distance::manhattan;

/// Cost estimate between two cells, used to rank the open set.
///
/// Must never overestimate the true number of steps (admissible) for the
/// search to return shortest paths. Any `Fn(Point, Point) -> i32` closure
/// is a heuristic.
pub trait Heuristic {
    /// Estimated cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32;
}

/// Manhattan distance, exact on an open 4-connected grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}

/// Always zero. Turns A* into Dijkstra's algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Point, _to: Point) -> i32 {
        0
    }
}

impl<F> Heuristic for F
where
    F: Fn(Point, Point) -> i32,
{
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> i32 {
        self(from, to)
    }
}
