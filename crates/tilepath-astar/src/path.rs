use tilepath_core::Point;

/// A shortest path, as reconstructed from parent links.
///
/// Cells are stored goal first. [`Path::iter`] walks them in that order;
/// [`Path::forward`] and [`Path::into_forward`] give start-to-goal order.
/// A path always holds at least one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Path {
    cells: Vec<Point>,
}

impl Path {
    pub(crate) fn from_goal(cells: Vec<Point>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { cells }
    }

    /// Cells from goal to start.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// Last cell of the path.
    #[inline]
    pub fn goal(&self) -> Point {
        self.cells[0]
    }

    /// First cell of the path.
    #[inline]
    pub fn start(&self) -> Point {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, i.e. `len() - 1`.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len() - 1
    }

    /// Whether the path passes through `p`.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    /// Iterate from goal to start.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.cells.iter()
    }

    /// Iterate from start to goal.
    pub fn forward(&self) -> std::iter::Rev<std::slice::Iter<'_, Point>> {
        self.cells.iter().rev()
    }

    /// Consume the path, returning its cells from start to goal.
    pub fn into_forward(mut self) -> Vec<Point> {
        self.cells.reverse();
        self.cells
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = &'static str;

    /// Build a path from cells listed goal first.
    fn try_from(cells: Vec<Point>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err("path must hold at least one cell");
        }
        Ok(Self { cells })
    }
}

impl From<Path> for Vec<Point> {
    /// Cells goal first.
    fn from(p: Path) -> Self {
        p.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_and_counts() {
        let p = Path::from_goal(vec![Point::new(2, 1), Point::new(1, 1), Point::new(1, 2)]);
        assert_eq!(p.goal(), Point::new(2, 1));
        assert_eq!(p.start(), Point::new(1, 2));
        assert_eq!(p.len(), 3);
        assert_eq!(p.steps(), 2);
        assert!(!p.is_empty());
        assert!(p.contains(Point::new(1, 1)));
        let fwd: Vec<Point> = p.forward().copied().collect();
        assert_eq!(fwd, p.clone().into_forward());
        assert_eq!(fwd[0], Point::new(1, 2));
        assert_eq!(p.iter().next(), Some(&Point::new(2, 1)));
    }

    #[test]
    fn single_cell() {
        let p = Path::from_goal(vec![Point::new(3, 3)]);
        assert_eq!(p.start(), p.goal());
        assert_eq!(p.steps(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let p = Path::from_goal(vec![Point::new(3, 1), Point::new(2, 1)]);
        let json = serde_json::to_string(&p).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn empty_path_rejected() {
        let res: Result<Path, _> = serde_json::from_str("[]");
        assert!(res.is_err());
    }
}
