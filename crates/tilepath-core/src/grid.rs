//! A rectangular grid of walkable and blocked [`Cell`]s.
//!
//! Grids are built once from an external walkability source: integer flag
//! arrays (`0` = walkable, anything else = blocked), boolean arrays, or an
//! ASCII map. Arrays are indexed `[x][y]`: entry `j` of inner slice `i`
//! becomes the cell at `Point { x: i, y: j }`. ASCII maps are read the way
//! they look, one text line per `y`.

use std::fmt;

use crate::cell::Cell;
use crate::geom::{Point, Range};

/// Errors that can occur when building a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input has no entries, or its first inner slice (or line) is empty.
    Empty,
    /// An inner slice (or map line) has a different length than the first.
    Ragged {
        index: usize,
        expected: usize,
        found: usize,
    },
    /// An ASCII map contains a character other than `#` or `.`.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: input is empty"),
            Self::Ragged {
                index,
                expected,
                found,
            } => write!(
                f,
                "grid: line {index} has {found} cells, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid map character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A fixed-size 2D grid of [`Cell`]s, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Build a grid from integer flags indexed `[x][y]`: `0` is walkable,
    /// any other value is blocked. The outer length is the width.
    ///
    /// ```
    /// use tilepath_core::{Grid, Point};
    ///
    /// let g = Grid::from_flags(&[[1, 1, 1, 1], [1, 0, 0, 1], [1, 1, 1, 1]]).unwrap();
    /// assert_eq!(g.size(), Point::new(3, 4));
    /// assert!(g.is_walkable(Point::new(1, 2)));
    /// assert!(!g.is_walkable(Point::new(0, 1)));
    /// ```
    pub fn from_flags<C: AsRef<[i32]>>(columns: &[C]) -> Result<Self, GridError> {
        let (width, height) = dimensions(columns)?;
        Ok(Self::build(width, height, |x, y| columns[x].as_ref()[y] == 0))
    }

    /// Build a grid from booleans indexed `[x][y]`, `true` meaning walkable.
    pub fn from_walkable<C: AsRef<[bool]>>(columns: &[C]) -> Result<Self, GridError> {
        let (width, height) = dimensions(columns)?;
        Ok(Self::build(width, height, |x, y| columns[x].as_ref()[y]))
    }

    /// Parse an ASCII map: `#` is blocked, `.` is walkable. Each line is one
    /// row, so the character at column `c` of line `r` is `Point { x: c, y: r }`.
    ///
    /// Blank lines around the map and leading/trailing whitespace on each
    /// line are ignored. All lines must have the same width.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect();
        let end = lines
            .iter()
            .rposition(|l| !l.is_empty())
            .map_or(0, |i| i + 1);

        let mut rows = Vec::with_capacity(end);
        for (y, line) in lines[..end].iter().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, ch)| match ch {
                    '.' => Ok(true),
                    '#' => Ok(false),
                    _ => Err(GridError::InvalidChar {
                        ch,
                        pos: Point::new(x as i32, y as i32),
                    }),
                })
                .collect::<Result<Vec<bool>, _>>()?;
            rows.push(row);
        }
        let (height, width) = dimensions(&rows)?;
        Ok(Self::build(width, height, |x, y| rows[y][x]))
    }

    fn build(width: usize, height: usize, walkable: impl Fn(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            cells.extend(
                (0..width).map(|x| Cell::new(Point::new(x as i32, y as i32), walkable(x, y))),
            );
        }
        Self {
            cells,
            width: width as i32,
            height: height as i32,
        }
    }

    /// Bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// The grid with its outermost one-cell ring removed, i.e. every `p`
    /// with `0 < p.x < width - 1` and `0 < p.y < height - 1`. Empty for
    /// grids narrower or shorter than 3.
    #[inline]
    pub fn interior(&self) -> Range {
        self.bounds().shift(1, 1, -1, -1)
    }

    /// Size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y * self.width + p.x) as usize)
    }

    /// Position of the cell at flat index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and walkable.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.cell(p).is_some_and(Cell::is_walkable)
    }

    /// Change the walkability of `p`. Returns `false` if `p` is out of
    /// bounds.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = Cell::new(p, walkable);
                true
            }
            None => false,
        }
    }

    /// Count walkable cells.
    pub fn walkable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_walkable()).count()
    }

    /// Iterate over cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The grid as integer flags indexed `[x][y]` (`0` walkable, `1`
    /// blocked), the inverse of [`Grid::from_flags`].
    pub fn to_flags(&self) -> Vec<Vec<i32>> {
        let w = self.width as usize;
        (0..w)
            .map(|x| self.cells[x..].iter().step_by(w).map(|c| c.flag()).collect())
            .collect()
    }
}

/// Outer and common inner length of a nested array.
fn dimensions<T, R: AsRef<[T]>>(outer: &[R]) -> Result<(usize, usize), GridError> {
    let inner = outer.first().map_or(0, |r| r.as_ref().len());
    if inner == 0 {
        return Err(GridError::Empty);
    }
    for (index, r) in outer.iter().enumerate() {
        let found = r.as_ref().len();
        if found != inner {
            return Err(GridError::Ragged {
                index,
                expected: inner,
                found,
            });
        }
    }
    Ok((outer.len(), inner))
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl std::str::FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Grid {
    /// Render as an ASCII map, the inverse of [`Grid::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.width as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", if c.is_walkable() { '.' } else { '#' })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_flags(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let columns: Vec<Vec<i32>> = serde::Deserialize::deserialize(deserializer)?;
        Grid::from_flags(&columns).map_err(serde::de::Error::custom)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let g = Grid::parse("###\n#.#\n###").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, "[[1,1,1],[1,0,1],[1,1,1]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn ragged_json_rejected() {
        let res: Result<Grid, _> = serde_json::from_str("[[0,0],[0]]");
        assert!(res.is_err());
    }
}
