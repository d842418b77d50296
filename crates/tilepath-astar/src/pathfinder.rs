use tilepath_core::{Grid, Point, Range};

use crate::config::{Bounds, SearchConfig};
use crate::error::{Endpoint, EndpointReason, PathError};
use crate::path::Path;
use crate::state::{CellState, Nodes, SearchStats};
use crate::traits::{Heuristic, Manhattan};
use crate::PathNode;

/// Owns a [`Grid`] and runs shortest-path searches on it.
///
/// Search scratch space is allocated once per grid and reused, so repeated
/// queries do not allocate beyond the frontier and the returned path. A
/// search needs `&mut self`; run concurrent searches on separate
/// `Pathfinder`s over cloned grids.
///
/// ```
/// use tilepath_astar::Pathfinder;
/// use tilepath_core::{Grid, Point};
///
/// let grid = Grid::parse(
///     "#####
///      #...#
///      #.#.#
///      #...#
///      ######",
/// )
/// .unwrap();
/// let mut pf = Pathfinder::new(grid);
/// let path = pf.find_path(Point::new(1, 1), Point::new(3, 3)).unwrap().unwrap();
/// assert_eq!(path.steps(), 4);
/// assert_eq!(path.goal(), Point::new(3, 3));
/// ```
pub struct Pathfinder<H = Manhattan> {
    pub(crate) grid: Grid,
    pub(crate) heuristic: H,
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Nodes,
    pub(crate) stats: SearchStats,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    last_path: Option<Path>,
}

impl Pathfinder<Manhattan> {
    /// Create a pathfinder using the Manhattan heuristic.
    pub fn new(grid: Grid) -> Self {
        Self::with_heuristic(grid, Manhattan)
    }

    /// Build the grid from integer flags indexed `[x][y]` (`0` walkable,
    /// non-zero blocked) and create a pathfinder for it.
    pub fn from_flags<C: AsRef<[i32]>>(columns: &[C]) -> Result<Self, PathError> {
        Ok(Self::new(Grid::from_flags(columns)?))
    }
}

impl<H: Heuristic> Pathfinder<H> {
    /// Create a pathfinder with a custom heuristic.
    pub fn with_heuristic(grid: Grid, heuristic: H) -> Self {
        let len = grid.len();
        Self {
            grid,
            heuristic,
            config: SearchConfig::default(),
            nodes: Nodes::new(len),
            stats: SearchStats::default(),
            bfs_map: Vec::new(),
            bfs_results: Vec::new(),
            last_path: None,
        }
    }

    /// Replace the configuration (builder).
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Current search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration used by later searches.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// The heuristic in use.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// The grid searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, for editing walkability between
    /// searches. The cached path is dropped since it may no longer be valid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.last_path = None;
        &mut self.grid
    }

    /// Replace the grid, resizing the search arena to match.
    pub fn set_grid(&mut self, grid: Grid) {
        self.nodes = Nodes::new(grid.len());
        self.bfs_map.clear();
        self.bfs_results.clear();
        self.last_path = None;
        self.grid = grid;
    }

    /// Counters from the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search state of `p` as left by the last search, or `None` if `p` is
    /// outside the grid.
    pub fn cell_state(&self, p: Point) -> Option<CellState> {
        let idx = self.grid.index(p)?;
        Some(self.nodes.state(idx, |i| self.grid.point(i)))
    }

    /// Find a path from `(x1, y1)` to `(x2, y2)` and keep it for
    /// [`last_path`](Self::last_path). On error the cached path is cleared.
    pub fn update_path(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
    ) -> Result<Option<&Path>, PathError> {
        self.last_path = None;
        self.last_path = self.find_path(Point::new(x1, y1), Point::new(x2, y2))?;
        Ok(self.last_path.as_ref())
    }

    /// The path stored by the last [`update_path`](Self::update_path), if it
    /// found one.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_ref()
    }

    /// Drop the path stored by [`update_path`](Self::update_path).
    pub fn clear_path(&mut self) {
        self.last_path = None;
    }

    /// Cells a search may step on under the current configuration.
    pub fn region(&self) -> Range {
        match self.config.bounds {
            Bounds::Interior => self.grid.interior(),
            Bounds::Full => self.grid.bounds(),
        }
    }

    /// Whether a search may step on `p`. The bounds are checked before the
    /// cell is read.
    #[inline]
    pub fn is_traversable(&self, p: Point) -> bool {
        self.region().contains(p) && self.grid.is_walkable(p)
    }

    /// Check that `p` can start or end a search; returns its flat index.
    pub(crate) fn endpoint(&self, which: Endpoint, pos: Point) -> Result<usize, PathError> {
        let reject = |reason| PathError::InvalidEndpoint { which, pos, reason };
        let idx = self
            .grid
            .index(pos)
            .ok_or_else(|| reject(EndpointReason::OutOfBounds))?;
        if !self.region().contains(pos) {
            return Err(reject(EndpointReason::Border));
        }
        if !self.grid.is_walkable(pos) {
            return Err(reject(EndpointReason::Blocked));
        }
        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open5() -> Pathfinder {
        Pathfinder::from_flags(&[[0; 5]; 5]).unwrap()
    }

    #[test]
    fn from_flags_rejects_bad_input() {
        let ragged = Pathfinder::from_flags(&[vec![0, 0], vec![0]]);
        assert!(matches!(ragged, Err(PathError::InvalidGrid(_))));
        let empty: &[[i32; 0]] = &[];
        assert!(matches!(
            Pathfinder::from_flags(empty),
            Err(PathError::InvalidGrid(tilepath_core::GridError::Empty))
        ));
    }

    #[test]
    fn flag_array_endpoints_use_x_then_y() {
        // maze[x][y]: 5 wide, 7 tall, wall at x = 2 open only at y = 5.
        let maze: Vec<Vec<i32>> = (0..5)
            .map(|x| {
                (0..7)
                    .map(|y| {
                        let ring = x == 0 || x == 4 || y == 0 || y == 6;
                        i32::from(ring || (x == 2 && y < 5))
                    })
                    .collect()
            })
            .collect();
        let mut pf = Pathfinder::from_flags(&maze).unwrap();
        let (w, h) = (maze.len() as i32, maze[0].len() as i32);
        let path = pf.update_path(1, 1, w - 2, h - 2).unwrap().unwrap();
        assert_eq!(path.goal(), Point::new(3, 5));
        assert_eq!(path.steps(), 6);
        assert!(path.contains(Point::new(2, 5)));
    }

    #[test]
    fn endpoint_validation() {
        let mut pf = open5();
        pf.grid_mut().set_walkable(Point::new(2, 2), false);

        let err = |pos, reason| PathError::InvalidEndpoint {
            which: Endpoint::Start,
            pos,
            reason,
        };
        assert_eq!(
            pf.endpoint(Endpoint::Start, Point::new(5, 1)),
            Err(err(Point::new(5, 1), EndpointReason::OutOfBounds))
        );
        assert_eq!(
            pf.endpoint(Endpoint::Start, Point::new(-1, 2)),
            Err(err(Point::new(-1, 2), EndpointReason::OutOfBounds))
        );
        assert_eq!(
            pf.endpoint(Endpoint::Start, Point::new(0, 2)),
            Err(err(Point::new(0, 2), EndpointReason::Border))
        );
        assert_eq!(
            pf.endpoint(Endpoint::Start, Point::new(2, 4)),
            Err(err(Point::new(2, 4), EndpointReason::Border))
        );
        assert_eq!(
            pf.endpoint(Endpoint::Start, Point::new(2, 2)),
            Err(err(Point::new(2, 2), EndpointReason::Blocked))
        );
        assert_eq!(pf.endpoint(Endpoint::Start, Point::new(3, 1)), Ok(8));
    }

    #[test]
    fn full_bounds_accept_border() {
        let pf = open5().with_config(SearchConfig::default().with_bounds(Bounds::Full));
        assert!(pf.endpoint(Endpoint::Goal, Point::new(0, 0)).is_ok());
        assert!(pf.is_traversable(Point::new(4, 4)));
        assert!(!pf.is_traversable(Point::new(5, 4)));
    }

    #[test]
    fn traversable_region() {
        let pf = open5();
        assert_eq!(pf.region(), Range::new(1, 1, 4, 4));
        assert!(pf.is_traversable(Point::new(1, 3)));
        assert!(!pf.is_traversable(Point::new(0, 3)));
    }

    #[test]
    fn set_grid_resizes_arena() {
        let mut pf = open5();
        pf.set_grid(Grid::from_flags(&[[0; 7]; 9]).unwrap());
        assert_eq!(pf.nodes.len(), 63);
        assert_eq!(pf.grid().size(), Point::new(9, 7));
        assert_eq!(
            pf.cell_state(Point::new(8, 6)),
            Some(CellState::UNVISITED)
        );
        assert_eq!(pf.cell_state(Point::new(8, 7)), None);
    }
}
