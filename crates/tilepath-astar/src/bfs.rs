use std::collections::VecDeque;

use tilepath_core::Point;

use crate::Pathfinder;
use crate::error::{Endpoint, PathError};
use crate::neighbors::Neighbors;
use crate::traits::Heuristic;

/// Sentinel value meaning "unreachable" in a distance map.
pub const UNREACHABLE: i32 = i32::MAX;

/// A position with its step distance from the source of a distance map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

impl<H: Heuristic> Pathfinder<H> {
    /// Breadth-first distance map from `from` over the traversable region.
    ///
    /// Uses the same neighbour rule as [`find_path`](Self::find_path), so
    /// `distance_at(goal)` is the length of the path `find_path` returns.
    /// Returns every reached cell in visiting order, `from` first.
    pub fn distance_map(&mut self, from: Point) -> Result<&[PathNode], PathError> {
        let si = self.endpoint(Endpoint::Start, from)?;

        self.bfs_map.clear();
        self.bfs_map.resize(self.grid.len(), UNREACHABLE);
        self.bfs_results.clear();

        let region = self.region();
        let grid = &self.grid;
        let mut nb = Neighbors::new();
        let mut queue: VecDeque<usize> = VecDeque::new();

        self.bfs_map[si] = 0;
        self.bfs_results.push(PathNode { pos: from, cost: 0 });
        queue.push_back(si);

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = grid.point(ci);

            for &np in nb.cardinal(cp, |n| region.contains(n) && grid.is_walkable(n)) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        log::debug!(
            "bfs: {} cells reachable from {from}",
            self.bfs_results.len()
        );
        Ok(&self.bfs_results)
    }

    /// Step distance of `p` in the last [`distance_map`](Self::distance_map).
    ///
    /// Returns [`UNREACHABLE`] if `p` is outside the grid or was not reached.
    pub fn distance_at(&self, p: Point) -> i32 {
        match self.grid.index(p) {
            Some(i) => self.bfs_map.get(i).copied().unwrap_or(UNREACHABLE),
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::Grid;

    #[test]
    fn distances_in_corridor_maze() {
        let mut pf = Pathfinder::new(
            Grid::parse(
                "######
                 #....#
                 ####.#
                 #....#
                 ######",
            )
            .unwrap(),
        );
        let nodes = pf.distance_map(Point::new(1, 1)).unwrap().to_vec();
        assert_eq!(nodes.len(), 9);
        assert_eq!(nodes[0], PathNode { pos: Point::new(1, 1), cost: 0 });
        assert_eq!(pf.distance_at(Point::new(4, 1)), 3);
        assert_eq!(pf.distance_at(Point::new(1, 3)), 8);
        assert_eq!(pf.distance_at(Point::new(0, 0)), UNREACHABLE);
        assert_eq!(pf.distance_at(Point::new(40, 0)), UNREACHABLE);
        // Costs never decrease in visiting order.
        assert!(nodes.windows(2).all(|w| w[0].cost <= w[1].cost));
    }

    #[test]
    fn before_any_map_everything_is_unreachable() {
        let pf = Pathfinder::new(Grid::from_flags(&[[0; 4]; 4]).unwrap());
        assert_eq!(pf.distance_at(Point::new(1, 1)), UNREACHABLE);
    }

    #[test]
    fn blocked_source_rejected() {
        let mut pf = Pathfinder::new(Grid::parse("###\n###\n###").unwrap());
        assert!(pf.distance_map(Point::new(1, 1)).is_err());
    }
}
