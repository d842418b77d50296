//! A* shortest paths on 4-connected walkability grids.
//!
//! [`Pathfinder`] owns a [`Grid`](tilepath_core::Grid) of walkable and
//! blocked cells and answers start/goal queries with uniform step cost 1 and
//! no diagonal moves. By default the outermost ring of the grid is treated
//! as a wall, which suits mazes and caves drawn with a solid border; see
//! [`Bounds`].
//!
//! - **A\*** shortest-path search ([`Pathfinder::find_path`]), with an
//!   optional step budget and cancellation check
//! - **BFS** step-distance maps ([`Pathfinder::distance_map`])
//! - Pluggable heuristics ([`Heuristic`]) and open sets ([`Frontier`])
//!
//! Search state (g, h, f, parent) is kept in an arena owned by the
//! pathfinder and reset lazily at the start of every search, so repeated
//! queries are independent of each other.
//!
//! ```
//! use tilepath_astar::Pathfinder;
//! use tilepath_core::Point;
//!
//! // Flags are indexed [x][y]; 0 is walkable.
//! let mut pf = Pathfinder::from_flags(&[
//!     [1, 1, 1, 1, 1],
//!     [1, 0, 0, 0, 1],
//!     [1, 1, 1, 0, 1],
//!     [1, 0, 0, 0, 1],
//!     [1, 1, 1, 1, 1],
//! ])
//! .unwrap();
//! let path = pf.find_path(Point::new(1, 1), Point::new(3, 1)).unwrap().unwrap();
//! assert_eq!(path.steps(), 6);
//! assert_eq!(pf.find_path(Point::new(1, 1), Point::new(1, 1)).unwrap().unwrap().len(), 1);
//! ```

mod astar;
mod bfs;
mod config;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod path;
mod pathfinder;
mod state;
mod traits;

pub use bfs::{PathNode, UNREACHABLE};
pub use config::{Bounds, FrontierKind, Relaxation, SearchConfig};
pub use distance::manhattan;
pub use error::{Endpoint, EndpointReason, PathError};
pub use frontier::{Entry, Frontier, HeapFrontier, ListFrontier};
pub use path::Path;
pub use pathfinder::Pathfinder;
pub use state::{CellState, SearchStats, Status, UNVISITED};
pub use traits::{Heuristic, Manhattan, Zero};
