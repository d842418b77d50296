//! Per-search scratch data, kept apart from the grid's cells.
//!
//! Each grid position has a [`Node`] in a flat arena. A generation counter
//! stamps the nodes touched by the current search, so starting a new search
//! resets every cell without walking the arena.

use tilepath_core::Point;

/// Cost value of a cell the current search has not reached. Larger than any
/// attainable cost.
pub const UNVISITED: i32 = i32::MAX;

pub(crate) const NO_PARENT: usize = usize::MAX;

/// Where a cell stands in the current search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Unvisited,
    Open,
    Closed,
}

/// Snapshot of one cell's search state, as left by the last search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState {
    /// Cost from the start.
    pub g: i32,
    /// Heuristic estimate to the goal.
    pub h: i32,
    /// Priority in the open set.
    pub f: i32,
    pub parent: Option<Point>,
    pub status: Status,
}

impl CellState {
    pub const UNVISITED: Self = Self {
        g: UNVISITED,
        h: UNVISITED,
        f: UNVISITED,
        parent: None,
        status: Status::Unvisited,
    };
}

/// Counters from the last search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells moved from the open set to the closed set, goal included.
    pub expanded: usize,
    /// Largest number of cells open at once.
    pub max_open: usize,
}

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) seq: u32,
    pub(crate) status: Status,
    generation: u32,
}

impl Node {
    const FRESH: Self = Self {
        g: UNVISITED,
        h: UNVISITED,
        f: UNVISITED,
        parent: NO_PARENT,
        seq: 0,
        status: Status::Unvisited,
        generation: 0,
    };
}

pub(crate) struct Nodes {
    nodes: Vec<Node>,
    generation: u32,
}

impl Nodes {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::FRESH; len],
            generation: 0,
        }
    }

    /// Start a new search: every node reads as unvisited afterwards.
    pub(crate) fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could collide with the new generation.
            self.nodes.fill(Node::FRESH);
            self.generation = 1;
        }
    }

    /// The node at `idx` if the current search has touched it.
    #[inline]
    pub(crate) fn get(&self, idx: usize) -> Option<&Node> {
        self.nodes.get(idx).filter(|n| n.generation == self.generation)
    }

    /// Mutable access to the node at `idx`, reset first if it is stale.
    #[inline]
    pub(crate) fn entry(&mut self, idx: usize) -> &mut Node {
        let generation = self.generation;
        let n = &mut self.nodes[idx];
        if n.generation != generation {
            *n = Node {
                generation,
                ..Node::FRESH
            };
        }
        n
    }

    #[inline]
    pub(crate) fn status(&self, idx: usize) -> Status {
        self.get(idx).map_or(Status::Unvisited, |n| n.status)
    }

    #[inline]
    pub(crate) fn parent(&self, idx: usize) -> usize {
        self.get(idx).map_or(NO_PARENT, |n| n.parent)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Public view of the node at `idx`; `point` maps indices back to grid
    /// positions for the parent link.
    pub(crate) fn state(&self, idx: usize, point: impl Fn(usize) -> Point) -> CellState {
        match self.get(idx) {
            Some(n) => CellState {
                g: n.g,
                h: n.h,
                f: n.f,
                parent: (n.parent != NO_PARENT).then(|| point(n.parent)),
                status: n.status,
            },
            None => CellState::UNVISITED,
        }
    }
}
