//! Search configuration.

/// Which cells a search may step on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bounds {
    /// Only the interior: `0 < x < width - 1` and `0 < y < height - 1`.
    /// The outermost ring of the grid is never entered, which suits mazes
    /// drawn with a solid outer wall.
    #[default]
    Interior,
    /// Every cell of the grid.
    Full,
}

/// How a discovered cell's cost is compared and updated when it is reached
/// again from a newly closed cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// Compare `current.f + 1` against the neighbour's `f` and store it as
    /// the neighbour's new `f`. The heuristic only contributes to the start
    /// cell's cost, so the open set is effectively ordered by distance from
    /// the start. Paths are shortest, but among equal-length alternatives
    /// the choice can differ from [`Relaxation::Classic`].
    #[default]
    TotalCost,
    /// Textbook A*: compare `current.g + 1` against the neighbour's `g`, and
    /// set `f = g + estimate(neighbour, goal)`.
    Classic,
}

/// Open set implementation used by [`Pathfinder::find_path`].
///
/// Both produce the same pop order, and thus the same paths.
///
/// [`Pathfinder::find_path`]: crate::Pathfinder::find_path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierKind {
    /// Unsorted list scanned for the minimum on every pop.
    List,
    /// Binary heap with lazy deletion.
    #[default]
    Heap,
}

/// Tunables for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    pub bounds: Bounds,
    pub relaxation: Relaxation,
    pub frontier: FrontierKind,
    /// Maximum number of cells a search may close before it gives up with
    /// [`PathError::StepBudgetExceeded`](crate::PathError::StepBudgetExceeded).
    /// `None` means unlimited.
    pub max_steps: Option<usize>,
}

impl SearchConfig {
    /// Set the traversable region (builder).
    pub const fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the relaxation rule (builder).
    pub const fn with_relaxation(mut self, relaxation: Relaxation) -> Self {
        self.relaxation = relaxation;
        self
    }

    /// Set the open set implementation (builder).
    pub const fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Set the step budget (builder).
    pub const fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_bordered_maze_behavior() {
        let c = SearchConfig::default();
        assert_eq!(c.bounds, Bounds::Interior);
        assert_eq!(c.relaxation, Relaxation::TotalCost);
        assert_eq!(c.frontier, FrontierKind::Heap);
        assert_eq!(c.max_steps, None);
    }

    #[test]
    fn builders() {
        let c = SearchConfig::default()
            .with_bounds(Bounds::Full)
            .with_relaxation(Relaxation::Classic)
            .with_frontier(FrontierKind::List)
            .with_max_steps(Some(10));
        assert_eq!(
            c,
            SearchConfig {
                bounds: Bounds::Full,
                relaxation: Relaxation::Classic,
                frontier: FrontierKind::List,
                max_steps: Some(10),
            }
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = SearchConfig::default()
            .with_relaxation(Relaxation::Classic)
            .with_max_steps(Some(64));
        let json = serde_json::to_string(&c).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }
}
