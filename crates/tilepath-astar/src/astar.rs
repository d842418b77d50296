use tilepath_core::Point;

use crate::Pathfinder;
use crate::config::{FrontierKind, Relaxation};
use crate::error::{Endpoint, PathError};
use crate::frontier::{Entry, Frontier, HeapFrontier, ListFrontier};
use crate::neighbors::Neighbors;
use crate::path::Path;
use crate::state::{NO_PARENT, SearchStats, Status};
use crate::traits::Heuristic;

impl<H: Heuristic> Pathfinder<H> {
    /// Compute a shortest path from `start` to `goal` using A*.
    ///
    /// Returns the path (goal first, both endpoints included), `Ok(None)` if
    /// the goal cannot be reached, or an error if an endpoint is outside the
    /// traversable region or blocked.
    pub fn find_path(&mut self, start: Point, goal: Point) -> Result<Option<Path>, PathError> {
        self.find_path_cancellable(start, goal, || false)
    }

    /// Like [`find_path`](Self::find_path), polling `cancel` once per
    /// expanded cell. The search stops with [`PathError::Cancelled`] as soon
    /// as it returns `true`.
    pub fn find_path_cancellable(
        &mut self,
        start: Point,
        goal: Point,
        cancel: impl FnMut() -> bool,
    ) -> Result<Option<Path>, PathError> {
        match self.config.frontier {
            FrontierKind::Heap => {
                let mut open = HeapFrontier::with_capacity(self.grid.len().min(1024));
                self.search(&mut open, start, goal, cancel)
            }
            FrontierKind::List => self.search(&mut ListFrontier::new(), start, goal, cancel),
        }
    }

    /// Like [`find_path`](Self::find_path) with a caller-supplied open set.
    /// The frontier is cleared first; the configured
    /// [`FrontierKind`] is ignored.
    pub fn find_path_with<F: Frontier>(
        &mut self,
        open: &mut F,
        start: Point,
        goal: Point,
    ) -> Result<Option<Path>, PathError> {
        open.clear();
        self.search(open, start, goal, || false)
    }

    fn search<F: Frontier>(
        &mut self,
        open: &mut F,
        start: Point,
        goal: Point,
        mut cancel: impl FnMut() -> bool,
    ) -> Result<Option<Path>, PathError> {
        let start_idx = self.endpoint(Endpoint::Start, start)?;
        let goal_idx = self.endpoint(Endpoint::Goal, goal)?;

        self.nodes.reset();
        self.stats = SearchStats::default();

        {
            let h = self.heuristic.estimate(start, goal);
            let n = self.nodes.entry(start_idx);
            n.g = 0;
            n.h = h;
            n.f = h;
            n.parent = NO_PARENT;
            n.seq = 0;
            n.status = Status::Open;
        }

        if start_idx == goal_idx {
            self.nodes.entry(start_idx).status = Status::Closed;
            log::debug!("astar: {start} is the goal");
            return Ok(Some(Path::from_goal(vec![start])));
        }

        let region = self.region();
        let relaxation = self.config.relaxation;
        let max_steps = self.config.max_steps;

        open.push(Entry {
            idx: start_idx,
            f: self.nodes.entry(start_idx).f,
            seq: 0,
        });
        let mut next_seq: u32 = 1;
        let mut open_count: usize = 1;
        let mut expanded: usize = 0;
        let mut max_open: usize = 1;
        let mut nb = Neighbors::new();

        let found = 'search: loop {
            let Some(current) = open.pop_min() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip stale entries.
            let (cur_g, cur_f) = match self.nodes.get(ci) {
                Some(n) if n.status == Status::Open && n.f == current.f => (n.g, n.f),
                _ => continue,
            };

            if cancel() {
                self.stats = SearchStats { expanded, max_open };
                log::debug!("astar: {start} -> {goal} cancelled after {expanded} cells");
                return Err(PathError::Cancelled);
            }
            if let Some(limit) = max_steps {
                if expanded >= limit {
                    self.stats = SearchStats { expanded, max_open };
                    log::warn!("astar: {start} -> {goal} exceeded step budget of {limit}");
                    return Err(PathError::StepBudgetExceeded { limit });
                }
            }

            self.nodes.entry(ci).status = Status::Closed;
            open_count -= 1;
            expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let cp = self.grid.point(ci);
            log::trace!("astar: expand {cp} g={cur_g} f={cur_f}");

            let grid = &self.grid;
            for &np in nb.cardinal(cp, |n| region.contains(n) && grid.is_walkable(n)) {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                if self.nodes.status(ni) == Status::Closed {
                    continue;
                }
                let h = match relaxation {
                    Relaxation::Classic => self.heuristic.estimate(np, goal),
                    Relaxation::TotalCost => 0,
                };

                let n = self.nodes.entry(ni);
                let was_open = n.status == Status::Open;
                match relaxation {
                    Relaxation::TotalCost => {
                        let candidate = cur_f.saturating_add(1);
                        if was_open && candidate >= n.f {
                            continue;
                        }
                        n.f = candidate;
                        n.g = cur_g + 1;
                    }
                    Relaxation::Classic => {
                        let candidate = cur_g + 1;
                        if was_open && candidate >= n.g {
                            continue;
                        }
                        n.g = candidate;
                        n.h = h;
                        n.f = candidate.saturating_add(h);
                    }
                }
                n.parent = ci;

                if was_open {
                    open.update(Entry {
                        idx: ni,
                        f: n.f,
                        seq: n.seq,
                    });
                } else {
                    n.status = Status::Open;
                    n.seq = next_seq;
                    next_seq += 1;
                    open.push(Entry {
                        idx: ni,
                        f: n.f,
                        seq: n.seq,
                    });
                    open_count += 1;
                    max_open = max_open.max(open_count);
                }
            }
        };

        self.stats = SearchStats { expanded, max_open };

        if !found {
            log::debug!("astar: no path {start} -> {goal} ({expanded} cells expanded)");
            return Ok(None);
        }

        let path = self.reconstruct(goal_idx)?;
        log::debug!(
            "astar: {start} -> {goal}: {} steps, {expanded} cells expanded",
            path.steps()
        );
        Ok(Some(path))
    }

    /// Follow parent links from the goal back to the start.
    fn reconstruct(&self, goal_idx: usize) -> Result<Path, PathError> {
        let mut cells = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            if cells.len() >= self.nodes.len() {
                let goal = self.grid.point(goal_idx);
                log::warn!("astar: parent links from {goal} form a cycle");
                return Err(PathError::ParentCycle { goal });
            }
            cells.push(self.grid.point(ci));
            ci = self.nodes.parent(ci);
        }
        Ok(Path::from_goal(cells))
    }
}
