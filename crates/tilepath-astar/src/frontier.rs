//! Open-set implementations.
//!
//! Entries are ranked by `(f, seq)`: lowest cost first, and among equal
//! costs the cell that was discovered first. `seq` is assigned once, when a
//! cell first enters the open set, and kept across cost updates, so every
//! implementation pops cells in the same order.

use std::collections::BinaryHeap;

/// An open-set entry for the cell at flat grid index `idx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub idx: usize,
    pub f: i32,
    pub seq: u32,
}

impl Entry {
    #[inline]
    fn key(&self) -> (i32, u32) {
        (self.f, self.seq)
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        other.key().cmp(&self.key())
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The set of discovered, not yet finalized cells.
///
/// The search tracks open/closed membership itself; a frontier only has to
/// hand back the best entry. Implementations may return stale entries (an
/// older `f` for a cell that was later improved or already closed); the
/// search skips those.
pub trait Frontier {
    /// Add a cell that was not open before.
    fn push(&mut self, entry: Entry);

    /// Lower the cost of a cell that is already open.
    fn update(&mut self, entry: Entry);

    /// Remove and return the entry with the smallest `(f, seq)`.
    fn pop_min(&mut self) -> Option<Entry>;

    /// Number of entries held, stale ones included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}

/// Open set as a plain list, scanned linearly on every pop.
///
/// Cheap to update and fine for small and medium grids.
#[derive(Debug, Default, Clone)]
pub struct ListFrontier {
    entries: Vec<Entry>,
}

impl ListFrontier {
    /// Create an empty list frontier.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for ListFrontier {
    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn update(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.idx == entry.idx) {
            Some(e) => *e = entry,
            None => self.entries.push(entry),
        }
    }

    fn pop_min(&mut self) -> Option<Entry> {
        let (best, _) = self
            .entries
            .iter()
            .enumerate()
            .min_by_key(|(_, e)| e.key())?;
        // `remove` keeps discovery order for the remaining entries.
        Some(self.entries.remove(best))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Open set as a binary heap. Updates push a fresh entry and leave the old
/// one behind to be skipped when popped.
#[derive(Debug, Default, Clone)]
pub struct HeapFrontier {
    heap: BinaryHeap<Entry>,
}

impl HeapFrontier {
    /// Create an empty heap frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty heap frontier with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }
}

impl Frontier for HeapFrontier {
    fn push(&mut self, entry: Entry) {
        self.heap.push(entry);
    }

    fn update(&mut self, entry: Entry) {
        self.heap.push(entry);
    }

    fn pop_min(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
