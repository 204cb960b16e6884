use std::cmp::Ordering;

use terrapath_core::{Coord, Dims};

use crate::cost::Cost;
use crate::path::Path;

/// Parent sentinel for the start cell.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-cell search state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellState {
    Unvisited,
    Frontier,
    Finalized,
}

/// How a search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The goal was dequeued; its back-pointer chain is final.
    Found,
    /// The frontier emptied without reaching the goal.
    Exhausted,
    /// The cancellation token fired.
    Cancelled,
}

// ---------------------------------------------------------------------------
// Internal node for BFS/Dijkstra searches
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub(crate) struct Node {
    pub(crate) cost: Cost,
    pub(crate) steps: u32,
    pub(crate) parent: usize,
    /// Sequence number of the live frontier entry for this cell.
    pub(crate) seq: u64,
    pub(crate) state: CellState,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            cost: Cost::INFINITE,
            steps: u32::MAX,
            parent: NO_PARENT,
            seq: 0,
            state: CellState::Unvisited,
        }
    }
}

impl Node {
    /// Whether reaching this cell with `(cost, steps)` beats what it holds.
    #[inline]
    pub(crate) fn improved_by(&self, cost: Cost, steps: u32) -> bool {
        match cost.compare(&self.cost) {
            Ordering::Less => true,
            Ordering::Equal => steps < self.steps,
            Ordering::Greater => false,
        }
    }
}

/// Frontier entry, ordered for `BinaryHeap` so that the lowest cost pops
/// first, then the fewest steps, then the earliest pushed.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub(crate) cost: Cost,
    pub(crate) steps: u32,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .cost
            .compare(&self.cost)
            .then_with(|| other.steps.cmp(&self.steps))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

// ---------------------------------------------------------------------------
// SearchSpace
// ---------------------------------------------------------------------------

/// Working set of a single search: one [`Node`] per grid cell plus a
/// scratch neighbor buffer. Allocated per call and dropped with it.
pub(crate) struct SearchSpace {
    pub(crate) dims: Dims,
    pub(crate) nodes: Vec<Node>,
    pub(crate) nbuf: Vec<Coord>,
}

impl SearchSpace {
    pub(crate) fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![Node::default(); dims.len()],
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Convert a coordinate to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.dims.index(c)
    }

    /// Convert a flat index back to a coordinate.
    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.dims.coord(idx)
    }

    /// Walk back-pointers from `goal` and return the path start-first.
    pub(crate) fn reconstruct(&self, goal: usize) -> Path {
        let mut coords = Vec::with_capacity(self.nodes[goal].steps as usize + 1);
        let mut ci = goal;
        while ci != NO_PARENT {
            coords.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        coords.reverse();
        Path::new(coords, self.nodes[goal].cost.total())
    }
}
