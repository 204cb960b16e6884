use terrapath_core::Coord;

use crate::cost::Cost;

/// Minimal search interface — provides neighbor enumeration.
pub trait Pather {
    /// Append the cells reachable in one move from `c` into `buf`. The
    /// caller clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with weighted (non-negative) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Both parts must be
    /// finite and `>= 0` for every pair returned by [`Pather::neighbors`].
    fn cost(&self, from: Coord, to: Coord) -> Cost;
}
