use terrapath_core::{Coord, CostGrid};

use crate::config::EngineConfig;
use crate::cost::Cost;
use crate::neighbors::Connectivity;
use crate::traits::{Pather, WeightedPather};

/// The implicit adjacency graph of a [`CostGrid`] under an
/// [`EngineConfig`].
///
/// A move `a -> b` is legal when `b` is walkable and, for a diagonal move
/// without corner cutting, both orthogonal cells between `a` and `b` are
/// walkable too. Its cost is `entry_cost(b)`, weighted by √2 for a diagonal move.
pub struct GridPather<'a> {
    grid: &'a CostGrid,
    connectivity: Connectivity,
    corner_cutting: bool,
}

impl<'a> GridPather<'a> {
    pub fn new(grid: &'a CostGrid, config: &EngineConfig) -> Self {
        Self {
            grid,
            connectivity: config.connectivity,
            corner_cutting: config.corner_cutting,
        }
    }

    /// Whether a single move from `from` to `to` is legal.
    pub fn can_step(&self, from: Coord, to: Coord) -> bool {
        if !self.connectivity.adjacent(from, to) || !self.grid.is_walkable(to) {
            return false;
        }
        if !from.is_diagonal_to(to) || self.corner_cutting {
            return true;
        }
        self.grid.is_walkable(Coord::new(from.row, to.col))
            && self.grid.is_walkable(Coord::new(to.row, from.col))
    }
}

impl Pather for GridPather<'_> {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for &d in self.connectivity.offsets() {
            let n = c + d;
            if !self.grid.is_walkable(n) {
                continue;
            }
            if d.row != 0 && d.col != 0 && !self.corner_cutting {
                let side_a = c.shift(d.row, 0);
                let side_b = c.shift(0, d.col);
                if !self.grid.is_walkable(side_a) || !self.grid.is_walkable(side_b) {
                    continue;
                }
            }
            buf.push(n);
        }
    }
}

impl WeightedPather for GridPather<'_> {
    fn cost(&self, from: Coord, to: Coord) -> Cost {
        match self.grid.entry_cost(to) {
            Some(c) if from.is_diagonal_to(to) => Cost::diagonal(c),
            Some(c) => Cost::straight(c),
            None => Cost::INFINITE,
        }
    }
}
