use terrapath_core::{Coord, CostGrid};

use crate::config::EngineConfig;
use crate::cost::Cost;
use crate::pather::GridPather;
use crate::traits::WeightedPather;

/// An optimal route between two cells, both endpoints included.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    coords: Vec<Coord>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(coords: Vec<Coord>, cost: f64) -> Self {
        debug_assert!(!coords.is_empty());
        Self { coords, cost }
    }

    /// The cells of the path, from start to target.
    #[inline]
    pub fn coords(&self) -> &[Coord] {
        &self.coords
    }

    /// Total cost of the moves along the path (0 for a single cell).
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Always `false` for a path returned by the engine.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Coord {
        self.coords[0]
    }

    /// Last cell.
    #[inline]
    pub fn target(&self) -> Coord {
        self.coords[self.coords.len() - 1]
    }

    /// Take the coordinates out of the path.
    pub fn into_coords(self) -> Vec<Coord> {
        self.coords
    }
}

/// Recompute the total cost of a coordinate chain.
///
/// Returns `None` if the chain is empty, starts on an obstacle, or contains
/// a step that is not a legal move on `grid` under `config`.
pub fn path_cost(grid: &CostGrid, coords: &[Coord], config: &EngineConfig) -> Option<f64> {
    let first = coords.first()?;
    if !grid.is_walkable(*first) {
        return None;
    }
    let pather = GridPather::new(grid, config);
    let mut total = Cost::ZERO;
    for w in coords.windows(2) {
        if !pather.can_step(w[0], w[1]) {
            return None;
        }
        total = total + pather.cost(w[0], w[1]);
    }
    Some(total.total())
}

#[cfg(feature = "serde")]
impl serde::Serialize for Path {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.coords.serialize(serializer)
    }
}
