//! The path engine: input validation, strategy selection and the search
//! entry points.

use std::fmt;

use terrapath_core::{Coord, CostGrid};

use crate::cancel::{CancelToken, Poller};
use crate::config::EngineConfig;
use crate::error::{Endpoint, EndpointFault, PathError};
use crate::neighbors::Connectivity;
use crate::path::Path;
use crate::pather::GridPather;
use crate::search::{Outcome, SearchSpace};

/// Search algorithm picked for a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Strategy {
    /// Every move costs `unit`: plain breadth-first search.
    Breadth { unit: f64 },
    /// Non-uniform move costs: Dijkstra.
    Dijkstra,
}

impl Strategy {
    pub(crate) fn for_grid(grid: &CostGrid, config: &EngineConfig) -> Self {
        match (config.connectivity, grid.uniform_cost()) {
            (Connectivity::Four, Some(unit)) => Self::Breadth { unit },
            _ => Self::Dijkstra,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breadth { unit } => write!(f, "bfs(unit={unit})"),
            Self::Dijkstra => f.write_str("dijkstra"),
        }
    }
}

/// Computes optimal routes across a [`CostGrid`].
///
/// The engine holds only its configuration. Every call allocates its own
/// working set, so one engine can serve any number of concurrent searches.
///
/// Paths minimise total cost, then cell count; remaining ties go to the
/// route discovered first, which makes results reproducible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathEngine {
    config: EngineConfig,
}

impl PathEngine {
    /// Create an engine with the given configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The engine's configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the cheapest path from `start` to `target`.
    pub fn compute_path(
        &self,
        grid: &CostGrid,
        start: Coord,
        target: Coord,
    ) -> Result<Path, PathError> {
        self.search(grid, start, target, None)
    }

    /// Like [`compute_path`](Self::compute_path), polling `cancel` between
    /// expansions and failing with [`PathError::Cancelled`] once it fires.
    pub fn compute_path_cancellable(
        &self,
        grid: &CostGrid,
        start: Coord,
        target: Coord,
        cancel: &CancelToken,
    ) -> Result<Path, PathError> {
        self.search(grid, start, target, Some(cancel))
    }

    fn search(
        &self,
        grid: &CostGrid,
        start: Coord,
        target: Coord,
        cancel: Option<&CancelToken>,
    ) -> Result<Path, PathError> {
        let (si, gi) = validate(grid, start, target)?;
        if si == gi {
            return Ok(Path::new(vec![start], 0.0));
        }

        let dims = grid.dims();
        let mut space = SearchSpace::new(dims);

        let strategy = Strategy::for_grid(grid, &self.config);
        log::debug!(
            "searching {dims} grid from {start} to {target} with {strategy}"
        );

        let pather = GridPather::new(grid, &self.config);
        let mut poller = Poller::new(cancel, self.config.cancel_poll_interval);
        let outcome = match strategy {
            Strategy::Breadth { unit } => space.bfs(&pather, si, gi, unit, &mut poller),
            Strategy::Dijkstra => space.dijkstra(&pather, si, gi, &mut poller),
        };

        let expanded = poller.expanded;
        match outcome {
            Outcome::Found => {
                let path = space.reconstruct(gi);
                log::debug!(
                    "found path of {} cells, cost {} ({expanded} cells expanded)",
                    path.len(),
                    path.cost()
                );
                Ok(path)
            }
            Outcome::Exhausted => {
                log::debug!("no path from {start} to {target} ({expanded} cells expanded)");
                Err(PathError::NoPathFound {
                    start,
                    target,
                    expanded,
                })
            }
            Outcome::Cancelled => {
                log::debug!("search cancelled after {expanded} expansions");
                Err(PathError::Cancelled { expanded })
            }
        }
    }
}

/// Compute a path with the default configuration (4-connectivity).
pub fn compute_path(grid: &CostGrid, start: Coord, target: Coord) -> Result<Path, PathError> {
    PathEngine::default().compute_path(grid, start, target)
}

/// Check the grid and both endpoints; return the endpoints' flat indices.
fn validate(grid: &CostGrid, start: Coord, target: Coord) -> Result<(usize, usize), PathError> {
    if grid.is_empty() {
        return Err(PathError::EmptyGrid);
    }
    let check = |which: Endpoint, coord: Coord| -> Result<usize, PathError> {
        let invalid = |fault| PathError::InvalidEndpoint {
            which,
            coord,
            fault,
        };
        let idx = grid
            .dims()
            .index(coord)
            .ok_or_else(|| invalid(EndpointFault::OutOfBounds))?;
        if grid.entry_cost_at(idx).is_none() {
            return Err(invalid(EndpointFault::Blocked));
        }
        Ok(idx)
    };
    Ok((check(Endpoint::Start, start)?, check(Endpoint::Target, target)?))
}
