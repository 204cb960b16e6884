//! Optimal path search over 2D cost and obstacle grids.
//!
//! [`PathEngine::compute_path`] takes an immutable
//! [`CostGrid`](terrapath_core::CostGrid) and two cells and returns the
//! lowest-cost route between them, or a typed [`PathError`]:
//!
//! - **Breadth-first search** when every move costs the same
//!   (4-connectivity over a mask or a uniform-cost grid)
//! - **Dijkstra** otherwise, including 8-connectivity where diagonal moves
//!   weigh √2
//!
//! Costs are tracked as `straight + diagonal·√2` ([`Cost`]), so routes of
//! equal cost tie exactly. Ties on cost go to the route with fewer cells,
//! then to the route found first, so identical inputs always give
//! identical paths. The engine is stateless; every call owns its working
//! set.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | Dijkstra |
//!
//! [`GridPather`] implements both for a grid and an [`EngineConfig`].

mod bfs;
mod cancel;
mod config;
mod cost;
mod dijkstra;
mod distance;
mod engine;
mod error;
mod neighbors;
mod path;
mod pather;
mod search;
mod traits;

pub use cancel::CancelToken;
pub use config::{DEFAULT_CANCEL_POLL_INTERVAL, EngineConfig};
pub use cost::Cost;
pub use distance::{chebyshev, manhattan};
pub use engine::{PathEngine, compute_path};
pub use error::{Endpoint, EndpointFault, PathError};
pub use neighbors::Connectivity;
pub use path::{Path, path_cost};
pub use pather::GridPather;
pub use traits::{Pather, WeightedPather};
