use std::fmt;

use terrapath_core::Coord;

/// Which end of a requested path an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointFault {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("out of bounds"),
            Self::Blocked => f.write_str("an obstacle"),
        }
    }
}

/// Errors returned by a path search. A failed search yields no path at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PathError {
    /// The grid has zero rows or zero columns.
    #[error("grid has no cells")]
    EmptyGrid,
    /// The start or target lies outside the grid or on an obstacle.
    #[error("{which} {coord} is {fault}")]
    InvalidEndpoint {
        which: Endpoint,
        coord: Coord,
        fault: EndpointFault,
    },
    /// The frontier ran out before the target was reached.
    #[error("no path from {start} to {target} ({expanded} cells expanded)")]
    NoPathFound {
        start: Coord,
        target: Coord,
        expanded: usize,
    },
    /// The caller's [`CancelToken`](crate::CancelToken) fired mid-search.
    #[error("search cancelled after {expanded} expansions")]
    Cancelled { expanded: usize },
}

impl PathError {
    /// Stable snake_case name of the error variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyGrid => "empty_grid",
            Self::InvalidEndpoint { .. } => "invalid_endpoint",
            Self::NoPathFound { .. } => "no_path_found",
            Self::Cancelled { .. } => "cancelled",
        }
    }
}
