//! Find-path request and response bodies.
//!
//! The wire shape follows the image service's `find_path` route: the grid
//! arrives as `image_array`, the endpoints as `[row, col]` pixel pairs, and
//! the answer goes back as `{"path": [[row, col], ...]}`.

use serde::{Deserialize, Serialize};
use terrapath_core::{CellSemantics, Coord, CostGrid};
use terrapath_paths::{Connectivity, EngineConfig, PathEngine, PathError};

use crate::error::CliError;

/// A find-path request.
#[derive(Debug, Clone, Deserialize)]
pub struct FindPathRequest {
    /// Row-major cell values.
    pub image_array: Vec<Vec<f64>>,
    /// `[row, col]`
    pub start_pixel: Vec<i64>,
    /// `[row, col]`
    pub target_pixel: Vec<i64>,
    /// Overrides [`Options::semantics`].
    #[serde(default)]
    pub semantics: Option<CellSemantics>,
    /// Overrides the configured connectivity.
    #[serde(default)]
    pub diagonal: Option<bool>,
}

/// A successful answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FindPathResponse {
    pub path: Vec<Coord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

/// Adapter settings, filled from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Cell semantics used when the request does not name any.
    pub semantics: CellSemantics,
    pub engine: EngineConfig,
    /// Answer an unreachable target with an empty path instead of an error.
    pub empty_on_unreachable: bool,
}

/// Parse a request body.
pub fn parse_request(body: &str) -> Result<FindPathRequest, CliError> {
    Ok(serde_json::from_str(body)?)
}

/// Run a request through the engine.
pub fn find_path(req: &FindPathRequest, opts: &Options) -> Result<FindPathResponse, CliError> {
    let semantics = req.semantics.unwrap_or(opts.semantics);
    let mut config = opts.engine;
    if let Some(diagonal) = req.diagonal {
        config.connectivity = if diagonal {
            Connectivity::Eight
        } else {
            Connectivity::Four
        };
    }

    let grid = CostGrid::from_rows(&req.image_array, semantics)?;
    let start = pixel("start_pixel", &req.start_pixel)?;
    let target = pixel("target_pixel", &req.target_pixel)?;
    log::debug!(
        "find_path on {} {:?} grid, {:?}",
        grid.dims(),
        semantics,
        config.connectivity
    );

    match PathEngine::new(config).compute_path(&grid, start, target) {
        Ok(path) => Ok(FindPathResponse {
            cost: Some(path.cost()),
            path: path.into_coords(),
        }),
        Err(PathError::NoPathFound { .. }) if opts.empty_on_unreachable => {
            log::info!("no path from {start} to {target}, answering with an empty path");
            Ok(FindPathResponse {
                path: Vec::new(),
                cost: None,
            })
        }
        Err(e) => Err(e.into()),
    }
}

fn pixel(field: &'static str, value: &[i64]) -> Result<Coord, CliError> {
    let bad = || CliError::BadCoordinate {
        field,
        value: value.to_vec(),
    };
    let &[row, col] = value else {
        return Err(bad());
    };
    let row = i32::try_from(row).map_err(|_| bad())?;
    let col = i32::try_from(col).map_err(|_| bad())?;
    Ok(Coord::new(row, col))
}
