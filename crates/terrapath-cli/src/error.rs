use terrapath_core::GridError;
use terrapath_paths::PathError;

/// Everything that can go wrong between reading a request and writing a
/// response.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("reading request: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} must be a [row, col] pair of 32-bit integers, got {value:?}")]
    BadCoordinate {
        field: &'static str,
        value: Vec<i64>,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Path(#[from] PathError),
}

impl CliError {
    /// Stable snake_case name used in error responses.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Json(_) => "malformed_request",
            Self::BadCoordinate { .. } => "bad_coordinate",
            Self::Grid(_) => "bad_grid",
            Self::Path(e) => e.kind(),
        }
    }

    /// Process exit code: 1 for I/O, 2 for bad input, 3 for an unreachable
    /// target, 4 for a cancelled search.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => 1,
            Self::Path(PathError::NoPathFound { .. }) => 3,
            Self::Path(PathError::Cancelled { .. }) => 4,
            Self::Json(_) | Self::BadCoordinate { .. } | Self::Grid(_) | Self::Path(_) => 2,
        }
    }

    /// JSON body describing the error.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "kind": self.kind(),
                "message": self.to_string(),
            }
        })
    }
}
