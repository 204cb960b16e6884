//! **terrapath-cli** — a JSON boundary adapter for the terrapath engine.
//!
//! Reads a find-path request, runs it through
//! [`PathEngine`](terrapath_paths::PathEngine) and renders the answer or a
//! typed error as JSON. The `terrapath` binary wraps this for the command
//! line.

pub mod error;
pub mod request;

pub use error::CliError;
pub use request::{FindPathRequest, FindPathResponse, Options, find_path, parse_request};
