//! terrapath — compute a path for a JSON find-path request.
//!
//! ```bash
//! terrapath request.json
//! terrapath --semantics cost --diagonal - < request.json
//! RUST_LOG=debug terrapath request.json
//! ```

use std::io::Write;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use terrapath_cli::{CliError, FindPathResponse, Options, find_path, parse_request};
use terrapath_core::CellSemantics;
use terrapath_paths::EngineConfig;

/// Compute an optimal path across a grid.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Request file (JSON). `-` reads standard input.
    #[arg(default_value = "-")]
    input: String,

    /// How cell values are read when the request does not say.
    #[arg(long, value_enum, default_value_t = SemanticsArg::Mask)]
    semantics: SemanticsArg,

    /// Allow diagonal moves (8-connectivity).
    #[arg(long)]
    diagonal: bool,

    /// Allow diagonal moves that squeeze past a blocked corner.
    #[arg(long)]
    corner_cutting: bool,

    /// Answer an unreachable target with `{"path": []}`.
    #[arg(long)]
    empty_on_unreachable: bool,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log search details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum SemanticsArg {
    /// 0 is free, anything else is an obstacle.
    Mask,
    /// Values are entry costs; negative values are obstacles.
    Cost,
}

impl From<SemanticsArg> for CellSemantics {
    fn from(s: SemanticsArg) -> Self {
        match s {
            SemanticsArg::Mask => CellSemantics::Mask,
            SemanticsArg::Cost => CellSemantics::Cost,
        }
    }
}

fn run(args: &Args) -> Result<FindPathResponse, CliError> {
    let body = if args.input == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(&args.input)?
    };
    let req = parse_request(&body)?;

    let mut engine = EngineConfig::default().with_corner_cutting(args.corner_cutting);
    if args.diagonal {
        engine = engine.with_diagonals();
    }
    let opts = Options {
        semantics: args.semantics.into(),
        engine,
        empty_on_unreachable: args.empty_on_unreachable,
    };
    find_path(&req, &opts)
}

fn emit<T: serde::Serialize>(value: &T, pretty: bool) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let (written, code) = match run(&args) {
        Ok(resp) => {
            log::debug!("path of {} cells", resp.path.len());
            (emit(&resp, args.pretty), ExitCode::SUCCESS)
        }
        Err(e) => {
            log::error!("{e}");
            (emit(&e.to_json(), args.pretty), ExitCode::from(e.exit_code()))
        }
    };
    if let Err(e) = written {
        log::error!("writing response: {e}");
        return ExitCode::FAILURE;
    }
    code
}
