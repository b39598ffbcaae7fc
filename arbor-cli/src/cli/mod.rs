//! Command-line interface for running the graph algorithms.
//!
//! `demo` replays every algorithm over the built-in sample graph; `run` loads
//! an edge-list file and prints one algorithm's tree as text or JSON.

mod commands;
mod edge_list;
mod render;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, DemoReport, ExecutionSummary, OutputFormat, RunCommand,
    RunReport, run_cli,
};
pub use edge_list::{EdgeListError, read_edge_list};
pub use render::render_summary;
