//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use arbor_core::{Algorithm, Graph, GraphBuilder, GraphError, SpanningSummary};
use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

use super::edge_list::{EdgeListError, read_edge_list};

/// Source vertex for the demonstration runs.
const DEMO_SOURCE: usize = 0;
/// Out-of-range source used to demonstrate error reporting.
const DEMO_INVALID_SOURCE: usize = 10;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Build search, shortest-path, and spanning trees over weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run every algorithm against the built-in six-vertex sample graph.
    Demo,
    /// Run one algorithm against an edge-list file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Edge-list file, one `left right [weight]` per line.
    pub path: PathBuf,

    /// Number of vertices in the graph.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub vertices: usize,

    /// Algorithm to run.
    #[arg(long, value_enum)]
    pub algorithm: AlgorithmArg,

    /// Start vertex for bfs, dfs, and dijkstra.
    #[arg(long, default_value_t = 0)]
    pub source: usize,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Algorithm names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Breadth-first search tree.
    Bfs,
    /// Depth-first search tree.
    Dfs,
    /// Dijkstra shortest-path tree.
    Dijkstra,
    /// Prim minimum spanning tree from vertex 0.
    Prim,
    /// Kruskal minimum spanning forest.
    Kruskal,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bfs => Self::Bfs,
            AlgorithmArg::Dfs => Self::Dfs,
            AlgorithmArg::Dijkstra => Self::Dijkstra,
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::Kruskal => Self::Kruskal,
        }
    }
}

/// How `run` prints its tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Summary lines followed by the adjacency dump.
    Text,
    /// A single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The edge-list file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The edge list was malformed or named unknown vertices.
    #[error("failed to load `{path}`: {source}")]
    EdgeList {
        /// Path of the edge list.
        path: PathBuf,
        /// Parse or graph failure.
        #[source]
        source: EdgeListError,
    },
    /// An algorithm rejected its input.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// The core graph error behind this failure, if any.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Graph(error) => Some(error),
            Self::EdgeList { source, .. } => source.graph_error(),
            Self::Io { .. } => None,
        }
    }
}

/// Outcome of a CLI command, ready for rendering.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Output of `demo`.
    Demo(DemoReport),
    /// Output of `run`.
    Run(RunReport),
}

/// Every algorithm's tree over the sample graph.
#[derive(Debug, Clone)]
pub struct DemoReport {
    /// The sample graph.
    pub graph: Graph,
    /// Each algorithm with the tree it produced, in run order.
    pub trees: Vec<(Algorithm, Graph)>,
    /// Error returned for the out-of-range source.
    pub rejected: GraphError,
}

/// One algorithm's tree over a loaded edge list.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The algorithm that ran.
    pub algorithm: Algorithm,
    /// Requested output format.
    pub format: OutputFormat,
    /// The resulting tree or forest.
    pub tree: Graph,
    /// Shape of [`RunReport::tree`].
    pub summary: SpanningSummary,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be loaded or the algorithm
/// rejects it.
///
/// # Examples
/// ```
/// use arbor_cli::cli::{Cli, Command, ExecutionSummary, run_cli};
///
/// let summary = run_cli(Cli { command: Command::Demo })?;
/// let ExecutionSummary::Demo(report) = summary else {
///     panic!("demo must produce a demo report");
/// };
/// assert_eq!(report.trees.len(), 5);
/// # Ok::<(), arbor_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Demo => {
            span.record("command", field::display("demo"));
            run_demo().map(ExecutionSummary::Demo)
        }
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run).map(ExecutionSummary::Run)
        }
    }
}

#[instrument(name = "cli.demo", err)]
pub(super) fn run_demo() -> Result<DemoReport, CliError> {
    let graph = GraphBuilder::sample().build()?;
    let trees = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            algorithm
                .run(&graph, DEMO_SOURCE)
                .map(|tree| (algorithm, tree))
        })
        .collect::<Result<Vec<_>, GraphError>>()?;

    let rejected = match Algorithm::Bfs.run(&graph, DEMO_INVALID_SOURCE) {
        Err(error) => error,
        Ok(_) => GraphError::VertexOutOfRange {
            vertex: DEMO_INVALID_SOURCE,
            vertex_count: graph.vertex_count(),
        },
    };
    warn!(
        code = rejected.code().as_str(),
        source = DEMO_INVALID_SOURCE,
        "demonstration source rejected"
    );
    info!(algorithms = trees.len(), "demo completed");

    Ok(DemoReport {
        graph,
        trees,
        rejected,
    })
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        algorithm = field::Empty,
        vertices = field::Empty,
        source = field::Empty,
        edges = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<RunReport, CliError> {
    let RunCommand {
        path,
        vertices,
        algorithm,
        source,
        format,
    } = command;
    let algorithm = Algorithm::from(algorithm);

    let span = Span::current();
    span.record("algorithm", field::display(algorithm));
    span.record("vertices", vertices);
    if algorithm.requires_source() {
        span.record("source", source);
    }

    let reader = open_edge_list(&path)?;
    let graph = read_edge_list(reader, vertices)
        .map_err(|source| CliError::EdgeList { path, source })?;
    span.record("edges", graph.edge_count());

    let tree = algorithm.run(&graph, source)?;
    let summary = SpanningSummary::of(&tree)?;
    info!(
        algorithm = algorithm.as_str(),
        edges = summary.edge_count(),
        total_weight = summary.total_weight(),
        components = summary.component_count(),
        "command completed"
    );

    Ok(RunReport {
        algorithm,
        format,
        tree,
        summary,
    })
}

#[instrument(name = "cli.open_edge_list", err, fields(path = field::Empty))]
pub(super) fn open_edge_list(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
