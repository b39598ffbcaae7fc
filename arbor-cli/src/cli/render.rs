//! Text and JSON rendering of command results.

use std::io::{self, Write};

use arbor_core::{Algorithm, Graph, Weight};
use serde::Serialize;

use super::commands::{DemoReport, ExecutionSummary, OutputFormat, RunReport};

#[derive(Debug, Serialize)]
struct TreeDocument<'a> {
    algorithm: &'a str,
    vertex_count: usize,
    total_weight: Weight,
    component_count: usize,
    edges: Vec<EdgeDocument>,
}

#[derive(Debug, Serialize)]
struct EdgeDocument {
    source: usize,
    target: usize,
    weight: Weight,
}

/// Renders `summary` to `writer`.
///
/// Trees are printed as adjacency dumps, one `Vertex i -> (j, weight: w) ...`
/// line per vertex. `run --format json` emits a single JSON object with the
/// algorithm name, vertex count, total weight, component count, and edges.
///
/// # Errors
/// Returns [`io::Error`] if writing or serialisation fails.
///
/// # Examples
/// ```
/// use arbor_cli::cli::{Cli, Command, render_summary, run_cli};
///
/// let summary = run_cli(Cli { command: Command::Demo })?;
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Original graph:\nVertex 0 -> (2, weight: 3) (1, weight: 4) \n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Demo(report) => render_demo(report, &mut writer),
        ExecutionSummary::Run(report) => match report.format {
            OutputFormat::Text => render_run_text(report, &mut writer),
            OutputFormat::Json => render_run_json(report, &mut writer),
        },
    }
}

fn render_demo(report: &DemoReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "Original graph:")?;
    write!(writer, "{}", report.graph)?;
    for (algorithm, tree) in &report.trees {
        writeln!(writer)?;
        writeln!(writer, "{}", demo_heading(*algorithm))?;
        write!(writer, "{tree}")?;
    }
    writeln!(writer)?;
    writeln!(writer, "Invalid source vertex:")?;
    writeln!(writer, "error [{}]: {}", report.rejected.code(), report.rejected)
}

const fn demo_heading(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Bfs => "BFS tree from vertex 0:",
        Algorithm::Dfs => "DFS tree from vertex 0:",
        Algorithm::Dijkstra => "Shortest-path tree from vertex 0 (Dijkstra):",
        Algorithm::Prim => "Minimum spanning tree (Prim):",
        Algorithm::Kruskal => "Minimum spanning forest (Kruskal):",
    }
}

fn render_run_text(report: &RunReport, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "algorithm: {}", report.algorithm)?;
    writeln!(writer, "edges: {}", report.summary.edge_count())?;
    writeln!(writer, "total weight: {}", report.summary.total_weight())?;
    writeln!(writer, "components: {}", report.summary.component_count())?;
    write!(writer, "{}", report.tree)
}

fn render_run_json(report: &RunReport, writer: &mut impl Write) -> io::Result<()> {
    let document = TreeDocument {
        algorithm: report.algorithm.as_str(),
        vertex_count: report.tree.vertex_count(),
        total_weight: report.summary.total_weight(),
        component_count: report.summary.component_count(),
        edges: edge_documents(&report.tree),
    };
    serde_json::to_writer(&mut *writer, &document)?;
    writeln!(writer)
}

fn edge_documents(tree: &Graph) -> Vec<EdgeDocument> {
    tree.edges()
        .map(|edge| EdgeDocument {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        })
        .collect()
}
