//! Plain-text edge-list reader.
//!
//! One edge per line as `left right [weight]`, whitespace separated. The
//! weight defaults to `1`. Everything after `#` is a comment and blank lines
//! are skipped.

use std::io::{self, BufRead};

use arbor_core::{Graph, GraphError, Weight};
use thiserror::Error;
use tracing::{Span, debug, field, instrument};

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// A line did not have the `left right [weight]` shape.
    #[error("line {line}: {reason}: `{content}`")]
    Parse {
        /// One-based line number.
        line: usize,
        /// The offending line with comments stripped.
        content: String,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A well-formed line named a vertex the graph does not have.
    #[error("line {line}: {source}")]
    Edge {
        /// One-based line number.
        line: usize,
        /// Rejection from the graph.
        #[source]
        source: GraphError,
    },
    /// The requested vertex count was rejected.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// Reading from the underlying source failed.
    #[error("failed to read edge list: {0}")]
    Io(#[from] io::Error),
}

impl EdgeListError {
    /// The graph error behind this failure, if any.
    #[must_use]
    pub const fn graph_error(&self) -> Option<&GraphError> {
        match self {
            Self::Edge { source, .. } | Self::Graph(source) => Some(source),
            Self::Parse { .. } | Self::Io(_) => None,
        }
    }
}

/// Reads an edge list into a graph with `vertex_count` vertices.
///
/// Edges are added in file order, so the last edge listed for a vertex is the
/// first one its neighbour iteration yields.
///
/// # Errors
/// Returns [`EdgeListError::Parse`] for malformed lines,
/// [`EdgeListError::Edge`] for unknown vertices, [`EdgeListError::Graph`]
/// when `vertex_count` is zero, and [`EdgeListError::Io`] for read failures.
///
/// # Examples
/// ```
/// use arbor_cli::cli::read_edge_list;
///
/// let input = "# triangle\n0 1 4\n1 2\n\n0 2 3 # cheap\n";
/// let graph = read_edge_list(input.as_bytes(), 3)?;
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.total_weight(), 8);
/// # Ok::<(), arbor_cli::cli::EdgeListError>(())
/// ```
#[instrument(
    name = "cli.read_edge_list",
    err,
    skip(reader),
    fields(edges = field::Empty),
)]
pub fn read_edge_list(reader: impl BufRead, vertex_count: usize) -> Result<Graph, EdgeListError> {
    let mut graph = Graph::new(vertex_count)?;
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line?;
        let Some((left, right, weight)) = parse_line(&line, line_number)? else {
            continue;
        };
        graph
            .add_edge(left, right, weight)
            .map_err(|source| EdgeListError::Edge {
                line: line_number,
                source,
            })?;
    }

    Span::current().record("edges", graph.edge_count());
    debug!(edges = graph.edge_count(), "edge list loaded");
    Ok(graph)
}

fn parse_line(raw: &str, line: usize) -> Result<Option<(usize, usize, Weight)>, EdgeListError> {
    let content = raw.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return Ok(None);
    }
    let malformed = |reason| EdgeListError::Parse {
        line,
        content: content.to_owned(),
        reason,
    };

    let mut tokens = content.split_whitespace();
    let (Some(left), Some(right)) = (tokens.next(), tokens.next()) else {
        return Err(malformed("expected `left right [weight]`"));
    };
    let weight = tokens.next();
    if tokens.next().is_some() {
        return Err(malformed("too many fields"));
    }

    let left = left.parse::<usize>().map_err(|_| malformed("invalid vertex id"))?;
    let right = right.parse::<usize>().map_err(|_| malformed("invalid vertex id"))?;
    let weight = match weight {
        Some(raw) => raw.parse::<Weight>().map_err(|_| malformed("invalid weight"))?,
        None => 1,
    };
    Ok(Some((left, right, weight)))
}
