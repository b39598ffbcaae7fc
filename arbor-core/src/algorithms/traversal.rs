//! Breadth-first and depth-first search trees.

use tracing::{debug, instrument, trace};

use crate::{
    Graph, Result,
    graph::Neighbors,
    structures::FifoQueue,
};

/// Builds the breadth-first search tree rooted at `source`.
///
/// Vertices are visited in level order. The tree records `(current,
/// adjacent)` with the weight of the discovering edge the first time
/// `adjacent` is reached; vertices outside the source's component stay
/// isolated in the result.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] for an unknown source.
///
/// # Examples
/// ```
/// use arbor_core::{GraphBuilder, algorithms};
///
/// let graph = GraphBuilder::new(6).with_unit_edge(0, 1).with_unit_edge(1, 2).build()?;
/// let tree = algorithms::bfs(&graph, 0)?;
/// assert_eq!(tree.edge_count(), 2);
/// assert_eq!(tree.degree(4)?, 0);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.bfs",
    level = "debug",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn bfs(graph: &Graph, source: usize) -> Result<Graph> {
    graph.check_vertex(source)?;

    let mut tree = Graph::new(graph.vertex_count())?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = FifoQueue::new();

    visited[source] = true;
    queue.enqueue(source);

    while !queue.is_empty() {
        let current = queue.dequeue()?;
        for neighbor in graph.neighbors(current)? {
            let adjacent = neighbor.destination();
            if visited[adjacent] {
                continue;
            }
            visited[adjacent] = true;
            queue.enqueue(adjacent);
            tree.add_edge(current, adjacent, neighbor.weight())?;
            trace!(parent = current, child = adjacent, "bfs discovered vertex");
        }
    }

    debug!(edges = tree.edge_count(), "bfs tree complete");
    Ok(tree)
}

/// Builds the depth-first search tree rooted at `source`.
///
/// The traversal keeps an explicit stack of neighbour cursors, so discovery
/// order matches a recursive visit without being bounded by the call stack.
/// Vertices outside the source's component stay isolated in the result.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] for an unknown source.
#[instrument(
    name = "algorithms.dfs",
    level = "debug",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn dfs(graph: &Graph, source: usize) -> Result<Graph> {
    graph.check_vertex(source)?;

    let mut tree = Graph::new(graph.vertex_count())?;
    let mut visited = vec![false; graph.vertex_count()];
    let mut stack: Vec<(usize, Neighbors<'_>)> = vec![(source, graph.neighbors(source)?)];
    visited[source] = true;

    while let Some((vertex, cursor)) = stack.last_mut() {
        let vertex = *vertex;
        let Some(neighbor) = cursor.next() else {
            stack.pop();
            continue;
        };

        let adjacent = neighbor.destination();
        if visited[adjacent] {
            continue;
        }
        visited[adjacent] = true;
        tree.add_edge(vertex, adjacent, neighbor.weight())?;
        trace!(parent = vertex, child = adjacent, "dfs discovered vertex");
        stack.push((adjacent, graph.neighbors(adjacent)?));
    }

    debug!(edges = tree.edge_count(), "dfs tree complete");
    Ok(tree)
}
