//! Dijkstra's single-source shortest paths.

use tracing::{debug, instrument, trace};

use crate::{Distance, Graph, Result, structures::IndexedMinHeap};

const UNREACHED: Distance = Distance::MAX;

struct ShortestPaths {
    source: usize,
    distance: Vec<Option<Distance>>,
    parent: Vec<Option<usize>>,
}

impl ShortestPaths {
    fn search(graph: &Graph, source: usize) -> Result<Self> {
        graph.check_vertex(source)?;

        let vertex_count = graph.vertex_count();
        let mut distance: Vec<Option<Distance>> = vec![None; vertex_count];
        let mut parent = vec![None; vertex_count];
        distance[source] = Some(0);

        let mut heap = IndexedMinHeap::new(vertex_count);
        for (vertex, known) in distance.iter().enumerate() {
            heap.insert(vertex, known.unwrap_or(UNREACHED))?;
        }

        while !heap.is_empty() {
            let (current, _) = heap.extract_min()?;
            // Every vertex left in the heap is unreachable once an
            // unreached one surfaces.
            let Some(reached) = distance[current] else {
                continue;
            };

            for neighbor in graph.neighbors(current)? {
                let next = neighbor.destination();
                if !heap.contains(next) {
                    continue;
                }
                let candidate = reached.saturating_add(neighbor.weight());
                if distance[next].is_none_or(|known| candidate < known) {
                    distance[next] = Some(candidate);
                    parent[next] = Some(current);
                    heap.decrease_key(next, candidate)?;
                    trace!(vertex = next, via = current, distance = candidate, "relaxed");
                }
            }
        }

        Ok(Self {
            source,
            distance,
            parent,
        })
    }

    fn into_tree(self, graph: &Graph) -> Result<Graph> {
        let mut tree = Graph::new(graph.vertex_count())?;
        for (vertex, parent) in self.parent.iter().enumerate() {
            if vertex == self.source {
                continue;
            }
            let Some(parent) = *parent else {
                continue;
            };
            // The weight is looked up again from the graph; with parallel
            // edges this is the first record in the parent's neighbour order.
            let weight = graph.edge_weight(parent, vertex)?.unwrap_or(0);
            tree.add_edge(parent, vertex, weight)?;
        }
        Ok(tree)
    }
}

/// Builds the shortest-path tree rooted at `source`.
///
/// Each reachable vertex `v != source` is joined to its predecessor on a
/// shortest path. Unreachable vertices stay isolated. Edge weights are
/// expected to be non-negative.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] for an unknown source.
///
/// # Examples
/// ```
/// use arbor_core::{GraphBuilder, algorithms};
///
/// let graph = GraphBuilder::new(3)
///     .with_edge(0, 1, 1)
///     .with_edge(1, 2, 1)
///     .with_edge(0, 2, 5)
///     .build()?;
/// let tree = algorithms::dijkstra(&graph, 0)?;
/// assert!(tree.has_edge(1, 2)?);
/// assert!(!tree.has_edge(0, 2)?);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.dijkstra",
    level = "debug",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn dijkstra(graph: &Graph, source: usize) -> Result<Graph> {
    let paths = ShortestPaths::search(graph, source)?;
    let reached = paths.distance.iter().flatten().count();
    let tree = paths.into_tree(graph)?;
    debug!(reached, edges = tree.edge_count(), "shortest-path tree complete");
    Ok(tree)
}

/// Returns the shortest distance from `source` to every vertex, `None` for
/// unreachable vertices.
///
/// # Errors
/// Returns [`crate::GraphError::VertexOutOfRange`] for an unknown source.
///
/// # Examples
/// ```
/// use arbor_core::{GraphBuilder, algorithms};
///
/// let graph = GraphBuilder::new(3).with_edge(0, 1, 4).build()?;
/// assert_eq!(algorithms::shortest_distances(&graph, 0)?, vec![Some(0), Some(4), None]);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.shortest_distances",
    level = "debug",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn shortest_distances(graph: &Graph, source: usize) -> Result<Vec<Option<Distance>>> {
    Ok(ShortestPaths::search(graph, source)?.distance)
}
