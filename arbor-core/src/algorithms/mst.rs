//! Minimum spanning trees: Prim from vertex 0 and Kruskal over every
//! component.

use tracing::{debug, instrument, trace};

use crate::{
    Edge, Graph, Result, Weight,
    structures::{DisjointSet, IndexedMinHeap},
};

const UNKEYED: Weight = Weight::MAX;

/// Builds a minimum spanning tree of the component containing vertex 0.
///
/// Vertices outside that component are never attached and stay isolated, so
/// on a disconnected graph the result is a tree over vertex 0's component
/// only. Use [`kruskal`] for a spanning forest.
///
/// # Errors
/// Propagates [`crate::GraphError::PriorityQueue`] only if the heap state is
/// inconsistent, which indicates a bug.
///
/// # Examples
/// ```
/// use arbor_core::{GraphBuilder, algorithms};
///
/// let graph = GraphBuilder::sample().build()?;
/// let tree = algorithms::prim(&graph)?;
/// assert_eq!(tree.edge_count(), 5);
/// assert_eq!(tree.total_weight(), 16);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.prim",
    level = "debug",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn prim(graph: &Graph) -> Result<Graph> {
    let vertex_count = graph.vertex_count();
    let mut key: Vec<Option<Weight>> = vec![None; vertex_count];
    let mut parent: Vec<Option<usize>> = vec![None; vertex_count];
    key[0] = Some(0);

    let mut heap = IndexedMinHeap::new(vertex_count);
    for (vertex, known) in key.iter().enumerate() {
        heap.insert(vertex, known.unwrap_or(UNKEYED))?;
    }

    while !heap.is_empty() {
        let (current, _) = heap.extract_min()?;
        // Unkeyed vertices were never reached from vertex 0.
        if key[current].is_none() {
            continue;
        }

        for neighbor in graph.neighbors(current)? {
            let next = neighbor.destination();
            let weight = neighbor.weight();
            if heap.contains(next) && key[next].is_none_or(|known| weight < known) {
                key[next] = Some(weight);
                parent[next] = Some(current);
                heap.decrease_key(next, weight)?;
                trace!(vertex = next, via = current, weight, "lowered key");
            }
        }
    }

    let mut tree = Graph::new(vertex_count)?;
    for vertex in 1..vertex_count {
        if let (Some(from), Some(weight)) = (parent[vertex], key[vertex]) {
            tree.add_edge(from, vertex, weight)?;
        }
    }

    debug!(
        edges = tree.edge_count(),
        total_weight = tree.total_weight(),
        "prim tree complete"
    );
    Ok(tree)
}

/// Builds a minimum spanning forest with one tree per connected component.
///
/// Candidate edges are taken from each vertex's neighbour list with the
/// smaller endpoint first, ordered by weight with a stable sort, and accepted
/// whenever they join two different components. Self-loops are never
/// candidates.
///
/// # Errors
/// Propagates [`crate::GraphError::DisjointSet`] only if an edge record
/// names a vertex outside the graph, which indicates a bug.
///
/// # Examples
/// ```
/// use arbor_core::{GraphBuilder, algorithms};
///
/// let graph = GraphBuilder::new(4).with_edge(0, 1, 2).with_edge(2, 3, 5).build()?;
/// let forest = algorithms::kruskal(&graph)?;
/// assert_eq!(forest.edge_count(), 2);
/// assert_eq!(forest.total_weight(), 7);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[instrument(
    name = "algorithms.kruskal",
    level = "debug",
    err,
    skip(graph),
    fields(vertex_count = graph.vertex_count()),
)]
pub fn kruskal(graph: &Graph) -> Result<Graph> {
    let vertex_count = graph.vertex_count();
    let mut candidates = Vec::with_capacity(graph.edge_count());
    for vertex in 0..vertex_count {
        for neighbor in graph.neighbors(vertex)? {
            if vertex < neighbor.destination() {
                candidates.push(Edge::new(vertex, neighbor.destination(), neighbor.weight()));
            }
        }
    }
    candidates.sort_by_key(Edge::weight);

    let mut sets = DisjointSet::new(vertex_count);
    let mut tree = Graph::new(vertex_count)?;
    for edge in candidates {
        if sets.component_count() == 1 {
            break;
        }
        if sets.union(edge.source(), edge.target())? {
            tree.add_edge(edge.source(), edge.target(), edge.weight())?;
            trace!(
                source = edge.source(),
                target = edge.target(),
                weight = edge.weight(),
                "accepted edge"
            );
        }
    }

    debug!(
        edges = tree.edge_count(),
        total_weight = tree.total_weight(),
        components = sets.component_count(),
        "kruskal forest complete"
    );
    Ok(tree)
}
