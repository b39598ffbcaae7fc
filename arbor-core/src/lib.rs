//! Arbor core library.
//!
//! Provides an undirected weighted [`Graph`] with adjacency-list storage and
//! five tree-producing algorithms over it: breadth-first and depth-first
//! search trees, Dijkstra's shortest-path tree, and Prim's and Kruskal's
//! minimum spanning trees. The supporting structures the algorithms are built
//! on (a FIFO queue, an indexed binary min-heap with decrease-key, and a
//! disjoint-set forest) are exported for direct use.
//!
//! ```
//! use arbor_core::{Graph, algorithms};
//!
//! let mut graph = Graph::new(3)?;
//! graph.add_edge(0, 1, 4)?;
//! graph.add_edge(1, 2, 1)?;
//! graph.add_edge(0, 2, 2)?;
//!
//! let mst = algorithms::kruskal(&graph)?;
//! assert_eq!(mst.total_weight(), 3);
//! # Ok::<(), arbor_core::GraphError>(())
//! ```

pub mod algorithms;
mod error;
mod graph;
pub mod structures;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    algorithms::{Algorithm, SpanningSummary},
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, PriorityQueueError,
        PriorityQueueErrorCode, QueueError, QueueErrorCode, Result,
    },
    graph::{Distance, Edge, Graph, GraphBuilder, Neighbor, Neighbors, Weight},
};
