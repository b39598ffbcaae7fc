//! Tree-producing graph algorithms.
//!
//! Each algorithm reads a [`Graph`] and returns a freshly built [`Graph`] with
//! the same vertex count that holds exactly the edges the algorithm selected:
//!
//! - [`bfs`] and [`dfs`] return search trees over the source's component.
//! - [`dijkstra`] returns the shortest-path tree rooted at the source.
//! - [`prim`] returns a minimum spanning tree of vertex 0's component.
//! - [`kruskal`] returns a minimum spanning forest over every component.
//!
//! The input graph is never modified and the output shares no storage with it.

mod mst;
mod shortest_path;
mod traversal;

use std::fmt;

use crate::{Graph, Result, Weight, structures::DisjointSet};

pub use self::{
    mst::{kruskal, prim},
    shortest_path::{dijkstra, shortest_distances},
    traversal::{bfs, dfs},
};

/// Selects one of the tree-producing algorithms at runtime.
///
/// # Examples
/// ```
/// use arbor_core::{Algorithm, GraphBuilder};
///
/// let graph = GraphBuilder::sample().build()?;
/// let tree = Algorithm::Kruskal.run(&graph, 0)?;
/// assert_eq!(tree.total_weight(), 16);
/// assert!(!Algorithm::Kruskal.requires_source());
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Breadth-first search tree.
    Bfs,
    /// Depth-first search tree.
    Dfs,
    /// Dijkstra shortest-path tree.
    Dijkstra,
    /// Prim minimum spanning tree rooted at vertex 0.
    Prim,
    /// Kruskal minimum spanning forest.
    Kruskal,
}

impl Algorithm {
    /// Every algorithm, in demonstration order.
    pub const ALL: [Self; 5] = [Self::Bfs, Self::Dfs, Self::Dijkstra, Self::Prim, Self::Kruskal];

    /// Returns `true` when the algorithm starts from a caller-chosen vertex.
    #[must_use]
    pub const fn requires_source(self) -> bool {
        matches!(self, Self::Bfs | Self::Dfs | Self::Dijkstra)
    }

    /// Returns the stable lowercase identifier of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Dijkstra => "dijkstra",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }

    /// Runs the algorithm against `graph`.
    ///
    /// `source` is ignored by [`Algorithm::Prim`] and [`Algorithm::Kruskal`].
    ///
    /// # Errors
    /// Propagates the error of the selected algorithm, such as
    /// [`crate::GraphError::VertexOutOfRange`] for an unknown source.
    pub fn run(self, graph: &Graph, source: usize) -> Result<Graph> {
        match self {
            Self::Bfs => bfs(graph, source),
            Self::Dfs => dfs(graph, source),
            Self::Dijkstra => dijkstra(graph, source),
            Self::Prim => prim(graph),
            Self::Kruskal => kruskal(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of a tree or forest produced by one of the algorithms.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SpanningSummary {
    edge_count: usize,
    total_weight: Weight,
    component_count: usize,
}

impl SpanningSummary {
    /// Measures `tree`.
    ///
    /// Isolated vertices count as components of their own, so a spanning tree
    /// of a connected graph reports one component.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::DisjointSet`] only if the graph's edge
    /// records are inconsistent with its vertex count.
    pub fn of(tree: &Graph) -> Result<Self> {
        let mut sets = DisjointSet::new(tree.vertex_count());
        for edge in tree.edges() {
            sets.union(edge.source(), edge.target())?;
        }
        Ok(Self {
            edge_count: tree.edge_count(),
            total_weight: tree.total_weight(),
            component_count: sets.component_count(),
        })
    }

    /// Returns the number of edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the sum of edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the number of connected components, isolated vertices
    /// included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the edges connect every vertex.
    #[must_use]
    pub const fn is_spanning_tree(&self) -> bool {
        self.component_count == 1
    }
}

#[cfg(test)]
mod property;
