//! Builder for assembling a [`Graph`] from a vertex count and an edge list.
//!
//! Validation is deferred to [`GraphBuilder::build`], so callers can collect
//! edges from any source and report a single structured error.

use crate::Result;

use super::{Graph, Weight};

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use arbor_core::GraphBuilder;
///
/// let graph = GraphBuilder::new(3)
///     .with_edge(0, 1, 2)
///     .with_unit_edge(1, 2)
///     .build()?;
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.total_weight(), 3);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges: Vec<(usize, usize, Weight)>,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices.
    #[must_use]
    pub const fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Returns the six-vertex demonstration graph.
    ///
    /// Its minimum spanning tree weighs 16.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{GraphBuilder, algorithms};
    ///
    /// let graph = GraphBuilder::sample().build()?;
    /// assert_eq!(algorithms::prim(&graph)?.total_weight(), 16);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn sample() -> Self {
        Self::new(6)
            .with_edge(0, 1, 4)
            .with_edge(0, 2, 3)
            .with_edge(1, 2, 5)
            .with_edge(1, 3, 2)
            .with_edge(2, 3, 7)
            .with_edge(2, 4, 8)
            .with_edge(3, 4, 6)
            .with_edge(3, 5, 1)
            .with_edge(4, 5, 9)
    }

    /// Queues an edge with an explicit weight.
    #[must_use]
    pub fn with_edge(mut self, left: usize, right: usize, weight: Weight) -> Self {
        self.edges.push((left, right, weight));
        self
    }

    /// Queues an edge with weight `1`.
    #[must_use]
    pub fn with_unit_edge(self, left: usize, right: usize) -> Self {
        self.with_edge(left, right, 1)
    }

    /// Queues every edge yielded by `edges`.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = (usize, usize, Weight)>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the number of queued edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Validates the configuration and constructs the [`Graph`].
    ///
    /// Edges are inserted in the order they were queued.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertexCount`] for an empty graph
    /// and [`crate::GraphError::VertexOutOfRange`] for the first queued edge
    /// with an unknown endpoint.
    pub fn build(self) -> Result<Graph> {
        let mut graph = Graph::new(self.vertex_count)?;
        for (left, right, weight) in self.edges {
            graph.add_edge(left, right, weight)?;
        }
        Ok(graph)
    }
}
