//! Fixture and topology types for the algorithm property suite.

use test_strategy::Arbitrary;

use crate::{Graph, GraphBuilder, Weight};

/// Shape of a generated input graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum Topology {
    /// A random spanning tree and nothing else.
    #[weight(2)]
    Tree,
    /// A random spanning tree plus roughly `0.5n` to `n` extra edges.
    #[weight(3)]
    Sparse,
    /// A spanning tree overlaid with most of the remaining vertex pairs.
    #[weight(2)]
    Dense,
    /// Connected graph with parallel edges, self-loops, and few distinct
    /// weights.
    #[weight(3)]
    Multigraph,
    /// Two to four components with no edges between them.
    #[weight(3)]
    Disconnected,
}

/// Generated graph together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Edges in insertion order.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Topology used during generation.
    pub topology: Topology,
}

impl GraphFixture {
    /// Builds the adjacency-list graph for this fixture.
    pub(super) fn build(&self) -> Graph {
        GraphBuilder::new(self.vertex_count)
            .with_edges(self.edges.iter().copied())
            .build()
            .expect("fixture edges must be in range")
    }

    /// Short context string appended to property failures.
    pub(super) fn describe(&self) -> String {
        format!(
            "topology={:?}, vertices={}, edges={}",
            self.topology,
            self.vertex_count,
            self.edges.len()
        )
    }
}
