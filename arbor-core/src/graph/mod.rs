//! Undirected weighted graph with adjacency-list storage.
//!
//! Each vertex owns one growable list of [`Neighbor`] records. Adding an edge
//! appends a record to both endpoint lists, so the undirected invariant holds
//! by construction: every edge `(u, v, w)` appears once in `u`'s list and once
//! in `v`'s list with the same weight. Neighbour iteration yields the most
//! recently inserted record first.

mod builder;

use std::{fmt, iter::Copied, iter::Rev, slice};

use crate::{Result, error::GraphError};

pub use self::builder::GraphBuilder;

/// Integer edge weight.
pub type Weight = i64;

/// Accumulated path length used by shortest-path searches.
pub type Distance = i64;

/// Iterator over a vertex's neighbours in most-recently-inserted-first order.
pub type Neighbors<'a> = Copied<Rev<slice::Iter<'a, Neighbor>>>;

/// One adjacency record: the far endpoint of an edge and its weight.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Neighbor {
    destination: usize,
    weight: Weight,
}

impl Neighbor {
    /// Creates a record pointing at `destination`.
    #[must_use]
    pub const fn new(destination: usize, weight: Weight) -> Self {
        Self {
            destination,
            weight,
        }
    }

    /// Returns the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// An undirected edge in canonical form (`source <= target`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Creates an edge, ordering the endpoints canonically.
    #[must_use]
    pub const fn new(left: usize, right: usize, weight: Weight) -> Self {
        let (source, target) = if left <= right {
            (left, right)
        } else {
            (right, left)
        };
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

/// An undirected weighted graph over the dense vertex ids `[0, vertex_count)`.
///
/// Parallel edges are kept: every [`Graph::add_edge`] call adds new records
/// even when the endpoints are already joined. `Clone` produces a fully
/// independent deep copy.
///
/// # Examples
/// ```
/// use arbor_core::Graph;
///
/// let mut graph = Graph::new(3)?;
/// graph.add_edge(0, 1, 5)?;
/// graph.add_edge(0, 2, 7)?;
///
/// let first = graph.neighbors(0)?.next().map(|n| n.destination());
/// assert_eq!(first, Some(2));
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Neighbor>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` isolated vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertexCount`] when `vertex_count == 0`.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidVertexCount { got: vertex_count });
        }
        Ok(Self {
            adjacency: vec![Vec::new(); vertex_count],
        })
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges, counting parallel edges
    /// separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Adds the undirected edge `(left, right)` with the given weight.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph. The graph is left untouched on error.
    pub fn add_edge(&mut self, left: usize, right: usize, weight: Weight) -> Result<()> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;
        self.adjacency[left].push(Neighbor::new(right, weight));
        self.adjacency[right].push(Neighbor::new(left, weight));
        Ok(())
    }

    /// Adds the undirected edge `(left, right)` with weight `1`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when either endpoint is not a
    /// vertex of the graph.
    pub fn add_unit_edge(&mut self, left: usize, right: usize) -> Result<()> {
        self.add_edge(left, right, 1)
    }

    /// Removes one occurrence of the edge `(left, right)`.
    ///
    /// The first matching record in neighbour order is dropped from each
    /// endpoint's list; further parallel edges stay in place.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown endpoint and
    /// [`GraphError::EdgeNotFound`] when neither list holds a matching record.
    pub fn remove_edge(&mut self, left: usize, right: usize) -> Result<()> {
        self.check_vertex(left)?;
        self.check_vertex(right)?;

        let removed_forward = remove_first_record(&mut self.adjacency[left], right);
        let removed_reverse = remove_first_record(&mut self.adjacency[right], left);

        if removed_forward || removed_reverse {
            Ok(())
        } else {
            Err(GraphError::EdgeNotFound { left, right })
        }
    }

    /// Returns the neighbours of `vertex`, most recently inserted first.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is unknown.
    pub fn neighbors(&self, vertex: usize) -> Result<Neighbors<'_>> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().rev().copied())
    }

    /// Returns the number of adjacency records held by `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] when `vertex` is unknown.
    pub fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].len())
    }

    /// Returns `true` when at least one edge joins `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown endpoint.
    pub fn has_edge(&self, left: usize, right: usize) -> Result<bool> {
        Ok(self.edge_weight(left, right)?.is_some())
    }

    /// Returns the weight of the first edge from `left` to `right` in
    /// `left`'s neighbour order, or `None` when they are not adjacent.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown endpoint.
    pub fn edge_weight(&self, left: usize, right: usize) -> Result<Option<Weight>> {
        self.check_vertex(right)?;
        Ok(self
            .neighbors(left)?
            .find(|neighbor| neighbor.destination == right)
            .map(|neighbor| neighbor.weight))
    }

    /// Lists every undirected edge once in canonical form.
    ///
    /// Edges are grouped by their smaller endpoint in ascending order and,
    /// within a group, follow that endpoint's neighbour order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, records)| {
                // A self-loop stores two records in the same list; report one.
                let mut loop_pending = false;
                records.iter().rev().filter_map(move |record| {
                    if record.destination == source {
                        loop_pending = !loop_pending;
                        return loop_pending.then_some(Edge::new(source, source, record.weight));
                    }
                    (source < record.destination)
                        .then_some(Edge::new(source, record.destination, record.weight))
                })
            })
    }

    /// Returns the sum of all edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.edges().map(|edge| edge.weight).sum()
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.adjacency.len(),
            })
        }
    }
}

fn remove_first_record(records: &mut Vec<Neighbor>, destination: usize) -> bool {
    // Records are stored oldest first, so the first in neighbour order is the
    // last matching slot.
    match records
        .iter()
        .rposition(|record| record.destination == destination)
    {
        Some(position) => {
            records.remove(position);
            true
        }
        None => false,
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, records) in self.adjacency.iter().enumerate() {
            write!(f, "Vertex {vertex} -> ")?;
            for record in records.iter().rev() {
                write!(f, "({}, weight: {}) ", record.destination, record.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
