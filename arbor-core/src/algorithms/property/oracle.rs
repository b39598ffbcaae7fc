//! Reference computations over a fixture's raw edge list.
//!
//! Deliberately naive: nothing here touches [`crate::Graph`] or the
//! structures module, so agreement with the real algorithms is meaningful.

use crate::{Distance, Weight};

use super::types::GraphFixture;

/// Result of the reference minimum spanning forest.
#[derive(Clone, Debug)]
pub(super) struct ReferenceForest {
    /// Component label of every vertex.
    pub labels: Vec<usize>,
    /// Accepted edges.
    pub edges: Vec<(usize, usize, Weight)>,
    /// Number of components, isolated vertices included.
    pub component_count: usize,
}

impl ReferenceForest {
    /// Total weight of the forest.
    pub(super) fn total_weight(&self) -> Weight {
        self.edges.iter().map(|&(_, _, weight)| weight).sum()
    }

    /// Total weight of the tree covering `vertex`'s component.
    pub(super) fn weight_of_component_of(&self, vertex: usize) -> Weight {
        let label = self.labels[vertex];
        self.edges
            .iter()
            .filter(|&&(left, _, _)| self.labels[left] == label)
            .map(|&(_, _, weight)| weight)
            .sum()
    }

    /// Number of vertices sharing `vertex`'s component.
    pub(super) fn component_size_of(&self, vertex: usize) -> usize {
        let label = self.labels[vertex];
        self.labels.iter().filter(|&&other| other == label).count()
    }
}

/// Kruskal with O(n) relabelling in place of a disjoint-set forest.
pub(super) fn reference_forest(fixture: &GraphFixture) -> ReferenceForest {
    let mut labels: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut sorted = fixture.edges.clone();
    sorted.sort_by_key(|&(_, _, weight)| weight);

    let mut edges = Vec::new();
    for (left, right, weight) in sorted {
        let (keep, replace) = (labels[left], labels[right]);
        if keep == replace {
            continue;
        }
        for label in &mut labels {
            if *label == replace {
                *label = keep;
            }
        }
        edges.push((left, right, weight));
    }

    ReferenceForest {
        component_count: fixture.vertex_count - edges.len(),
        labels,
        edges,
    }
}

/// Bellman-Ford distances from `source`; `None` for unreachable vertices.
pub(super) fn reference_distances(
    fixture: &GraphFixture,
    source: usize,
    unit_weights: bool,
) -> Vec<Option<Distance>> {
    let mut distance = vec![None; fixture.vertex_count];
    distance[source] = Some(0);
    for _ in 0..fixture.vertex_count {
        let mut changed = false;
        for &(left, right, weight) in &fixture.edges {
            let weight = if unit_weights { 1 } else { weight };
            for (from, to) in [(left, right), (right, left)] {
                let Some(reached) = distance[from] else {
                    continue;
                };
                let candidate = reached + weight;
                if distance[to].is_none_or(|known| candidate < known) {
                    distance[to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distance
}
