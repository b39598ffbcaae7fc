//! Property runners checking algorithm output against the reference oracle
//! and against structural tree invariants.

use proptest::prelude::*;
use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    Algorithm, Graph, GraphError, SpanningSummary,
    algorithms::{kruskal, prim, shortest_distances},
};

use super::oracle::{reference_distances, reference_forest};
use super::types::{GraphFixture, Topology};

/// Kruskal yields a minimum spanning forest with `n - c` edges.
pub(super) fn run_spanning_forest_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let pristine = graph.clone();
    let forest = kruskal(&graph).map_err(|err| fail("kruskal", fixture, &err))?;
    let oracle = reference_forest(fixture);
    let summary = summarise(&forest, fixture)?;

    prop_assert_eq!(
        summary.total_weight(),
        oracle.total_weight(),
        "forest weight ({})",
        fixture.describe()
    );
    prop_assert_eq!(summary.component_count(), oracle.component_count);
    prop_assert_eq!(
        summary.edge_count(),
        fixture.vertex_count - oracle.component_count
    );
    ensure_drawn_from(&forest, &graph, fixture)?;
    prop_assert_eq!(&graph, &pristine, "input mutated ({})", fixture.describe());
    Ok(())
}

/// Prim spans exactly vertex 0's component at minimum weight.
pub(super) fn run_prim_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.build();
    let tree = prim(&graph).map_err(|err| fail("prim", fixture, &err))?;
    let oracle = reference_forest(fixture);
    let summary = summarise(&tree, fixture)?;

    prop_assert_eq!(summary.edge_count(), oracle.component_size_of(0) - 1);
    prop_assert_eq!(
        summary.total_weight(),
        oracle.weight_of_component_of(0),
        "prim weight ({})",
        fixture.describe()
    );
    for vertex in 0..fixture.vertex_count {
        if oracle.labels[vertex] != oracle.labels[0] {
            prop_assert_eq!(degree(&tree, vertex)?, 0, "vertex {} attached", vertex);
        }
    }
    if fixture.topology != Topology::Disconnected {
        prop_assert!(summary.is_spanning_tree(), "prim must span ({})", fixture.describe());
    }
    ensure_drawn_from(&tree, &graph, fixture)
}

/// Search trees cover the source's component without cycles; BFS depths are
/// hop distances and Dijkstra distances match the reference.
pub(super) fn run_search_tree_property(fixture: &GraphFixture, source: usize) -> TestCaseResult {
    let graph = fixture.build();
    let hops = reference_distances(fixture, source, true);
    let reachable = hops.iter().flatten().count();

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Dijkstra] {
        let tree = algorithm
            .run(&graph, source)
            .map_err(|err| fail(algorithm.as_str(), fixture, &err))?;
        let summary = summarise(&tree, fixture)?;

        prop_assert_eq!(
            summary.edge_count(),
            reachable - 1,
            "{} edge count ({})",
            algorithm,
            fixture.describe()
        );
        prop_assert_eq!(
            summary.component_count(),
            fixture.vertex_count - summary.edge_count(),
            "{} produced a cycle",
            algorithm
        );
        for (vertex, hop) in hops.iter().enumerate() {
            if hop.is_none() {
                prop_assert_eq!(degree(&tree, vertex)?, 0);
            }
        }
        ensure_drawn_from(&tree, &graph, fixture)?;

        if algorithm == Algorithm::Bfs {
            let depths = reference_distances(&fixture_of(&tree), source, true);
            prop_assert_eq!(depths, hops.clone(), "bfs depths ({})", fixture.describe());
        }
    }

    let distances =
        shortest_distances(&graph, source).map_err(|err| fail("distances", fixture, &err))?;
    prop_assert_eq!(
        distances,
        reference_distances(fixture, source, false),
        "dijkstra distances ({})",
        fixture.describe()
    );
    Ok(())
}

/// Prim and Kruskal agree on total weight for connected inputs.
pub(super) fn run_mst_agreement_property(fixture: &GraphFixture) -> TestCaseResult {
    if fixture.topology == Topology::Disconnected {
        return Ok(());
    }
    let graph = fixture.build();
    let by_prim = prim(&graph).map_err(|err| fail("prim", fixture, &err))?;
    let by_kruskal = kruskal(&graph).map_err(|err| fail("kruskal", fixture, &err))?;
    prop_assert_eq!(
        by_prim.total_weight(),
        by_kruskal.total_weight(),
        "({})",
        fixture.describe()
    );
    prop_assert_eq!(by_prim.edge_count(), by_kruskal.edge_count());
    Ok(())
}

fn summarise(tree: &Graph, fixture: &GraphFixture) -> Result<SpanningSummary, TestCaseError> {
    SpanningSummary::of(tree).map_err(|err| fail("summary", fixture, &err))
}

fn degree(tree: &Graph, vertex: usize) -> Result<usize, TestCaseError> {
    tree.degree(vertex)
        .map_err(|err| TestCaseError::fail(format!("degree({vertex}): {err}")))
}

/// Every tree edge must be a record of the input graph, weight included.
fn ensure_drawn_from(tree: &Graph, graph: &Graph, fixture: &GraphFixture) -> TestCaseResult {
    for edge in tree.edges() {
        let found = graph
            .neighbors(edge.source())
            .map_err(|err| fail("neighbors", fixture, &err))?
            .any(|n| n.destination() == edge.target() && n.weight() == edge.weight());
        prop_assert!(found, "edge {:?} not in input ({})", edge, fixture.describe());
    }
    Ok(())
}

fn fixture_of(tree: &Graph) -> GraphFixture {
    GraphFixture {
        vertex_count: tree.vertex_count(),
        edges: tree
            .edges()
            .map(|edge| (edge.source(), edge.target(), edge.weight()))
            .collect(),
        topology: Topology::Tree,
    }
}

fn fail(stage: &str, fixture: &GraphFixture, err: &GraphError) -> TestCaseError {
    TestCaseError::fail(format!("{stage} failed: {err} ({})", fixture.describe()))
}
