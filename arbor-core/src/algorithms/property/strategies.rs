//! Graph generators for the algorithm property suite.
//!
//! Every generator is driven by a seeded [`SmallRng`] so a failing case can be
//! replayed from its topology and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Weight;

use super::types::{GraphFixture, Topology};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 48;
/// Dense graphs stay small to bound the quadratic edge count.
const DENSE_MAX_VERTICES: usize = 24;
const MAX_WEIGHT: Weight = 50;

/// Generates fixtures across every [`Topology`].
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (any::<Topology>(), any::<u64>()).prop_map(|(topology, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(topology, &mut rng)
    })
}

/// Generates a fixture for an explicit topology.
pub(super) fn generate_fixture(topology: Topology, rng: &mut SmallRng) -> GraphFixture {
    let mut fixture = match topology {
        Topology::Tree => generate_tree(rng),
        Topology::Sparse => generate_sparse(rng),
        Topology::Dense => generate_dense(rng),
        Topology::Multigraph => generate_multigraph(rng),
        Topology::Disconnected => generate_disconnected(rng),
    };
    fixture.topology = topology;
    fixture
}

fn generate_tree(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::with_capacity(vertex_count);
    push_random_tree(&mut edges, 0, vertex_count, rng, |r| r.gen_range(0..=MAX_WEIGHT));
    fixture(vertex_count, edges)
}

fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();
    push_random_tree(&mut edges, 0, vertex_count, rng, |r| r.gen_range(0..=MAX_WEIGHT));

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push((left, right, rng.gen_range(0..=MAX_WEIGHT)));
        }
    }
    fixture(vertex_count, edges)
}

fn generate_dense(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let probability: f64 = rng.gen_range(0.7..=0.95);
    let mut edges = Vec::new();
    push_random_tree(&mut edges, 0, vertex_count, rng, |r| r.gen_range(0..=MAX_WEIGHT));
    for left in 0..vertex_count {
        for right in (left + 1)..vertex_count {
            if rng.gen_bool(probability) {
                edges.push((left, right, rng.gen_range(0..=MAX_WEIGHT)));
            }
        }
    }
    fixture(vertex_count, edges)
}

/// Few distinct weights, parallel edges, and self-loops on top of a tree.
fn generate_multigraph(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let pick = move |r: &mut SmallRng| pool[r.gen_range(0..pool.len())];

    let mut edges = Vec::new();
    push_random_tree(&mut edges, 0, vertex_count, rng, pick.clone());

    let duplicates = rng.gen_range(1..=vertex_count);
    for _ in 0..duplicates {
        let (left, right, _) = edges[rng.gen_range(0..edges.len())];
        edges.push((right, left, pick(rng)));
    }
    for _ in 0..rng.gen_range(0..=3) {
        let vertex = rng.gen_range(0..vertex_count);
        edges.push((vertex, vertex, pick(rng)));
    }
    fixture(vertex_count, edges)
}

/// Components occupy contiguous id ranges, so vertex 0 always sits in the
/// first one.
fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(1..=12))
        .collect();
    let vertex_count = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        push_random_tree(&mut edges, offset, size, rng, |r| r.gen_range(0..=MAX_WEIGHT));
        let extra = rng.gen_range(0..=size);
        for _ in 0..extra {
            let left = offset + rng.gen_range(0..size);
            let right = offset + rng.gen_range(0..size);
            if left != right {
                edges.push((left, right, rng.gen_range(0..=MAX_WEIGHT)));
            }
        }
        offset += size;
    }
    fixture(vertex_count, edges)
}

/// Appends a random spanning tree over `offset..offset + size` by walking a
/// shuffled permutation and attaching each vertex to an earlier one.
fn push_random_tree(
    edges: &mut Vec<(usize, usize, Weight)>,
    offset: usize,
    size: usize,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> Weight,
) {
    let mut order: Vec<usize> = (offset..offset + size).collect();
    shuffle(&mut order, rng);
    for index in 1..order.len() {
        let parent = order[rng.gen_range(0..index)];
        edges.push((parent, order[index], weight(rng)));
    }
}

/// Fisher-Yates shuffle.
fn shuffle(slice: &mut [usize], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

fn fixture(vertex_count: usize, edges: Vec<(usize, usize, Weight)>) -> GraphFixture {
    GraphFixture {
        vertex_count,
        edges,
        topology: Topology::Tree,
    }
}
